//! HTTP Routes
//!
//! Axum router configuration for the chart service.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use natal_chart::rendering::ChartRenderer;
use natal_config::{ServiceConfig, DEFAULT_BODY_LIMIT};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;

/// Application state shared across handlers
pub struct AppState {
    pub renderer: ChartRenderer,
    pub body_limit_bytes: usize,
}

impl AppState {
    pub fn new(renderer: ChartRenderer) -> Self {
        Self {
            renderer,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            renderer: config.renderer(),
            body_limit_bytes: config.server.body_limit_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChartRenderer::new())
    }
}

/// Create the main application router
///
/// # Routes
///
/// - `GET /health` - Basic health check endpoint
/// - `POST /render-natal-chart-svg` - Full chart as `image/svg+xml`
/// - `POST /render-natal-chart-svg/minimal` - 400×400 minimal chart
/// - `POST /render-natal-chart-spec` - Layered chart description as JSON
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/render-natal-chart-svg", post(handlers::render_chart_svg))
        .route(
            "/render-natal-chart-svg/minimal",
            post(handlers::render_minimal_chart_svg),
        )
        .route("/render-natal-chart-spec", post(handlers::render_chart_spec))
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}
