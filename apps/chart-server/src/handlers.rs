use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use natal_chart::chart::ChartVariant;
use natal_chart::rendering::ChartSpec;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::routes::AppState;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn render_chart_svg(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    render_svg_response(&state, &body, ChartVariant::Full, "/render-natal-chart-svg")
}

pub async fn render_minimal_chart_svg(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    render_svg_response(
        &state,
        &body,
        ChartVariant::Minimal,
        "/render-natal-chart-svg/minimal",
    )
}

/// Every body gets a renderable document; problems show up inside the SVG.
fn render_svg_response(
    state: &AppState,
    body: &[u8],
    variant: ChartVariant,
    route: &str,
) -> Response {
    let started = Instant::now();
    let svg = match std::str::from_utf8(body) {
        Ok(text) => state.renderer.render_json_variant(text, variant),
        Err(e) => {
            log::warn!("{route}: request body is not UTF-8: {e}");
            state
                .renderer
                .error_document(variant, "Request body is not valid UTF-8")
        }
    };
    log::info!(
        "{route}: {} bytes in, {} bytes out, {:?}",
        body.len(),
        svg.len(),
        started.elapsed()
    );
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response()
}

pub async fn render_chart_spec(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChartSpec>, (StatusCode, Json<Value>)> {
    let started = Instant::now();
    let text = std::str::from_utf8(&body).map_err(|_| {
        unprocessable("Request body is not valid UTF-8".to_string())
    })?;
    let spec = state
        .renderer
        .spec_from_json(text, ChartVariant::Full)
        .map_err(|e| {
            log::warn!("/render-natal-chart-spec: {e}");
            unprocessable(e.to_string())
        })?;
    log::info!(
        "/render-natal-chart-spec: {} bytes in, {} layers, {:?}",
        body.len(),
        spec.layers.len(),
        started.elapsed()
    );
    Ok(Json(spec))
}

fn unprocessable(message: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
}
