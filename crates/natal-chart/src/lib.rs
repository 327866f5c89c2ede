//! Natal chart rendering.
//!
//! A render request (planet longitudes, house cusps, aspects) is laid out
//! into concentric rings and serialized as a standalone SVG document. The
//! crate does no I/O and keeps no state between renders.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod rendering;

pub use chart::{
    load_chart_request_from_json, load_chart_request_from_value, ChartRequest, ChartSettings,
    ChartVariant,
};
pub use error::ChartRequestError;
pub use rendering::{ChartRenderer, ChartSpec, GlyphConfig, VisualConfig};

/// Render a JSON request with the default look
pub fn render_natal_chart_svg(json: &str) -> String {
    ChartRenderer::new().render_json(json)
}
