pub mod generator;
pub mod glyphs;
pub mod layers;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::ChartRenderer;
pub use primitives::{Color, Font, Point, Shape, Stroke, TextAnchor};
pub use spec::{ChartMetadata, ChartSpec, Layer, LayerKind};
pub use svg::{escape_xml, render_error_svg, render_svg};
pub use visual_config::{GlyphConfig, VisualConfig};
