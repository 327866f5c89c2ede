use crate::chart::loader::ChartVariant;
use crate::rendering::primitives::{Point, Shape};
use serde::{Deserialize, Serialize};

/// Named drawing layers. Declaration order is the draw order of the full
/// chart: later layers paint over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Background,
    ZodiacBelt,
    DegreeTicks,
    Houses,
    CuspLines,
    HouseSubdivisions,
    Aspects,
    CenterDisk,
    Planets,
    Title,
    Error,
}

impl LayerKind {
    /// Group id in the SVG output
    pub fn id(&self) -> &'static str {
        match self {
            LayerKind::Background => "background",
            LayerKind::ZodiacBelt => "zodiac-belt",
            LayerKind::DegreeTicks => "degree-ticks",
            LayerKind::Houses => "houses",
            LayerKind::CuspLines => "cusp-lines",
            LayerKind::HouseSubdivisions => "house-subdivisions",
            LayerKind::Aspects => "aspects",
            LayerKind::CenterDisk => "center-disk",
            LayerKind::Planets => "planets",
            LayerKind::Title => "title",
            LayerKind::Error => "error",
        }
    }
}

/// One layer of primitives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub shapes: Vec<Shape>,
}

/// What the generator resolved, and what it had to leave out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub variant: ChartVariant,
    pub planets_placed: usize,
    pub planets_dropped: usize,
    pub houses_rendered: bool,
    pub aspects_drawn: usize,
    pub aspects_dropped: usize,
}

/// Declarative description of a chart, layer by layer, before serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub layers: Vec<Layer>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            layers: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    /// Append a layer on top of the existing ones. Empty layers are not kept.
    pub fn push_layer(&mut self, kind: LayerKind, shapes: Vec<Shape>) {
        if !shapes.is_empty() {
            self.layers.push(Layer { kind, shapes });
        }
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// All shapes in draw order
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|layer| layer.shapes.iter())
    }
}
