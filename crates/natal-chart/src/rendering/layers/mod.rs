//! Ring renderers. Each turns ring items (zodiacal degrees) into drawing
//! primitives for one layer of the wheel.

pub mod degrees;
pub mod frame;
pub mod houses;
pub mod planets;
pub mod zodiac;

use crate::chart::settings::ChartSettings;
use crate::rendering::primitives::Point;
use crate::rendering::visual_config::VisualConfig;

/// Shared, read-only inputs of every ring renderer
#[derive(Debug, Clone, Copy)]
pub struct RingContext<'a> {
    pub center: Point,
    pub settings: &'a ChartSettings,
    pub visual: &'a VisualConfig,
}

impl<'a> RingContext<'a> {
    pub fn new(center: Point, settings: &'a ChartSettings, visual: &'a VisualConfig) -> Self {
        Self {
            center,
            settings,
            visual,
        }
    }
}
