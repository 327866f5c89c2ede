use serde::{Deserialize, Serialize};

/// What to do when house data is present but not exactly 12 usable cusps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncompleteHousesPolicy {
    /// Omit the house ring, cusp lines and subdivisions; draw the rest
    #[default]
    Skip,
    /// Replace the whole chart with the error document
    Reject,
}

/// Radii of the concentric rings, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRadii {
    pub outer: f64,
    pub zodiac_outer: f64,
    pub zodiac_inner: f64,
    pub house_outer: f64,
    pub house_inner: f64,
    pub center: f64,
}

impl Default for ChartRadii {
    fn default() -> Self {
        Self {
            outer: 290.0,
            zodiac_outer: 280.0,
            zodiac_inner: 230.0,
            house_outer: 225.0,
            house_inner: 160.0,
            center: 90.0,
        }
    }
}

impl ChartRadii {
    /// Radius planets and aspect endpoints sit on
    pub fn planet_radius(&self) -> f64 {
        (self.house_inner + self.center) / 2.0
    }
}

/// Settings for the 400×400 minimal variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimalSettings {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub max_planets: usize,
}

impl Default for MinimalSettings {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            radius: 150.0,
            max_planets: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    // Canvas
    pub width: f64,
    pub height: f64,
    pub radii: ChartRadii,

    // Degree ticks
    pub major_tick_step: u32,
    pub minor_tick_inset: f64,

    // Houses
    pub subdivision_step: f64,
    pub incomplete_houses: IncompleteHousesPolicy,

    // Labels
    pub sign_glyph_inset: f64,
    pub show_title: bool,
    pub title_y: f64,

    pub minimal: MinimalSettings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            radii: ChartRadii::default(),
            major_tick_step: 10,
            minor_tick_inset: 10.0,
            subdivision_step: 5.0,
            incomplete_houses: IncompleteHousesPolicy::Skip,
            sign_glyph_inset: 18.0,
            show_title: true,
            title_y: 40.0,
            minimal: MinimalSettings::default(),
        }
    }
}
