use crate::rendering::glyphs::{Glyph, FALLBACK_SYMBOL};
use crate::rendering::primitives::{Color, Font, Stroke};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visual styling configuration for chart elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Background rings
    pub background_fill: Color,
    pub background_stroke: Color,
    pub background_stroke_width: f64,
    pub ring_stroke: Color,
    pub panel_fill: Color,
    pub panel_stroke: Color,

    // Zodiac belt
    pub zodiac_fill: Color,
    pub zodiac_text: Color,
    pub sign_name_size: f64,
    pub sign_name_spacing: f64,
    pub sign_glyph_size: f64,

    // Degree ticks
    pub tick_color: Color,
    pub major_tick_width: f64,
    pub minor_tick_width: f64,
    pub major_tick_dash: Vec<f64>,
    pub minor_tick_dash: Vec<f64>,

    // Houses
    pub house_fill: Color,
    pub house_number_color: Color,
    pub house_number_size: f64,
    pub cusp_color: Color,
    pub cusp_width: f64,
    pub subdivision_color: Color,
    pub subdivision_width: f64,
    pub subdivision_dash: Vec<f64>,

    // Planets and aspects
    pub planet_color: Color,
    pub planet_glyph_size: f64,
    pub aspect_color: Color,
    pub aspect_stroke_width: f64,
    pub aspect_opacity: f64,

    // Text
    pub sans_font: String,
    pub serif_font: String,
    pub title_color: Color,
    pub title_size: f64,
    pub error_color: Color,
    pub error_size: f64,

    // Minimal variant
    pub minimal_fill: Color,
    pub minimal_accent: Color,
    pub minimal_stroke_width: f64,
    pub minimal_title_size: f64,
    pub minimal_label_size: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let dark = Color::rgb(0x3c, 0x37, 0x44);
        let light_gray = Color::rgb(0xcc, 0xcc, 0xcc);
        Self {
            background_fill: dark,
            background_stroke: Color::WHITE,
            background_stroke_width: 2.0,
            ring_stroke: Color::WHITE,
            panel_fill: Color::WHITE,
            panel_stroke: dark,

            zodiac_fill: Color::rgb(0x4a, 0x4a, 0x52),
            zodiac_text: Color::WHITE,
            sign_name_size: 16.0,
            sign_name_spacing: 2.0,
            sign_glyph_size: 28.0,

            tick_color: light_gray,
            major_tick_width: 1.0,
            minor_tick_width: 0.5,
            major_tick_dash: vec![2.0, 4.0],
            minor_tick_dash: vec![1.0, 3.0],

            house_fill: Color::WHITE,
            house_number_color: Color::rgb(0xbb, 0xbb, 0xbb),
            house_number_size: 16.0,
            cusp_color: Color::rgb(0x88, 0x88, 0x88),
            cusp_width: 2.0,
            subdivision_color: light_gray,
            subdivision_width: 1.0,
            subdivision_dash: vec![2.0, 4.0],

            planet_color: Color::rgb(0x22, 0x22, 0x22),
            planet_glyph_size: 28.0,
            aspect_color: Color::GRAY,
            aspect_stroke_width: 2.0,
            aspect_opacity: 0.8,

            sans_font: "sans-serif".to_string(),
            serif_font: "serif".to_string(),
            title_color: Color::rgb(0x88, 0x88, 0x88),
            title_size: 18.0,
            error_color: Color::RED,
            error_size: 24.0,

            minimal_fill: Color::rgb(0xf5, 0xf3, 0xff),
            minimal_accent: Color::rgb(0x6c, 0x3a, 0xff),
            minimal_stroke_width: 4.0,
            minimal_title_size: 20.0,
            minimal_label_size: 16.0,
        }
    }
}

impl VisualConfig {
    pub fn sans(&self, size: f64) -> Font {
        Font {
            size,
            family: Some(self.sans_font.clone()),
            letter_spacing: None,
        }
    }

    pub fn serif(&self, size: f64) -> Font {
        Font {
            size,
            family: Some(self.serif_font.clone()),
            letter_spacing: None,
        }
    }

    /// Stroke for aspect lines without an explicit color or width
    pub fn default_aspect_stroke(&self) -> Stroke {
        Stroke {
            opacity: Some(self.aspect_opacity),
            ..Stroke::solid(self.aspect_color, self.aspect_stroke_width)
        }
    }
}

/// Glyph configuration: name→symbol overrides on top of the built-in table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub planet_glyphs: BTreeMap<String, String>,
    pub fallback: String,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            planet_glyphs: BTreeMap::new(),
            fallback: FALLBACK_SYMBOL.to_string(),
        }
    }
}

impl GlyphConfig {
    /// Symbol for a planet identifier: configured override, then the
    /// built-in table, then the fallback marker.
    ///
    /// An exact key wins over a case-insensitive one; among case-insensitive
    /// matches the first in key order wins.
    pub fn planet_symbol(&self, name: &str) -> &str {
        let matched = self.planet_glyphs.get(name).or_else(|| {
            self.planet_glyphs
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, symbol)| symbol)
        });
        if let Some(symbol) = matched {
            return symbol;
        }
        match Glyph::from_name(name) {
            Glyph::Unknown => &self.fallback,
            glyph => glyph.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_planet_uses_fallback() {
        let glyphs = GlyphConfig::default();
        assert_eq!(glyphs.planet_symbol("Sun"), "\u{2609}");
        assert_eq!(glyphs.planet_symbol("Transpluto"), "?");
    }

    #[test]
    fn overrides_take_precedence() {
        let mut glyphs = GlyphConfig::default();
        glyphs.planet_glyphs.insert("sun".to_string(), "S".to_string());
        glyphs.fallback = "*".to_string();
        assert_eq!(glyphs.planet_symbol("Sun"), "S");
        assert_eq!(glyphs.planet_symbol("Eris"), "*");
    }

    #[test]
    fn override_lookup_is_stable_when_keys_differ_only_in_case() {
        for _ in 0..20 {
            let mut glyphs = GlyphConfig::default();
            glyphs.planet_glyphs.insert("sun".to_string(), "A".to_string());
            glyphs.planet_glyphs.insert("Sun".to_string(), "B".to_string());
            assert_eq!(glyphs.planet_symbol("Sun"), "B");
            assert_eq!(glyphs.planet_symbol("sun"), "A");
            assert_eq!(glyphs.planet_symbol("SUN"), "B");
        }
    }
}
