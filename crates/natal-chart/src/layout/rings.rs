//! Ring items: the chart content resolved into zodiacal degrees, before any
//! screen geometry is involved.

use crate::chart::request::{AspectEntry, HouseCusp, PlanetPosition};
use crate::error::ChartRequestError;
use crate::geometry::{forward_span, mid_angle, normalize_degrees};
use crate::rendering::glyphs::ZodiacSign;
use crate::rendering::primitives::{Color, Stroke};
use crate::rendering::visual_config::GlyphConfig;
use std::collections::HashMap;

pub const HOUSE_COUNT: usize = 12;

/// Tolerance for "strictly inside a house" when placing subdivisions
const SUBDIVISION_EPSILON: f64 = 1e-9;

/// Position within sign (0-30)
pub fn get_sign_degree(longitude: f64) -> f64 {
    longitude - ZodiacSign::from_longitude(longitude).start_longitude()
}

/// Format a degree-in-sign as `12°05'`
pub fn format_sign_degree(degree: f64) -> String {
    let total_minutes = (degree * 60.0).round() as i64;
    format!("{}°{:02}'", total_minutes / 60, total_minutes % 60)
}

/// Sign ring item
#[derive(Debug, Clone, PartialEq)]
pub struct SignRingItem {
    pub sign: ZodiacSign,
    pub start_lon: f64,
    pub end_lon: f64,
}

impl SignRingItem {
    pub fn mid_lon(&self) -> f64 {
        mid_angle(self.start_lon, self.end_lon)
    }
}

/// Build static zodiac items (12 signs of 30° each)
pub fn build_static_zodiac_items() -> Vec<SignRingItem> {
    ZodiacSign::ALL
        .iter()
        .map(|sign| SignRingItem {
            sign: *sign,
            start_lon: sign.start_longitude(),
            end_lon: sign.start_longitude() + ZodiacSign::SPAN,
        })
        .collect()
}

/// House ring item: one house from its cusp to the following cusp
#[derive(Debug, Clone, PartialEq)]
pub struct HouseRingItem {
    pub house_number: u32,
    pub cusp_lon: f64,
    pub next_cusp_lon: f64,
    /// Forward distance between the two cusps, in [0, 360)
    pub span: f64,
}

impl HouseRingItem {
    pub fn mid_lon(&self) -> f64 {
        mid_angle(self.cusp_lon, self.next_cusp_lon)
    }

    /// Longitudes every `step` degrees after the cusp, strictly inside the
    /// house. A zero-width house has none.
    pub fn subdivision_angles(&self, step: f64) -> Vec<f64> {
        if !(step.is_finite() && step > 0.0) {
            return Vec::new();
        }
        (1u32..)
            .map(|j| f64::from(j) * step)
            .take_while(|offset| *offset < self.span - SUBDIVISION_EPSILON)
            .map(|offset| normalize_degrees(self.cusp_lon + offset))
            .collect()
    }
}

/// Build the 12 house items from cusps ordered by house number.
///
/// House `i` runs from cusp `i` to cusp `(i + 1) mod 12`.
pub fn build_house_items(cusps: &[HouseCusp]) -> Result<Vec<HouseRingItem>, ChartRequestError> {
    if cusps.len() != HOUSE_COUNT {
        return Err(ChartRequestError::IncompleteHouses { found: cusps.len() });
    }

    let longitudes = cusps
        .iter()
        .enumerate()
        .map(|(i, cusp)| {
            cusp.resolved_longitude().ok_or_else(|| {
                ChartRequestError::InvalidFieldValue(format!(
                    "house_cusps[{i}] has no usable longitude"
                ))
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let items = cusps
        .iter()
        .enumerate()
        .map(|(i, cusp)| {
            let cusp_lon = longitudes[i];
            let next_cusp_lon = longitudes[(i + 1) % HOUSE_COUNT];
            HouseRingItem {
                house_number: cusp.house.unwrap_or(i as u32 + 1),
                cusp_lon,
                next_cusp_lon,
                span: forward_span(cusp_lon, next_cusp_lon),
            }
        })
        .collect();

    Ok(items)
}

/// Planet ring item
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRingItem {
    pub name: String,
    pub symbol: String,
    pub lon: f64,
    pub sign: ZodiacSign,
    pub sign_degree: f64,
}

impl PlanetRingItem {
    /// Hover label such as `Sun 2°20' Taurus`
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            format_sign_degree(self.sign_degree),
            self.sign.name()
        )
    }
}

/// Build planet items; entries without a usable longitude are dropped.
pub fn build_planet_items(planets: &[PlanetPosition], glyphs: &GlyphConfig) -> Vec<PlanetRingItem> {
    planets
        .iter()
        .filter_map(|planet| {
            let Some(lon) = planet.resolved_longitude() else {
                log::warn!("dropping planet {:?}: no usable longitude", planet.name);
                return None;
            };
            let symbol = planet
                .glyph
                .as_deref()
                .map(str::trim)
                .filter(|glyph| !glyph.is_empty())
                .unwrap_or_else(|| glyphs.planet_symbol(&planet.name))
                .to_string();
            Some(PlanetRingItem {
                name: planet.name.clone(),
                symbol,
                lon,
                sign: ZodiacSign::from_longitude(lon),
                sign_degree: get_sign_degree(lon),
            })
        })
        .collect()
}

/// Aspect ring item with both endpoints resolved
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRingItem {
    pub from: String,
    pub to: String,
    pub from_lon: f64,
    pub to_lon: f64,
    pub aspect_type: Option<String>,
    pub stroke: Stroke,
}

/// Resolve aspects against the planets that were actually placed.
///
/// An aspect naming a planet that is not present is dropped. With duplicate
/// planet names the last entry is the one aspects attach to.
pub fn build_aspect_items(
    planets: &[PlanetRingItem],
    aspects: &[AspectEntry],
    default_stroke: &Stroke,
) -> Vec<AspectRingItem> {
    let by_name: HashMap<&str, f64> = planets
        .iter()
        .map(|planet| (planet.name.as_str(), planet.lon))
        .collect();

    aspects
        .iter()
        .filter_map(|aspect| {
            let from = aspect.p1.as_deref()?;
            let to = aspect.p2.as_deref()?;
            let (Some(from_lon), Some(to_lon)) = (by_name.get(from), by_name.get(to)) else {
                log::warn!("dropping aspect {from}-{to}: endpoint not among planets");
                return None;
            };
            Some(AspectRingItem {
                from: from.to_string(),
                to: to.to_string(),
                from_lon: *from_lon,
                to_lon: *to_lon,
                aspect_type: aspect.aspect.clone(),
                stroke: aspect_stroke(aspect, default_stroke),
            })
        })
        .collect()
}

/// Widest aspect line accepted from a request, in canvas units
pub const MAX_ASPECT_STROKE_WIDTH: f64 = 20.0;

fn aspect_stroke(aspect: &AspectEntry, default_stroke: &Stroke) -> Stroke {
    let color = match aspect.color.as_deref() {
        None => default_stroke.color,
        Some(css) => Color::from_css(css).unwrap_or_else(|| {
            log::warn!("unsupported aspect color {css:?}, using default");
            default_stroke.color
        }),
    };
    let width = match aspect.stroke_width {
        None => default_stroke.width,
        Some(width) if width.is_finite() && width > 0.0 && width <= MAX_ASPECT_STROKE_WIDTH => {
            width
        }
        Some(width) => {
            log::warn!("aspect stroke width {width} out of range, using default");
            default_stroke.width
        }
    };
    Stroke {
        color,
        width,
        ..default_stroke.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cusps(longitudes: &[f64]) -> Vec<HouseCusp> {
        longitudes
            .iter()
            .enumerate()
            .map(|(i, lon)| HouseCusp::new(i as u32 + 1, *lon))
            .collect()
    }

    #[test]
    fn zodiac_items_cover_the_circle() {
        let items = build_static_zodiac_items();
        assert_eq!(items.len(), 12);
        assert_eq!(items[0].sign, ZodiacSign::Aries);
        assert_eq!(items[11].start_lon, 330.0);
        assert_eq!(items[11].end_lon, 360.0);
        assert_eq!(items[3].mid_lon(), 105.0);
    }

    #[test]
    fn wrong_cusp_count_is_reported() {
        let err = build_house_items(&cusps(&[0.0; 11])).unwrap_err();
        assert_eq!(err, ChartRequestError::IncompleteHouses { found: 11 });
    }

    #[test]
    fn house_wrapping_past_aries() {
        let lons = [
            350.0, 20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 320.0,
        ];
        let items = build_house_items(&cusps(&lons)).unwrap();
        assert_eq!(items[0].span, 30.0);
        assert_eq!(items[0].mid_lon(), 5.0);
        assert_eq!(items[11].next_cusp_lon, 350.0);
        assert_eq!(items[11].span, 30.0);
    }

    #[test]
    fn subdivisions_are_strictly_inside() {
        let house = HouseRingItem {
            house_number: 1,
            cusp_lon: 355.0,
            next_cusp_lon: 10.0,
            span: 15.0,
        };
        assert_eq!(house.subdivision_angles(5.0), vec![0.0, 5.0]);

        let empty = HouseRingItem {
            span: 0.0,
            next_cusp_lon: 355.0,
            ..house.clone()
        };
        assert!(empty.subdivision_angles(5.0).is_empty());
        assert!(house.subdivision_angles(0.0).is_empty());
    }

    #[test]
    fn planet_without_longitude_is_dropped() {
        let planets = vec![
            PlanetPosition::new("Sun", 32.33),
            PlanetPosition {
                name: "Moon".to_string(),
                ..PlanetPosition::default()
            },
        ];
        let items = build_planet_items(&planets, &GlyphConfig::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sign, ZodiacSign::Taurus);
        assert_eq!(items[0].label(), "Sun 2°20' Taurus");
    }

    #[test]
    fn aspect_defaults_and_drops() {
        let planets = build_planet_items(
            &[PlanetPosition::new("Sun", 10.0), PlanetPosition::new("Moon", 130.0)],
            &GlyphConfig::default(),
        );
        let default_stroke = Stroke::solid(Color::GRAY, 2.0);
        let mut colored = AspectEntry::between("Sun", "Moon");
        colored.color = Some("#ff0000".to_string());
        colored.stroke_width = Some(3.5);
        let aspects = vec![
            AspectEntry::between("Sun", "Moon"),
            AspectEntry::between("Sun", "Pluto"),
            colored,
        ];
        let items = build_aspect_items(&planets, &aspects, &default_stroke);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].stroke, default_stroke);
        assert_eq!(items[1].stroke.color, Color::RED);
        assert_eq!(items[1].stroke.width, 3.5);
    }

    #[test]
    fn out_of_range_aspect_width_uses_default() {
        let planets = build_planet_items(
            &[PlanetPosition::new("Sun", 10.0), PlanetPosition::new("Moon", 130.0)],
            &GlyphConfig::default(),
        );
        let default_stroke = Stroke::solid(Color::GRAY, 2.0);
        let aspects: Vec<AspectEntry> = [1e307, f64::INFINITY, -1.0, 0.0, MAX_ASPECT_STROKE_WIDTH + 0.5]
            .into_iter()
            .map(|width| {
                let mut aspect = AspectEntry::between("Sun", "Moon");
                aspect.stroke_width = Some(width);
                aspect
            })
            .collect();
        let items = build_aspect_items(&planets, &aspects, &default_stroke);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| item.stroke.width == 2.0));
    }
}
