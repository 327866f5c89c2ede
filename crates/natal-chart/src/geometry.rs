//! Angular geometry for the chart wheel.
//!
//! Everything outside this module reasons in zodiacal degrees only
//! (0° = Aries point). The one place where those degrees meet screen space
//! is [`to_point`]: zodiacal 0° is placed at the top of the canvas and angles
//! grow clockwise on screen.

use crate::rendering::primitives::Point;
use std::fmt;

/// Screen angle = zodiacal degrees + this offset
pub const SCREEN_OFFSET_DEG: f64 = -90.0;

/// Wrap an angle into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Forward (increasing-longitude) distance from `start` to `end`, in [0, 360)
pub fn forward_span(start: f64, end: f64) -> f64 {
    normalize_degrees(end - start)
}

/// Angle halfway along the forward span from `start` to `end`
pub fn mid_angle(start: f64, end: f64) -> f64 {
    normalize_degrees(start + forward_span(start, end) / 2.0)
}

/// Whether an arc from `start` to `end` covers more than half a turn
pub fn is_large_arc(start: f64, end: f64) -> bool {
    forward_span(start, end) > 180.0
}

/// Place a zodiacal angle at `radius` from `center`
pub fn to_point(center: Point, radius: f64, zodiac_degrees: f64) -> Point {
    let screen_angle = (zodiac_degrees + SCREEN_OFFSET_DEG).to_radians();
    Point {
        x: center.x + radius * screen_angle.cos(),
        y: center.y + radius * screen_angle.sin(),
    }
}

/// Inverse of [`to_point`]: zodiacal angle of `point` as seen from `center`
pub fn to_zodiac_degrees(center: Point, point: Point) -> f64 {
    let screen = (point.y - center.y).atan2(point.x - center.x).to_degrees();
    normalize_degrees(screen - SCREEN_OFFSET_DEG)
}

/// Format a coordinate for path data and attributes.
///
/// Two decimals, and never `-0.00`, so identical geometry always produces
/// identical text. NaN and infinities are written as `0.00`, since SVG has
/// no spelling for them.
pub fn format_coord(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let scaled = (value * 100.0).round() / 100.0;
    let rounded = if scaled.is_finite() { scaled } else { value };
    format!("{:.2}", rounded + 0.0)
}

/// Annular wedge between two radii spanning a zodiacal range.
///
/// Outer arc runs forward from start to end, inner arc runs back from end
/// to start. Both arcs share the same large-arc flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSegment {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
    pub large_arc: bool,
}

/// Build the wedge for [`ring_segment_path`].
///
/// Degenerate input never fails: negative radii are clamped to zero, an
/// inverted radius pair still yields a closed path, and `start == end`
/// collapses to a zero-area outline.
pub fn ring_segment(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> RingSegment {
    let outer_radius = outer_radius.max(0.0);
    let inner_radius = inner_radius.max(0.0);
    RingSegment {
        outer_radius,
        inner_radius,
        outer_start: to_point(center, outer_radius, start_deg),
        outer_end: to_point(center, outer_radius, end_deg),
        inner_end: to_point(center, inner_radius, end_deg),
        inner_start: to_point(center, inner_radius, start_deg),
        large_arc: is_large_arc(start_deg, end_deg),
    }
}

/// Closed SVG path data for an annular wedge
pub fn ring_segment_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    ring_segment(center, outer_radius, inner_radius, start_deg, end_deg).to_string()
}

impl fmt::Display for RingSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let large = u8::from(self.large_arc);
        let ro = format_coord(self.outer_radius);
        let ri = format_coord(self.inner_radius);
        write!(
            f,
            "M {} {} A {ro} {ro} 0 {large} 1 {} {} L {} {} A {ri} {ri} 0 {large} 0 {} {} Z",
            format_coord(self.outer_start.x),
            format_coord(self.outer_start.y),
            format_coord(self.outer_end.x),
            format_coord(self.outer_end.y),
            format_coord(self.inner_end.x),
            format_coord(self.inner_end.y),
            format_coord(self.inner_start.x),
            format_coord(self.inner_start.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn forward_span_wraps_past_aries() {
        assert_eq!(forward_span(350.0, 20.0), 30.0);
        assert_eq!(forward_span(20.0, 350.0), 330.0);
        assert_eq!(forward_span(42.0, 42.0), 0.0);
    }

    #[test]
    fn mid_angle_follows_forward_direction() {
        assert_eq!(mid_angle(350.0, 10.0), 0.0);
        assert_eq!(mid_angle(0.0, 90.0), 45.0);
        assert_eq!(mid_angle(90.0, 0.0), 225.0);
    }

    #[test]
    fn format_coord_has_no_negative_zero() {
        assert_eq!(format_coord(-0.001), "0.00");
        assert_eq!(format_coord(12.345_6), "12.35");
        assert_eq!(format_coord(-3.0), "-3.00");
    }

    #[test]
    fn format_coord_stays_numeric_at_the_limits() {
        assert_eq!(format_coord(f64::NAN), "0.00");
        assert_eq!(format_coord(f64::INFINITY), "0.00");
        assert_eq!(format_coord(f64::NEG_INFINITY), "0.00");
        let huge = format_coord(1e307);
        assert!(huge.ends_with(".00"));
        assert!(huge.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    #[test]
    fn zodiac_degrees_round_trip() {
        let center = Point::new(300.0, 300.0);
        for deg in [0.0, 15.5, 90.0, 179.9, 270.0, 359.0] {
            let back = to_zodiac_degrees(center, to_point(center, 100.0, deg));
            assert!((back - deg).abs() < 1e-9, "{deg} -> {back}");
        }
    }
}
