use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in 2D screen space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Copy of this point shifted vertically, used for text baselines
    pub fn offset_y(&self, dy: f64) -> Point {
        Point {
            x: self.x,
            y: self.y + dy,
        }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create color from hex string (e.g., "#F00", "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                // #RGB shorthand: each digit is doubled
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Color::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Color {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: channel(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Parse a CSS color: a hex literal or one of the basic named colors
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        let named = match value.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "gray" | "grey" => Color::GRAY,
            "silver" => Color::rgb(192, 192, 192),
            "maroon" => Color::rgb(128, 0, 0),
            "purple" => Color::rgb(128, 0, 128),
            "fuchsia" | "magenta" => Color::rgb(255, 0, 255),
            "green" => Color::rgb(0, 128, 0),
            "lime" => Color::rgb(0, 255, 0),
            "olive" => Color::rgb(128, 128, 0),
            "yellow" => Color::rgb(255, 255, 0),
            "navy" => Color::rgb(0, 0, 128),
            "blue" => Color::rgb(0, 0, 255),
            "teal" => Color::rgb(0, 128, 128),
            "aqua" | "cyan" => Color::rgb(0, 255, 255),
            "orange" => Color::rgb(255, 165, 0),
            "gold" => Color::rgb(255, 215, 0),
            "pink" => Color::rgb(255, 192, 203),
            "crimson" => Color::rgb(220, 20, 60),
            _ => return None,
        };
        Some(named)
    }

    /// `#rrggbb` form; alpha is written separately as an opacity attribute
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opacity in [0, 1], or None when fully opaque
    pub fn opacity(&self) -> Option<f64> {
        (self.a != 255).then(|| f64::from(self.a) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_css(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash_array: None,
            opacity: None,
        }
    }

    pub fn dashed(color: Color, width: f64, dash_array: &[f64]) -> Self {
        Self {
            dash_array: Some(dash_array.to_vec()),
            ..Self::solid(color, width)
        }
    }
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font attributes shared by every text-like shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

/// Shape primitives for chart rendering.
///
/// Angles on segment shapes are zodiacal degrees; the conversion to screen
/// space happens when the shape is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        content: String,
        font: Font,
        color: Color,
        anchor: TextAnchor,
    },
    SignSegment {
        center: Point,
        sign_index: u8, // 0-11
        start_angle: f64,
        end_angle: f64,
        radius_inner: f64,
        radius_outer: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
    HouseSegment {
        center: Point,
        house_num: u32,
        start_angle: f64,
        end_angle: f64,
        radius_inner: f64,
        radius_outer: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
    PlanetGlyph {
        center: Point,
        planet_id: String,
        symbol: String,
        /// Hover text, written as a `<title>` child
        #[serde(default, skip_serializing_if = "String::is_empty")]
        label: String,
        font: Font,
        color: Color,
    },
    AspectLine {
        from: Point,
        to: Point,
        planets: (String, String),
        aspect_type: Option<String>,
        stroke: Stroke,
    },
}
