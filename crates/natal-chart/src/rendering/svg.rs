//! SVG serialization of a [`ChartSpec`].

use crate::geometry::{format_coord, ring_segment_path};
use crate::rendering::primitives::{Color, Font, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, LayerKind};
use crate::rendering::visual_config::VisualConfig;
use lazy_static::lazy_static;
use regex::Regex;

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_NS: &str = "http://www.w3.org/2000/svg";

lazy_static! {
    /// Control characters that are not allowed anywhere in XML 1.0
    static ref INVALID_XML_CHARS: Regex =
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("valid control character pattern");
}

/// Escape text for use in element content and attribute values
pub fn escape_xml(input: &str) -> String {
    INVALID_XML_CHARS
        .replace_all(input, "")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn open_document(svg: &mut String, width: f64, height: f64) {
    let w = format_coord(width);
    let h = format_coord(height);
    svg.push_str(XML_PROLOG);
    svg.push_str(&format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    ));
}

/// Serialize a chart spec into a standalone SVG document.
///
/// Each layer becomes one `<g>` group, in layer order, so later layers paint
/// over earlier ones.
pub fn render_svg(spec: &ChartSpec) -> String {
    let mut svg = String::new();
    open_document(&mut svg, spec.width, spec.height);
    svg.push_str("<style>text{user-select:none;}</style>");

    for layer in &spec.layers {
        svg.push_str(&format!("<g id=\"{}\">", layer.kind.id()));
        for shape in &layer.shapes {
            write_shape(&mut svg, shape);
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

/// Canvas-sized document holding nothing but the error message
pub fn render_error_svg(width: f64, height: f64, message: &str, visual: &VisualConfig) -> String {
    let mut svg = String::new();
    open_document(&mut svg, width, height);
    svg.push_str(&format!("<g id=\"{}\">", LayerKind::Error.id()));
    write_text(
        &mut svg,
        None,
        Point::new(width / 2.0, height / 2.0),
        message,
        &visual.sans(visual.error_size),
        visual.error_color,
        TextAnchor::Middle,
        "",
    );
    svg.push_str("</g></svg>");
    svg
}

fn write_shape(svg: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{}/>",
                format_coord(center.x),
                format_coord(center.y),
                format_coord(*radius),
                fill_attrs(fill.as_ref()),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        Shape::Line { from, to, stroke } => {
            svg.push_str(&format!(
                "<line {}{}/>",
                line_coords(from, to),
                stroke_attrs(Some(stroke))
            ));
        }
        Shape::Text {
            position,
            content,
            font,
            color,
            anchor,
        } => write_text(svg, None, *position, content, font, *color, *anchor, ""),
        Shape::SignSegment {
            center,
            sign_index,
            start_angle,
            end_angle,
            radius_inner,
            radius_outer,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "<path class=\"sign-segment\" data-sign=\"{}\" d=\"{}\"{}{}/>",
                sign_index,
                ring_segment_path(*center, *radius_outer, *radius_inner, *start_angle, *end_angle),
                fill_attrs(Some(fill)),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        Shape::HouseSegment {
            center,
            house_num,
            start_angle,
            end_angle,
            radius_inner,
            radius_outer,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "<path class=\"house-segment\" data-house=\"{}\" d=\"{}\"{}{}/>",
                house_num,
                ring_segment_path(*center, *radius_outer, *radius_inner, *start_angle, *end_angle),
                fill_attrs(Some(fill)),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        Shape::PlanetGlyph {
            center,
            planet_id,
            symbol,
            label,
            font,
            color,
        } => {
            let class = format!(
                "class=\"planet-glyph\" data-planet=\"{}\" dominant-baseline=\"central\"",
                escape_xml(planet_id)
            );
            write_text(
                svg,
                Some(&class),
                *center,
                symbol,
                font,
                *color,
                TextAnchor::Middle,
                label,
            );
        }
        Shape::AspectLine {
            from,
            to,
            planets,
            aspect_type,
            stroke,
        } => {
            let kind = aspect_type
                .as_deref()
                .map(|kind| format!(" data-aspect-type=\"{}\"", escape_xml(kind)))
                .unwrap_or_default();
            svg.push_str(&format!(
                "<line class=\"aspect-line\" data-aspect=\"{}-{}\"{} {}{}/>",
                escape_xml(&planets.0),
                escape_xml(&planets.1),
                kind,
                line_coords(from, to),
                stroke_attrs(Some(stroke)),
            ));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn write_text(
    svg: &mut String,
    extra_attrs: Option<&str>,
    position: Point,
    content: &str,
    font: &Font,
    color: Color,
    anchor: TextAnchor,
    title: &str,
) {
    svg.push_str("<text ");
    if let Some(attrs) = extra_attrs {
        svg.push_str(attrs);
        svg.push(' ');
    }
    svg.push_str(&format!(
        "x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\"",
        format_coord(position.x),
        format_coord(position.y),
        anchor.as_svg_str(),
        format_coord(font.size),
    ));
    if let Some(family) = &font.family {
        svg.push_str(&format!(" font-family=\"{}\"", escape_xml(family)));
    }
    if let Some(spacing) = font.letter_spacing {
        svg.push_str(&format!(" letter-spacing=\"{}\"", format_coord(spacing)));
    }
    svg.push_str(&fill_attrs(Some(&color)));
    svg.push('>');
    if !title.is_empty() {
        svg.push_str(&format!("<title>{}</title>", escape_xml(title)));
    }
    svg.push_str(&escape_xml(content));
    svg.push_str("</text>");
}

fn line_coords(from: &Point, to: &Point) -> String {
    format!(
        "x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
        format_coord(from.x),
        format_coord(from.y),
        format_coord(to.x),
        format_coord(to.y),
    )
}

fn fill_attrs(fill: Option<&Color>) -> String {
    match fill {
        None => " fill=\"none\"".to_string(),
        Some(color) => {
            let mut attrs = format!(" fill=\"{}\"", color.to_hex());
            if let Some(opacity) = color.opacity() {
                attrs.push_str(&format!(" fill-opacity=\"{}\"", format_coord(opacity)));
            }
            attrs
        }
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(stroke) = stroke else {
        return String::new();
    };
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color.to_hex(),
        format_coord(stroke.width)
    );
    if let Some(dashes) = stroke.dash_array.as_ref().filter(|d| !d.is_empty()) {
        let pattern: Vec<String> = dashes.iter().map(|d| trim_number(*d)).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", pattern.join(",")));
    }
    let opacity = match (stroke.opacity, stroke.color.opacity()) {
        (Some(a), Some(b)) => Some(a * b),
        (a, b) => a.or(b),
    };
    if let Some(opacity) = opacity {
        attrs.push_str(&format!(" stroke-opacity=\"{}\"", format_coord(opacity)));
    }
    attrs
}

/// Dash lengths read better without trailing zeros: `2,4` rather than `2.00,4.00`
fn trim_number(value: f64) -> String {
    let text = format_coord(value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
