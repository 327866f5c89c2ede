use super::RingContext;
use crate::geometry::to_point;
use crate::layout::rings::SignRingItem;
use crate::rendering::primitives::{Shape, TextAnchor};

/// Baseline shift of the sign name above its anchor point
const NAME_OFFSET_Y: f64 = -10.0;
/// Baseline shift of the sign glyph below its anchor point
const GLYPH_OFFSET_Y: f64 = 18.0;

/// Zodiac belt: one wedge per sign with its name and glyph
pub fn render_zodiac_belt(ctx: &RingContext, items: &[SignRingItem]) -> Vec<Shape> {
    let radii = &ctx.settings.radii;
    let visual = ctx.visual;
    let name_radius = (radii.zodiac_outer + radii.zodiac_inner) / 2.0;
    let glyph_radius = radii.zodiac_outer - ctx.settings.sign_glyph_inset;

    let mut shapes = Vec::with_capacity(items.len() * 3);
    for item in items {
        let mid = item.mid_lon();
        shapes.push(Shape::SignSegment {
            center: ctx.center,
            sign_index: item.sign.index(),
            start_angle: item.start_lon,
            end_angle: item.end_lon,
            radius_inner: radii.zodiac_inner,
            radius_outer: radii.zodiac_outer,
            fill: visual.zodiac_fill,
            stroke: None,
        });

        let mut name_font = visual.sans(visual.sign_name_size);
        name_font.letter_spacing = Some(visual.sign_name_spacing);
        shapes.push(Shape::Text {
            position: to_point(ctx.center, name_radius, mid).offset_y(NAME_OFFSET_Y),
            content: item.sign.name().to_uppercase(),
            font: name_font,
            color: visual.zodiac_text,
            anchor: TextAnchor::Middle,
        });

        shapes.push(Shape::Text {
            position: to_point(ctx.center, glyph_radius, mid).offset_y(GLYPH_OFFSET_Y),
            content: item.sign.symbol().to_string(),
            font: visual.serif(visual.sign_glyph_size),
            color: visual.zodiac_text,
            anchor: TextAnchor::Middle,
        });
    }
    shapes
}
