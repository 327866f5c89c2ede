use super::RingContext;
use crate::geometry::to_point;
use crate::layout::rings::HouseRingItem;
use crate::rendering::primitives::{Shape, Stroke, TextAnchor};

/// Baseline shift so the house number sits centred on its anchor
const NUMBER_OFFSET_Y: f64 = 6.0;

/// House wedges between the house radii, each with its number at the
/// middle of the span
pub fn render_houses(ctx: &RingContext, houses: &[HouseRingItem]) -> Vec<Shape> {
    let radii = &ctx.settings.radii;
    let visual = ctx.visual;
    let number_radius = (radii.house_outer + radii.house_inner) / 2.0;

    let mut shapes = Vec::with_capacity(houses.len() * 2);
    for house in houses {
        shapes.push(Shape::HouseSegment {
            center: ctx.center,
            house_num: house.house_number,
            start_angle: house.cusp_lon,
            end_angle: house.next_cusp_lon,
            radius_inner: radii.house_inner,
            radius_outer: radii.house_outer,
            fill: visual.house_fill,
            stroke: None,
        });
        shapes.push(Shape::Text {
            position: to_point(ctx.center, number_radius, house.mid_lon()).offset_y(NUMBER_OFFSET_Y),
            content: house.house_number.to_string(),
            font: visual.sans(visual.house_number_size),
            color: visual.house_number_color,
            anchor: TextAnchor::Middle,
        });
    }
    shapes
}

/// A boundary line at every cusp, from the zodiac belt down to the inner
/// edge of the house ring
pub fn render_cusp_lines(ctx: &RingContext, houses: &[HouseRingItem]) -> Vec<Shape> {
    let radii = &ctx.settings.radii;
    let stroke = Stroke::solid(ctx.visual.cusp_color, ctx.visual.cusp_width);
    houses
        .iter()
        .map(|house| Shape::Line {
            from: to_point(ctx.center, radii.zodiac_inner, house.cusp_lon),
            to: to_point(ctx.center, radii.house_inner, house.cusp_lon),
            stroke: stroke.clone(),
        })
        .collect()
}

/// Dashed ticks every `subdivision_step` degrees inside each house
pub fn render_house_subdivisions(ctx: &RingContext, houses: &[HouseRingItem]) -> Vec<Shape> {
    let radii = &ctx.settings.radii;
    let visual = ctx.visual;
    let stroke = Stroke::dashed(
        visual.subdivision_color,
        visual.subdivision_width,
        &visual.subdivision_dash,
    );
    houses
        .iter()
        .flat_map(|house| house.subdivision_angles(ctx.settings.subdivision_step))
        .map(|angle| Shape::Line {
            from: to_point(ctx.center, radii.house_outer, angle),
            to: to_point(ctx.center, radii.house_inner, angle),
            stroke: stroke.clone(),
        })
        .collect()
}
