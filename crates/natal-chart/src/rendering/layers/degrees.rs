use super::RingContext;
use crate::geometry::to_point;
use crate::rendering::primitives::{Shape, Stroke};

/// One radial tick per whole degree; every `major_tick_step` degrees the
/// tick is full length and heavier.
pub fn render_degree_ticks(ctx: &RingContext) -> Vec<Shape> {
    let settings = ctx.settings;
    let visual = ctx.visual;
    let radii = &settings.radii;
    let step = settings.major_tick_step.max(1);

    let major = Stroke::dashed(visual.tick_color, visual.major_tick_width, &visual.major_tick_dash);
    let minor = Stroke::dashed(visual.tick_color, visual.minor_tick_width, &visual.minor_tick_dash);

    (0..360u32)
        .map(|degree| {
            let is_major = degree % step == 0;
            let outer = if is_major {
                radii.zodiac_outer
            } else {
                radii.zodiac_outer - settings.minor_tick_inset
            };
            let angle = f64::from(degree);
            Shape::Line {
                from: to_point(ctx.center, outer, angle),
                to: to_point(ctx.center, radii.zodiac_inner, angle),
                stroke: if is_major { major.clone() } else { minor.clone() },
            }
        })
        .collect()
}
