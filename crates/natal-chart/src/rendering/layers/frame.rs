use super::RingContext;
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};

/// Concentric base circles: the filled outer disk, the zodiac belt outlines
/// and the white house panel
pub fn render_background(ctx: &RingContext) -> Vec<Shape> {
    let radii = &ctx.settings.radii;
    let visual = ctx.visual;
    let circle = |radius: f64, fill, stroke| Shape::Circle {
        center: ctx.center,
        radius,
        fill,
        stroke: Some(stroke),
    };
    let panel_stroke = Stroke::solid(visual.panel_stroke, 1.0);
    vec![
        circle(
            radii.outer,
            Some(visual.background_fill),
            Stroke::solid(visual.background_stroke, visual.background_stroke_width),
        ),
        circle(radii.zodiac_outer, None, Stroke::solid(visual.ring_stroke, 1.0)),
        circle(radii.zodiac_inner, None, Stroke::solid(visual.ring_stroke, 1.0)),
        circle(radii.house_outer, Some(visual.panel_fill), panel_stroke.clone()),
        circle(radii.house_inner, Some(visual.panel_fill), panel_stroke),
    ]
}

/// Disk in the middle of the wheel, drawn over the aspect lines
pub fn render_center_disk(ctx: &RingContext) -> Vec<Shape> {
    vec![Shape::Circle {
        center: ctx.center,
        radius: ctx.settings.radii.center,
        fill: Some(ctx.visual.panel_fill),
        stroke: Some(Stroke::solid(ctx.visual.panel_stroke, 1.0)),
    }]
}

/// Title line centred at the top of the canvas
pub fn render_title(ctx: &RingContext, title: &str) -> Vec<Shape> {
    let visual = ctx.visual;
    vec![Shape::Text {
        position: Point::new(ctx.center.x, ctx.settings.title_y),
        content: title.to_string(),
        font: visual.sans(visual.title_size),
        color: visual.title_color,
        anchor: TextAnchor::Middle,
    }]
}
