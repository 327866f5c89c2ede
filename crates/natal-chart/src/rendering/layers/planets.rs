use super::RingContext;
use crate::geometry::to_point;
use crate::layout::rings::{AspectRingItem, PlanetRingItem};
use crate::rendering::primitives::Shape;

/// One glyph per planet on the planet radius
pub fn render_planets(ctx: &RingContext, planets: &[PlanetRingItem]) -> Vec<Shape> {
    let radius = ctx.settings.radii.planet_radius();
    let visual = ctx.visual;
    planets
        .iter()
        .map(|planet| Shape::PlanetGlyph {
            center: to_point(ctx.center, radius, planet.lon),
            planet_id: planet.name.clone(),
            symbol: planet.symbol.clone(),
            label: planet.label(),
            font: visual.serif(visual.planet_glyph_size),
            color: visual.planet_color,
        })
        .collect()
}

/// Straight aspect lines between the glyph anchor points
pub fn render_aspects(ctx: &RingContext, aspects: &[AspectRingItem]) -> Vec<Shape> {
    let radius = ctx.settings.radii.planet_radius();
    aspects
        .iter()
        .map(|aspect| Shape::AspectLine {
            from: to_point(ctx.center, radius, aspect.from_lon),
            to: to_point(ctx.center, radius, aspect.to_lon),
            planets: (aspect.from.clone(), aspect.to.clone()),
            aspect_type: aspect.aspect_type.clone(),
            stroke: aspect.stroke.clone(),
        })
        .collect()
}
