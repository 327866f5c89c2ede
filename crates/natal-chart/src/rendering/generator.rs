use crate::chart::loader::{load_chart_request_from_json, load_chart_request_from_value, ChartVariant};
use crate::chart::request::ChartRequest;
use crate::chart::settings::{ChartSettings, IncompleteHousesPolicy};
use crate::error::ChartRequestError;
use crate::geometry::to_point;
use crate::layout::rings::{
    build_aspect_items, build_house_items, build_planet_items, build_static_zodiac_items,
};
use crate::rendering::layers::{degrees, frame, houses, planets, zodiac, RingContext};
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, LayerKind};
use crate::rendering::svg::{render_error_svg, render_svg};
use crate::rendering::visual_config::{GlyphConfig, VisualConfig};
use serde_json::Value;

const MINIMAL_TITLE: &str = "Natal Chart";

/// Chart composer - turns a request into a layered ChartSpec and the SVG
/// document.
///
/// Holds only read-only configuration; one instance can serve any number of
/// concurrent renders.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    settings: ChartSettings,
    visual_config: VisualConfig,
    glyph_config: GlyphConfig,
}

impl ChartRenderer {
    /// Create a renderer with default configs
    pub fn new() -> Self {
        Self {
            settings: ChartSettings::default(),
            visual_config: VisualConfig::default(),
            glyph_config: GlyphConfig::default(),
        }
    }

    /// Create a renderer with custom configs
    pub fn with_configs(
        settings: ChartSettings,
        visual_config: VisualConfig,
        glyph_config: GlyphConfig,
    ) -> Self {
        Self {
            settings,
            visual_config,
            glyph_config,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Build the full layered chart.
    ///
    /// Fails only when planet or house data is absent, or when house data is
    /// malformed and the policy is [`IncompleteHousesPolicy::Reject`].
    pub fn generate(&self, request: &ChartRequest) -> Result<ChartSpec, ChartRequestError> {
        let planet_positions = request
            .planet_positions
            .as_deref()
            .ok_or_else(|| ChartRequestError::MissingField("planet_positions".to_string()))?;
        let house_cusps = request
            .house_cusps
            .as_deref()
            .ok_or_else(|| ChartRequestError::MissingField("house_cusps".to_string()))?;

        let house_items = match build_house_items(house_cusps) {
            Ok(items) => Some(items),
            Err(err) if self.settings.incomplete_houses == IncompleteHousesPolicy::Skip => {
                log::warn!("skipping house ring: {err}");
                None
            }
            Err(err) => return Err(err),
        };

        let planet_items = build_planet_items(planet_positions, &self.glyph_config);
        let aspect_entries = request.aspects.as_deref().unwrap_or_default();
        let aspect_items = build_aspect_items(
            &planet_items,
            aspect_entries,
            &self.visual_config.default_aspect_stroke(),
        );

        let mut spec = ChartSpec::new(self.settings.width, self.settings.height);
        let ctx = RingContext::new(spec.center, &self.settings, &self.visual_config);

        spec.push_layer(LayerKind::Background, frame::render_background(&ctx));
        spec.push_layer(
            LayerKind::ZodiacBelt,
            zodiac::render_zodiac_belt(&ctx, &build_static_zodiac_items()),
        );
        spec.push_layer(LayerKind::DegreeTicks, degrees::render_degree_ticks(&ctx));
        if let Some(items) = &house_items {
            spec.push_layer(LayerKind::Houses, houses::render_houses(&ctx, items));
            spec.push_layer(LayerKind::CuspLines, houses::render_cusp_lines(&ctx, items));
            spec.push_layer(
                LayerKind::HouseSubdivisions,
                houses::render_house_subdivisions(&ctx, items),
            );
        }
        spec.push_layer(LayerKind::Aspects, planets::render_aspects(&ctx, &aspect_items));
        spec.push_layer(LayerKind::CenterDisk, frame::render_center_disk(&ctx));
        spec.push_layer(LayerKind::Planets, planets::render_planets(&ctx, &planet_items));
        if let Some(title) = self.title_for(request) {
            spec.push_layer(LayerKind::Title, frame::render_title(&ctx, &title));
        }

        spec.metadata.variant = ChartVariant::Full;
        spec.metadata.planets_placed = planet_items.len();
        spec.metadata.planets_dropped = planet_positions.len() - planet_items.len();
        spec.metadata.houses_rendered = house_items.is_some();
        spec.metadata.aspects_drawn = aspect_items.len();
        spec.metadata.aspects_dropped = aspect_entries.len() - aspect_items.len();

        log::debug!(
            "composed chart: {} layers, {} planets, {} aspects, houses: {}",
            spec.layers.len(),
            spec.metadata.planets_placed,
            spec.metadata.aspects_drawn,
            spec.metadata.houses_rendered
        );

        Ok(spec)
    }

    /// Explicit title first, then the person line; nothing when titles are off
    fn title_for(&self, request: &ChartRequest) -> Option<String> {
        if !self.settings.show_title {
            return None;
        }
        request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .or_else(|| request.person.as_ref().and_then(|p| p.display_line()))
    }

    /// Build the minimal variant: one disk, a fixed title and planet name
    /// labels on the rim.
    ///
    /// Labels sit at their longitude; an entry with no usable longitude is
    /// spread evenly by its position in the list instead.
    pub fn generate_minimal(&self, request: &ChartRequest) -> ChartSpec {
        let minimal = &self.settings.minimal;
        let visual = &self.visual_config;
        let mut spec = ChartSpec::new(minimal.width, minimal.height);
        let center = spec.center;

        spec.push_layer(
            LayerKind::Background,
            vec![Shape::Circle {
                center,
                radius: minimal.radius,
                fill: Some(visual.minimal_fill),
                stroke: Some(Stroke::solid(visual.minimal_accent, visual.minimal_stroke_width)),
            }],
        );
        spec.push_layer(
            LayerKind::Title,
            vec![Shape::Text {
                position: Point::new(center.x, self.settings.title_y),
                content: MINIMAL_TITLE.to_string(),
                font: visual.sans(visual.minimal_title_size),
                color: visual.minimal_accent,
                anchor: TextAnchor::Middle,
            }],
        );

        let all = request.planet_positions.as_deref().unwrap_or_default();
        let shown = &all[..all.len().min(minimal.max_planets)];
        let labels: Vec<Shape> = shown
            .iter()
            .enumerate()
            .map(|(i, planet)| {
                let lon = planet
                    .resolved_longitude()
                    .unwrap_or(i as f64 * 360.0 / shown.len() as f64);
                Shape::Text {
                    position: to_point(center, minimal.radius, lon),
                    content: planet.name.clone(),
                    font: visual.sans(visual.minimal_label_size),
                    color: visual.minimal_accent,
                    anchor: TextAnchor::Middle,
                }
            })
            .collect();
        spec.push_layer(LayerKind::Planets, labels);

        spec.metadata.variant = ChartVariant::Minimal;
        spec.metadata.planets_placed = shown.len();
        spec.metadata.planets_dropped = all.len() - shown.len();
        spec
    }

    pub fn generate_variant(
        &self,
        request: &ChartRequest,
        variant: ChartVariant,
    ) -> Result<ChartSpec, ChartRequestError> {
        match variant {
            ChartVariant::Full => self.generate(request),
            ChartVariant::Minimal => Ok(self.generate_minimal(request)),
        }
    }

    /// Parse, validate and lay out a JSON request without serializing it
    pub fn spec_from_json(
        &self,
        json: &str,
        variant: ChartVariant,
    ) -> Result<ChartSpec, ChartRequestError> {
        let request = load_chart_request_from_json(json, variant)?;
        self.generate_variant(&request, variant)
    }

    /// Render the full chart. Never fails: problems yield the error document.
    pub fn render(&self, request: &ChartRequest) -> String {
        self.finish(self.generate(request), ChartVariant::Full)
    }

    /// Render a raw JSON body as the full chart
    pub fn render_json(&self, json: &str) -> String {
        self.render_json_variant(json, ChartVariant::Full)
    }

    pub fn render_json_variant(&self, json: &str, variant: ChartVariant) -> String {
        self.finish(self.spec_from_json(json, variant), variant)
    }

    /// Render an already parsed JSON value as the full chart
    pub fn render_value(&self, value: Value) -> String {
        let spec = load_chart_request_from_value(value, ChartVariant::Full)
            .and_then(|request| self.generate(&request));
        self.finish(spec, ChartVariant::Full)
    }

    /// Canvas-sized document carrying only `message`
    pub fn error_document(&self, variant: ChartVariant, message: &str) -> String {
        let (width, height) = match variant {
            ChartVariant::Full => (self.settings.width, self.settings.height),
            ChartVariant::Minimal => (self.settings.minimal.width, self.settings.minimal.height),
        };
        render_error_svg(width, height, message, &self.visual_config)
    }

    fn finish(&self, spec: Result<ChartSpec, ChartRequestError>, variant: ChartVariant) -> String {
        match spec {
            Ok(spec) => render_svg(&spec),
            Err(err) => {
                log::warn!("rendering error document: {err}");
                self.error_document(variant, &err.to_string())
            }
        }
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::request::{AspectEntry, HouseCusp, PersonInfo, PlanetPosition};

    fn equal_houses() -> Vec<HouseCusp> {
        (0..12u32).map(|i| HouseCusp::new(i + 1, f64::from(i) * 30.0)).collect()
    }

    fn request() -> ChartRequest {
        ChartRequest {
            planet_positions: Some(vec![
                PlanetPosition::new("Sun", 32.33),
                PlanetPosition::new("Moon", 200.0),
            ]),
            house_cusps: Some(equal_houses()),
            aspects: Some(vec![
                AspectEntry::between("Sun", "Moon"),
                AspectEntry::between("Sun", "Vulcan"),
            ]),
            ..ChartRequest::default()
        }
    }

    fn layer_order(spec: &ChartSpec) -> Vec<LayerKind> {
        spec.layers.iter().map(|layer| layer.kind).collect()
    }

    #[test]
    fn layers_follow_draw_order() {
        let mut req = request();
        req.title = Some("Ada".to_string());
        let spec = ChartRenderer::new().generate(&req).unwrap();
        assert_eq!(
            layer_order(&spec),
            vec![
                LayerKind::Background,
                LayerKind::ZodiacBelt,
                LayerKind::DegreeTicks,
                LayerKind::Houses,
                LayerKind::CuspLines,
                LayerKind::HouseSubdivisions,
                LayerKind::Aspects,
                LayerKind::CenterDisk,
                LayerKind::Planets,
                LayerKind::Title,
            ]
        );
        assert_eq!(spec.metadata.aspects_drawn, 1);
        assert_eq!(spec.metadata.aspects_dropped, 1);
        assert!(spec.metadata.houses_rendered);
    }

    #[test]
    fn missing_houses_is_an_error_but_short_houses_are_skipped() {
        let mut req = request();
        req.house_cusps = None;
        assert_eq!(
            ChartRenderer::new().generate(&req).unwrap_err(),
            ChartRequestError::MissingField("house_cusps".to_string())
        );

        req.house_cusps = Some(equal_houses()[..11].to_vec());
        let spec = ChartRenderer::new().generate(&req).unwrap();
        assert!(spec.layer(LayerKind::Houses).is_none());
        assert!(spec.layer(LayerKind::CuspLines).is_none());
        assert!(!spec.metadata.houses_rendered);
    }

    #[test]
    fn reject_policy_turns_short_houses_into_an_error() {
        let settings = ChartSettings {
            incomplete_houses: IncompleteHousesPolicy::Reject,
            ..ChartSettings::default()
        };
        let renderer =
            ChartRenderer::with_configs(settings, VisualConfig::default(), GlyphConfig::default());
        let mut req = request();
        req.house_cusps = Some(Vec::new());
        assert_eq!(
            renderer.generate(&req).unwrap_err(),
            ChartRequestError::IncompleteHouses { found: 0 }
        );
    }

    #[test]
    fn title_falls_back_to_person_line() {
        let mut req = request();
        req.person = Some(PersonInfo {
            name: Some("Ada".to_string()),
            birth_place: Some("London".to_string()),
            ..PersonInfo::default()
        });
        let spec = ChartRenderer::new().generate(&req).unwrap();
        let title = spec.layer(LayerKind::Title).unwrap();
        assert!(matches!(
            &title.shapes[0],
            Shape::Text { content, .. } if content == "Ada London"
        ));

        let settings = ChartSettings {
            show_title: false,
            ..ChartSettings::default()
        };
        let renderer =
            ChartRenderer::with_configs(settings, VisualConfig::default(), GlyphConfig::default());
        assert!(renderer.generate(&req).unwrap().layer(LayerKind::Title).is_none());
    }

    #[test]
    fn minimal_caps_labels() {
        let planets = (0..14u32).map(|i| PlanetPosition::new(format!("P{i}"), 10.0 * f64::from(i)));
        let req = ChartRequest {
            planet_positions: Some(planets.collect()),
            ..ChartRequest::default()
        };
        let spec = ChartRenderer::new().generate_minimal(&req);
        assert_eq!(spec.width, 400.0);
        assert_eq!(spec.layer(LayerKind::Planets).unwrap().shapes.len(), 10);
        assert_eq!(spec.metadata.planets_dropped, 4);
    }
}
