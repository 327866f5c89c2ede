use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal_chart::chart::{AspectEntry, ChartRequest, HouseCusp, PlanetPosition};
use natal_chart::rendering::{render_svg, ChartRenderer};

const PLANETS: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

fn sample_request() -> ChartRequest {
    let planet_positions = PLANETS
        .iter()
        .enumerate()
        .map(|(i, name)| PlanetPosition::new(*name, (i as f64) * 37.3 % 360.0))
        .collect();
    let house_cusps = (0..12u32)
        .map(|i| HouseCusp::new(i + 1, (f64::from(i) * 28.0 + 5.0) % 360.0))
        .collect();
    let aspects = PLANETS
        .windows(2)
        .map(|pair| AspectEntry::between(pair[0], pair[1]))
        .collect();
    ChartRequest {
        planet_positions: Some(planet_positions),
        house_cusps: Some(house_cusps),
        aspects: Some(aspects),
        title: Some("Benchmark".to_string()),
        ..ChartRequest::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let renderer = ChartRenderer::new();
    let request = sample_request();

    c.bench_function("generate_chart_spec", |b| {
        b.iter(|| renderer.generate(black_box(&request)))
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let renderer = ChartRenderer::new();
    let spec = renderer.generate(&sample_request()).unwrap();

    c.bench_function("render_svg", |b| b.iter(|| render_svg(black_box(&spec))));
}

fn bench_render_json(c: &mut Criterion) {
    let renderer = ChartRenderer::new();
    let body = serde_json::to_string(&sample_request()).unwrap();

    c.bench_function("render_json_end_to_end", |b| {
        b.iter(|| renderer.render_json(black_box(&body)))
    });
}

criterion_group!(benches, bench_generate, bench_render_svg, bench_render_json);
criterion_main!(benches);
