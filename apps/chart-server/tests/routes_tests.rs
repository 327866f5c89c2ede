use axum::http::StatusCode;
use axum_test::TestServer;
use chart_server::{create_router, AppState};
use natal_chart::rendering::ChartRenderer;
use serde_json::{json, Value};
use std::sync::Arc;

fn server() -> TestServer {
    TestServer::new(create_router(Arc::new(AppState::default()))).unwrap()
}

fn chart_body() -> Value {
    let houses: Vec<Value> = (0..12)
        .map(|i| json!({ "house": i + 1, "longitude": i * 15 }))
        .collect();
    json!({
        "planet_positions": [{ "name": "Sun", "longitude": 32.33 }],
        "house_cusps": houses,
        "aspects": []
    })
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_render_full_chart() {
    let response = server().post("/render-natal-chart-svg").json(&chart_body()).await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    let svg = response.text();
    assert!(svg.contains("viewBox=\"0 0 600.00 600.00\""));
    assert_eq!(svg.matches("class=\"house-segment\"").count(), 12);
    assert_eq!(svg.matches("class=\"planet-glyph\"").count(), 1);
}

#[tokio::test]
async fn test_bad_bodies_still_get_a_document() {
    let server = server();

    let response = server.post("/render-natal-chart-svg").text("{oops").await;
    response.assert_status_ok();
    assert!(response.text().contains("Invalid JSON"));

    let response = server
        .post("/render-natal-chart-svg")
        .bytes(vec![0xff, 0xfe, 0x00].into())
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("not valid UTF-8"));

    let response = server
        .post("/render-natal-chart-svg")
        .json(&json!({ "planet_positions": [] }))
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Missing required field: house_cusps"));
}

#[tokio::test]
async fn test_render_minimal_chart() {
    let response = server()
        .post("/render-natal-chart-svg/minimal")
        .json(&json!({ "planet_positions": [{ "planet": "Sun" }] }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    let svg = response.text();
    assert!(svg.contains("viewBox=\"0 0 400.00 400.00\""));
    assert!(svg.contains(">Sun</text>"));
}

#[tokio::test]
async fn test_render_spec_json() {
    let server = server();
    let response = server.post("/render-natal-chart-spec").json(&chart_body()).await;
    response.assert_status_ok();
    let spec: Value = response.json();
    assert_eq!(spec["metadata"]["planets_placed"], 1);
    assert_eq!(spec["metadata"]["houses_rendered"], true);

    let response = server
        .post("/render-natal-chart-spec")
        .json(&json!({ "house_cusps": [] }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({ "error": "Missing required field: planet_positions" }));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = server().get("/render-natal-chart-svg").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_body_limit() {
    let state = AppState {
        renderer: ChartRenderer::new(),
        body_limit_bytes: 64,
    };
    let server = TestServer::new(create_router(Arc::new(state))).unwrap();
    let response = server.post("/render-natal-chart-svg").json(&chart_body()).await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
