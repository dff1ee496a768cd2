#![allow(dead_code)]

use axum::body::Body;
use bistro_server::catalog::SeedData;
use bistro_server::{Config, OneshotRouter, ServerState, build_app};
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn state() -> ServerState {
    state_with_latency(0)
}

pub fn state_with_latency(mock_latency_ms: u64) -> ServerState {
    let config = Config::with_overrides(0, mock_latency_ms);
    ServerState::new(config, SeedData::embedded().unwrap())
}

pub async fn send(state: &ServerState, request: Request<Body>) -> TestResponse {
    let mut app = build_app(state);
    let response = app.oneshot(state, request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: Value) -> Request<Body> {
    post_raw(uri, payload.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
