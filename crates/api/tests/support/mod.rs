//! Shared fixtures for router-level tests.
//!
//! Every test builds a fresh in-memory [`AppState`] and drives
//! [`api::router`] directly with `oneshot`, so no server or database is
//! involved.

#![allow(dead_code)]

use api::{AppState, AuthConfig, Repositories};
use axum::{
    body::{Body, Bytes},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
};
use chrono::NaiveDateTime;
use serde_json::Value;
use tower::ServiceExt;

pub const USER: &str = "user-token";
pub const ADMIN: &str = "admin-token";

pub fn state() -> AppState {
    let auth = AuthConfig::parse(
        "user-token=student@ucsb.edu,admin-token=admin@ucsb.edu",
        "admin@ucsb.edu",
    )
    .expect("valid auth fixture");
    AppState::new(Repositories::in_memory(), auth)
}

pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").expect("valid timestamp")
}

pub async fn send_raw(
    state: &AppState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    dispatch(state, request).await
}

/// Send `body` with no `Content-Type` header at all.
pub async fn send_untyped(
    state: &AppState,
    method: Method,
    uri: &str,
    token: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_owned()))
        .expect("valid request");

    let (status, bytes) = dispatch(state, request).await;
    (status, decode(&bytes))
}

async fn dispatch(state: &AppState, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = api::router(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    (status, bytes)
}

fn decode(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
    }
}

/// Like [`send_raw`], decoding the body as JSON (or a JSON string when the
/// body is plain text).
pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(state, method, uri, token, body).await;
    (status, decode(&bytes))
}

pub async fn get(state: &AppState, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(state, Method::GET, uri, token, None).await
}
