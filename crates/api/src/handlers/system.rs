//! Endpoints the web UI polls outside of any resource: who am I, and what
//! is running.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::{
    auth::{Principal, RequireUser},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/currentUser", get(current_user))
        .route("/api/systemInfo", get(system_info))
}

pub async fn current_user(RequireUser(principal): RequireUser) -> Json<Principal> {
    Json(principal)
}

pub async fn system_info() -> Json<SystemInfo> {
    Json(SystemInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
