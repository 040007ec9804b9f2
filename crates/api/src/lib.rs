//! `api` crate — HTTP REST API layer.
//!
//! Exposes, for each of help requests, menu items, recommendation requests,
//! organizations, articles and menu item reviews:
//!   GET    /api/{resource}/all
//!   GET    /api/{resource}?id=…
//!   POST   /api/{resource}/post?…
//!   PUT    /api/{resource}?id=…
//!   DELETE /api/{resource}?id=…
//!
//! plus `/api/currentUser`, `/api/systemInfo` and `/health`.

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use auth::{AuthConfig, Principal, Role};
pub use error::ApiError;
pub use state::{AppState, Repositories};

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(handlers::routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth::authenticate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
