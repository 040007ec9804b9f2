//! The generic resource controller.
//!
//! Every resource gets the same five role-gated endpoints from [`routes`]:
//!
//!   GET    {path}/all           user   list every row
//!   GET    {path}?{key}=…       user   fetch one row
//!   POST   {path}/post?{fields} admin  create from query parameters
//!   PUT    {path}?{key}=…       admin  update from a JSON body
//!   DELETE {path}?{key}=…       admin  delete one row
//!
//! Per-resource modules only supply an [`ApiResource`] impl.

pub mod articles;
pub mod help_requests;
pub mod menu_item_reviews;
pub mod menu_items;
pub mod organizations;
pub mod recommendation_requests;
pub mod system;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use db::{DbError, Repository, Resource, RowKey};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::{
    auth::{RequireAdmin, RequireUser},
    error::ApiError,
    extract::{ApiJson, ApiQuery},
    state::{AppState, Repositories},
};

/// How `PUT` combines the request body with the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// The body replaces the stored row wholesale.
    Replace,
    /// The stored row is loaded and the resource copies selected fields from
    /// the body into it ([`ApiResource::merge_from`]).
    Merge,
}

/// A [`Resource`] exposed over HTTP.
pub trait ApiResource: Resource {
    /// Route prefix, e.g. `/api/helprequests`.
    const PATH: &'static str;
    /// Query parameter carrying the key on get/update/delete.
    const KEY_PARAM: &'static str = "id";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Replace;

    /// Query parameters accepted by `POST {path}/post`.
    type Params: DeserializeOwned + Send + 'static;

    /// Build an unsaved row from create parameters.
    fn from_params(params: Self::Params) -> Self;

    /// Apply `incoming` onto this stored row. Only consulted under
    /// [`UpdatePolicy::Merge`].
    fn merge_from(self, incoming: Self) -> Self {
        incoming
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>>;
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Mount the five endpoints for `R`.
pub fn resource_routes<R: ApiResource>() -> Router<AppState> {
    Router::new()
        .route(&format!("{}/all", R::PATH), get(list_all::<R>))
        .route(&format!("{}/post", R::PATH), post(create::<R>))
        .route(
            R::PATH,
            get(get_by_key::<R>)
                .put(update::<R>)
                .delete(delete::<R>),
        )
}

/// Every resource plus the system endpoints.
pub fn routes() -> Router<AppState> {
    use db::models::*;

    Router::new()
        .merge(resource_routes::<HelpRequest>())
        .merge(resource_routes::<MenuItem>())
        .merge(resource_routes::<RecommendationRequest>())
        .merge(resource_routes::<Organization>())
        .merge(resource_routes::<Article>())
        .merge(resource_routes::<MenuItemReview>())
        .merge(system::routes())
}

fn key_param<R: ApiResource>(params: &HashMap<String, String>) -> Result<R::Key, ApiError> {
    let raw = params.get(R::KEY_PARAM).ok_or_else(|| {
        ApiError::BadRequest(format!("missing required parameter '{}'", R::KEY_PARAM))
    })?;
    R::Key::parse_key(raw).map_err(ApiError::BadRequest)
}

async fn find_existing<R: ApiResource>(state: &AppState, key: &R::Key) -> Result<R, ApiError> {
    R::repository(&state.repos)
        .find_by_key(key)
        .await?
        .ok_or_else(|| ApiError::not_found(R::TYPE_NAME, key))
}

/// A row that vanished between the lookup and the write is reported like
/// one that was never there.
fn missing_as_not_found<R: ApiResource>(err: DbError, key: &R::Key) -> ApiError {
    match err {
        DbError::NotFound => ApiError::not_found(R::TYPE_NAME, key),
        other => other.into(),
    }
}

pub async fn list_all<R: ApiResource>(
    State(state): State<AppState>,
    _user: RequireUser,
) -> Result<Json<Vec<R>>, ApiError> {
    let rows = R::repository(&state.repos).find_all().await?;
    Ok(Json(rows))
}

pub async fn get_by_key<R: ApiResource>(
    State(state): State<AppState>,
    _user: RequireUser,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> Result<Json<R>, ApiError> {
    let key = key_param::<R>(&params)?;
    let row = find_existing::<R>(&state, &key).await?;
    Ok(Json(row))
}

pub async fn create<R: ApiResource>(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiQuery(params): ApiQuery<R::Params>,
) -> Result<Json<R>, ApiError> {
    let saved = R::repository(&state.repos)
        .save(R::from_params(params))
        .await?;

    if let Some(key) = saved.key() {
        info!(entity = R::TYPE_NAME, %key, by = %admin.email, "created");
    }
    Ok(Json(saved))
}

pub async fn update<R: ApiResource>(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
    ApiJson(incoming): ApiJson<R>,
) -> Result<Json<R>, ApiError> {
    let key = key_param::<R>(&params)?;
    let existing = find_existing::<R>(&state, &key).await?;

    debug!(entity = R::TYPE_NAME, policy = ?R::UPDATE_POLICY, "applying update");
    let updated = match R::UPDATE_POLICY {
        UpdatePolicy::Replace => incoming,
        UpdatePolicy::Merge => existing.merge_from(incoming),
    };

    // The row keeps the identity it was addressed by. `update` never
    // inserts, so a row deleted since the lookup stays deleted.
    let saved = R::repository(&state.repos)
        .update(updated.with_key(key.clone()))
        .await
        .map_err(|e| missing_as_not_found::<R>(e, &key))?;

    info!(entity = R::TYPE_NAME, %key, by = %admin.email, "updated");
    Ok(Json(saved))
}

pub async fn delete<R: ApiResource>(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> Result<Json<Message>, ApiError> {
    let key = key_param::<R>(&params)?;
    let existing = find_existing::<R>(&state, &key).await?;

    R::repository(&state.repos)
        .delete(&existing)
        .await
        .map_err(|e| missing_as_not_found::<R>(e, &key))?;

    info!(entity = R::TYPE_NAME, %key, by = %admin.email, "deleted");
    Ok(Json(Message {
        message: format!("{} with id {} deleted", R::TYPE_NAME, key),
    }))
}
