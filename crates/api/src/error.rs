//! API error type and its translation into `{type, message}` responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity} with id {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    BadRequest(String),

    /// A JSON body axum could not accept; keeps the rejection's status
    /// (400, 415 or 422).
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}

/// The JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody { status, .. } => *status,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name of the error kind, sent as the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "EntityNotFound",
            Self::Forbidden(_) => "AccessDenied",
            Self::BadRequest(_) | Self::InvalidBody { .. } => "BadRequest",
            Self::Database(_) => "InternalError",
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Database(e) => {
                error!("database failure: {e}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            kind: self.kind(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}
