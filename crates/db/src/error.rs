//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    /// A keyed operation was attempted on a row that has not been persisted yet.
    #[error("{0} row has no key")]
    MissingKey(&'static str),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
