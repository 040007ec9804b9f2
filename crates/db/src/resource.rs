//! The `Resource` trait — table metadata every persisted row type provides.
//!
//! The generic repositories build all of their SQL from this metadata, so a
//! new table only needs a row struct, an impl of this trait, and a migration.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// A `query_as` builder returning rows of type `R`.
pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Primary key types usable by the generic repositories.
pub trait RowKey:
    Clone
    + Ord
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + for<'q> sqlx::Encode<'q, Postgres>
    + sqlx::Type<Postgres>
{
    /// Parse a key from its textual form (e.g. a query-string value).
    fn parse_key(raw: &str) -> Result<Self, String>;

    /// Build a key from a sequence value, for tables with generated keys.
    fn from_sequence(value: i64) -> Option<Self>;

    /// The sequence value this key occupies, if the key is sequence-backed.
    fn as_sequence(&self) -> Option<i64>;
}

impl RowKey for i64 {
    fn parse_key(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|e| format!("invalid numeric id '{raw}': {e}"))
    }

    fn from_sequence(value: i64) -> Option<Self> {
        Some(value)
    }

    fn as_sequence(&self) -> Option<i64> {
        Some(*self)
    }
}

impl RowKey for String {
    fn parse_key(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("key must not be empty".to_string());
        }
        Ok(raw.to_string())
    }

    fn from_sequence(_value: i64) -> Option<Self> {
        None
    }

    fn as_sequence(&self) -> Option<i64> {
        None
    }
}

/// A flat row stored in its own table.
pub trait Resource:
    Clone + fmt::Debug + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static
where
    Self: for<'r> FromRow<'r, PgRow>,
{
    type Key: RowKey;

    /// Name used in user-facing messages, e.g. `"HelpRequest with id 7 not found"`.
    const TYPE_NAME: &'static str;
    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    /// Every non-key column, in the order [`Resource::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    /// The row's key, or `None` when the store has yet to generate one.
    fn key(&self) -> Option<Self::Key>;

    /// Return the row with its key replaced.
    fn with_key(self, key: Self::Key) -> Self;

    /// Bind every non-key column value, in `COLUMNS` order.
    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}
