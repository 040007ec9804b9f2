//! Repositories — the find-all / find-by-key / save / update / delete
//! capability.
//!
//! [`Repository`] is implemented once for Postgres ([`PgRepository`]) and once
//! in memory ([`MemoryRepository`]); both are generic over any [`Resource`].
//! No business logic lives here.

pub mod memory;
pub mod postgres;
pub mod sql;

use async_trait::async_trait;

use crate::{resource::Resource, DbError};

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    /// Every row of the table, in ascending key order.
    async fn find_all(&self) -> Result<Vec<R>, DbError>;

    async fn find_by_key(&self, key: &R::Key) -> Result<Option<R>, DbError>;

    /// Insert `row`, or overwrite the stored row with the same key.
    ///
    /// Rows without a key get one generated by the store. Returns the row as
    /// persisted.
    async fn save(&self, row: R) -> Result<R, DbError>;

    /// Overwrite the stored row with `row`'s key. Never inserts: returns
    /// [`DbError::NotFound`] if that row no longer exists.
    async fn update(&self, row: R) -> Result<R, DbError>;

    /// Remove `row`. Returns [`DbError::NotFound`] if nothing was deleted.
    async fn delete(&self, row: &R) -> Result<(), DbError>;
}
