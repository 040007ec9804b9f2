//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the row structs for every resource table, and
//! generic repositories (Postgres and in-memory) over them. No business logic
//! lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod resource;
pub mod timestamp;

pub use error::DbError;
pub use pool::DbPool;
pub use repository::{MemoryRepository, PgRepository, Repository};
pub use resource::{Resource, RowKey};
