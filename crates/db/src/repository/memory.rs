//! `MemoryRepository` — an in-process [`Repository`] for tests and
//! database-less runs.
//!
//! Mirrors the Postgres semantics: generated keys come from a per-table
//! sequence starting at 1, keyed saves overwrite, and rows are listed in key
//! order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::Repository;
use crate::{
    resource::{Resource, RowKey},
    DbError,
};

pub struct MemoryRepository<R: Resource> {
    rows: Mutex<BTreeMap<R::Key, R>>,
    /// Last sequence value handed out.
    sequence: AtomicI64,
}

impl<R: Resource> MemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> MutexGuard<'_, BTreeMap<R::Key, R>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_key(&self) -> Result<R::Key, DbError> {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        R::Key::from_sequence(next).ok_or(DbError::MissingKey(R::TYPE_NAME))
    }
}

impl<R: Resource> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for MemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, DbError> {
        Ok(self.rows().values().cloned().collect())
    }

    async fn find_by_key(&self, key: &R::Key) -> Result<Option<R>, DbError> {
        Ok(self.rows().get(key).cloned())
    }

    async fn save(&self, row: R) -> Result<R, DbError> {
        let row = match row.key() {
            Some(key) => {
                // Keep generated keys clear of explicitly inserted ones.
                if let Some(value) = key.as_sequence() {
                    self.sequence.fetch_max(value, Ordering::SeqCst);
                }
                row
            }
            None => {
                let key = self.next_key()?;
                row.with_key(key)
            }
        };

        let key = row.key().ok_or(DbError::MissingKey(R::TYPE_NAME))?;
        self.rows().insert(key, row.clone());
        Ok(row)
    }

    async fn update(&self, row: R) -> Result<R, DbError> {
        let key = row.key().ok_or(DbError::MissingKey(R::TYPE_NAME))?;
        match self.rows().get_mut(&key) {
            Some(stored) => {
                *stored = row.clone();
                Ok(row)
            }
            None => Err(DbError::NotFound),
        }
    }

    async fn delete(&self, row: &R) -> Result<(), DbError> {
        let key = row.key().ok_or(DbError::MissingKey(R::TYPE_NAME))?;
        match self.rows().remove(&key) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }
}
