//! Postgres-backed repository for any [`Resource`].

use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{sql, Repository};
use crate::{resource::Resource, DbError, DbPool};

pub struct PgRepository<R> {
    pool: DbPool,
    _rows: PhantomData<fn() -> R>,
}

impl<R: Resource> PgRepository<R> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _rows: PhantomData,
        }
    }
}

impl<R> Clone for PgRepository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _rows: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for PgRepository<R> {
    #[instrument(skip(self), fields(table = R::TABLE))]
    async fn find_all(&self) -> Result<Vec<R>, DbError> {
        let sql = sql::select_all::<R>();
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        debug!(count = rows.len(), "fetched rows");
        Ok(rows)
    }

    #[instrument(skip(self), fields(table = R::TABLE))]
    async fn find_by_key(&self, key: &R::Key) -> Result<Option<R>, DbError> {
        let sql = sql::select_by_key::<R>();
        let row = sqlx::query_as::<_, R>(&sql)
            .bind(key.clone())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    #[instrument(skip_all, fields(table = R::TABLE))]
    async fn save(&self, row: R) -> Result<R, DbError> {
        let saved = match row.key() {
            None => {
                let sql = sql::insert_generated::<R>();
                let query = row.bind_columns(sqlx::query_as::<_, R>(&sql));
                query.fetch_one(&self.pool).await?
            }
            Some(key) => {
                let sql = sql::upsert::<R>();
                let query = row.bind_columns(sqlx::query_as::<_, R>(&sql).bind(key));
                query.fetch_one(&self.pool).await?
            }
        };
        Ok(saved)
    }

    #[instrument(skip_all, fields(table = R::TABLE))]
    async fn update(&self, row: R) -> Result<R, DbError> {
        let key = row.key().ok_or(DbError::MissingKey(R::TYPE_NAME))?;
        let sql = sql::update_by_key::<R>();
        let query = row.bind_columns(sqlx::query_as::<_, R>(&sql).bind(key));

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip_all, fields(table = R::TABLE))]
    async fn delete(&self, row: &R) -> Result<(), DbError> {
        let key = row.key().ok_or(DbError::MissingKey(R::TYPE_NAME))?;
        let sql = sql::delete_by_key::<R>();
        let result = sqlx::query(&sql).bind(key).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }
}
