use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedThread, DomainError, NewThread, Result, ThreadRecord, ThreadRepository};
use sqlx::{postgres::PgPool, Row};

use super::storage_error;
use crate::id::{IdGenerator, UuidIdGenerator};

pub struct PgThreadRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_id_generator(pool, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread> {
        let id = format!("thread-{}", self.ids.next_id());

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(new_thread.title())
        .bind(new_thread.body())
        .bind(new_thread.owner()?)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        AddedThread::new(
            row.try_get::<String, _>("id").map_err(storage_error)?,
            row.try_get::<String, _>("title").map_err(storage_error)?,
            row.try_get::<String, _>("owner").map_err(storage_error)?,
        )
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .map(|_| ())
            .ok_or(DomainError::ThreadNotFound)
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRecord> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, \
                    COALESCE(users.username, threads.owner) AS username \
             FROM threads \
             LEFT JOIN users ON users.id = threads.owner \
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?
        .ok_or(DomainError::ThreadNotFound)?;

        Ok(ThreadRecord {
            id: row.try_get("id").map_err(storage_error)?,
            title: row.try_get("title").map_err(storage_error)?,
            body: row.try_get("body").map_err(storage_error)?,
            date: row.try_get("date").map_err(storage_error)?,
            username: row.try_get("username").map_err(storage_error)?,
        })
    }
}
