use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedComment, CommentRecord, CommentRepository, DomainError, NewComment, Result};
use sqlx::{postgres::PgPool, Row};

use super::{is_foreign_key_violation, storage_error};
use crate::id::{IdGenerator, UuidIdGenerator};

pub struct PgCommentRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_id_generator(pool, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment> {
        let id = format!("comment-{}", self.ids.next_id());

        let row = sqlx::query(
            "INSERT INTO comments (id, content, thread_id, owner, date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(new_comment.content())
        .bind(new_comment.thread_id()?)
        .bind(new_comment.owner()?)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            // comments.thread_id is the only foreign key on the row.
            if is_foreign_key_violation(&err) {
                return DomainError::ThreadNotFound;
            }
            storage_error(err)
        })?;

        AddedComment::new(
            row.try_get::<String, _>("id").map_err(storage_error)?,
            row.try_get::<String, _>("content").map_err(storage_error)?,
            row.try_get::<String, _>("owner").map_err(storage_error)?,
        )
    }

    async fn verify_comment_exists(&self, comment_id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .map(|_| ())
            .ok_or(DomainError::CommentNotFound)
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner, is_delete FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(DomainError::CommentNotFound)?;

        let is_delete: bool = row.try_get("is_delete").map_err(storage_error)?;
        if is_delete {
            return Err(DomainError::CommentNotFound);
        }
        let comment_owner: String = row.try_get("owner").map_err(storage_error)?;
        if comment_owner != owner {
            return Err(DomainError::NotCommentOwner);
        }
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound);
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>> {
        let rows = sqlx::query(
            "SELECT comments.id, comments.content, comments.date, comments.is_delete, \
                    COALESCE(users.username, comments.owner) AS username \
             FROM comments \
             LEFT JOIN users ON comments.owner = users.id \
             WHERE comments.thread_id = $1 \
             ORDER BY comments.date ASC, comments.seq ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(CommentRecord {
                    id: row.try_get("id").map_err(storage_error)?,
                    username: row.try_get("username").map_err(storage_error)?,
                    date: row.try_get("date").map_err(storage_error)?,
                    content: row.try_get("content").map_err(storage_error)?,
                    is_delete: row.try_get("is_delete").map_err(storage_error)?,
                })
            })
            .collect()
    }
}
