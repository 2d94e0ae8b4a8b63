//! # PostgreSQL storage
//!
//! Maps the relational model (`users`, `threads`, `comments`) onto the
//! repository ports. Queries are checked at runtime; schema migrations are
//! embedded from `migrations/`.

mod comments;
mod threads;

use domains::DomainError;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub use comments::PgCommentRepository;
pub use threads::PgThreadRepository;

/// Opens a pool and brings the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(max_connections, "postgres pool ready, migrations applied");
    Ok(pool)
}

/// Inserts or renames a user row so their threads and comments resolve a
/// username.
pub async fn upsert_user(pool: &PgPool, user_id: &str, username: &str) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO users (id, username) VALUES ($1, $2) \
         ON CONFLICT (id) DO UPDATE SET username = EXCLUDED.username",
    )
    .bind(user_id)
    .bind(username)
    .execute(pool)
    .await?;
    Ok(())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

fn storage_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "postgres query failed");
    DomainError::Storage(err.into())
}
