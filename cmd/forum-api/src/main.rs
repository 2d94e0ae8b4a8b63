//! # forum-api
//!
//! Assembles the forum server from configuration: picks the storage
//! backend, builds the access-token verifier and serves the router.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::AppState;
use auth_adapters::JwtAccessTokens;
use configs::{ForumConfig, LogConfig, LogFormat, StorageBackend};
use domains::{CommentRepository, ThreadRepository};
use storage_adapters::{InMemoryCommentRepository, InMemoryForumStore, InMemoryThreadRepository};
use tracing_subscriber::EnvFilter;

type Repositories = (Arc<dyn ThreadRepository>, Arc<dyn CommentRepository>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ForumConfig::load().context("loading configuration")?;
    init_tracing(&config.log);

    let (threads, comments) = repositories(&config).await?;
    let access_tokens = Arc::new(JwtAccessTokens::new(
        &config.auth.access_token_key,
        config.auth.access_token_age_secs,
    ));
    let app = api_adapters::router(AppState::new(threads, comments, access_tokens));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, backend = ?config.storage.backend, "forum-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;
    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn repositories(config: &ForumConfig) -> anyhow::Result<Repositories> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("using the in-memory store; data is lost on shutdown");
            let store = Arc::new(InMemoryForumStore::new());
            Ok((
                Arc::new(InMemoryThreadRepository::new(store.clone())),
                Arc::new(InMemoryCommentRepository::new(store)),
            ))
        }
        StorageBackend::Postgres => postgres_repositories(config).await,
    }
}

#[cfg(feature = "db-postgres")]
async fn postgres_repositories(config: &ForumConfig) -> anyhow::Result<Repositories> {
    use secrecy::ExposeSecret;
    use storage_adapters::postgres;

    let url = config
        .database
        .url
        .as_ref()
        .context("database.url is not set")?;
    let pool = postgres::connect(url.expose_secret(), config.database.max_connections).await?;
    Ok((
        Arc::new(storage_adapters::PgThreadRepository::new(pool.clone())),
        Arc::new(storage_adapters::PgCommentRepository::new(pool)),
    ))
}

#[cfg(not(feature = "db-postgres"))]
async fn postgres_repositories(_config: &ForumConfig) -> anyhow::Result<Repositories> {
    anyhow::bail!("storage.backend = \"postgres\" needs the db-postgres feature")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
