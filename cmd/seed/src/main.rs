//! Registers a user in PostgreSQL and prints a bearer token for it.
//!
//! Usage: `seed <user-id> <username>`

use anyhow::Context;
use auth_adapters::JwtAccessTokens;
use configs::ForumConfig;
use secrecy::ExposeSecret;
use storage_adapters::postgres;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(user_id), Some(username)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: seed <user-id> <username>");
    };

    let config = ForumConfig::load().context("loading configuration")?;
    let url = config
        .database
        .url
        .as_ref()
        .context("database.url is not set")?;
    let pool = postgres::connect(url.expose_secret(), config.database.max_connections).await?;
    postgres::upsert_user(&pool, &user_id, &username).await?;

    let tokens = JwtAccessTokens::new(
        &config.auth.access_token_key,
        config.auth.access_token_age_secs,
    );
    let token = tokens.issue(&user_id).context("signing access token")?;

    println!("{token}");
    Ok(())
}
