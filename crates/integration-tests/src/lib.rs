//! Shared wiring for the end-to-end tests: an in-memory store and JWT
//! credentials behind the real router.

use std::sync::Arc;

use auth_adapters::JwtAccessTokens;
use domains::AuthError;
use secrecy::SecretString;
use storage_adapters::{InMemoryCommentRepository, InMemoryForumStore, InMemoryThreadRepository};

pub const ACCESS_TOKEN_KEY: &str = "integration-test-key";

pub struct Harness {
    pub store: Arc<InMemoryForumStore>,
    pub threads: Arc<InMemoryThreadRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub tokens: Arc<JwtAccessTokens>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryForumStore::new());
        Self {
            threads: Arc::new(InMemoryThreadRepository::new(store.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(store.clone())),
            tokens: Arc::new(JwtAccessTokens::new(
                &SecretString::from(ACCESS_TOKEN_KEY.to_owned()),
                3000,
            )),
            store,
        }
    }

    /// Registers a user and returns a bearer token for it.
    pub fn sign_in(&self, user_id: &str, username: &str) -> Result<String, AuthError> {
        self.store.register_user(user_id, username);
        self.tokens.issue(user_id)
    }

    #[cfg(feature = "web-axum")]
    pub fn router(&self) -> axum::Router {
        api_adapters::router(api_adapters::AppState::new(
            self.threads.clone(),
            self.comments.clone(),
            self.tokens.clone(),
        ))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
