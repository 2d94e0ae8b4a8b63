//! # In-memory storage
//!
//! A process-local stand-in for the relational store, backed by `DashMap`.
//! It keeps the same observable semantics as the PostgreSQL adapter so the
//! HTTP layer can be exercised without a database.

mod comments;
mod threads;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;

pub use comments::InMemoryCommentRepository;
pub use threads::InMemoryThreadRepository;

#[derive(Debug, Clone)]
struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredComment {
    id: String,
    content: String,
    thread_id: String,
    owner: String,
    date: DateTime<Utc>,
    is_delete: bool,
    /// Insertion order, used to break ties between equal timestamps.
    sequence: u64,
}

/// Shared tables for the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryForumStore {
    users: DashMap<String, String>,
    threads: DashMap<String, StoredThread>,
    comments: DashMap<String, StoredComment>,
    sequence: AtomicU64,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the username shown for `user_id`.
    pub fn register_user(&self, user_id: impl Into<String>, username: impl Into<String>) {
        self.users.insert(user_id.into(), username.into());
    }

    /// Unregistered owners are shown under their identifier.
    fn username_of(&self, user_id: &str) -> String {
        self.users
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| user_id.to_owned())
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Current value of a comment's deletion flag, if the comment exists.
    pub fn comment_is_deleted(&self, comment_id: &str) -> Option<bool> {
        self.comments.get(comment_id).map(|comment| comment.is_delete)
    }
}
