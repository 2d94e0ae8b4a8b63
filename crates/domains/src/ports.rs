//! # Core Traits (Ports)
//!
//! Storage and credential adapters implement these traits; the use cases
//! depend on nothing else.

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::Result;
use crate::models::{AddedComment, AddedThread, CommentRecord, NewComment, NewThread, ThreadRecord};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persists a thread whose owner is attached.
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread>;

    /// Fails with [`DomainError::ThreadNotFound`](crate::DomainError::ThreadNotFound)
    /// when no such thread exists.
    async fn verify_thread_exists(&self, thread_id: &str) -> Result<()>;

    /// Thread attributes joined with the owner's username.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRecord>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persists a comment whose thread and owner are attached.
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment>;

    /// `CommentNotFound` when the row is absent. Soft-deleted rows exist.
    async fn verify_comment_exists(&self, comment_id: &str) -> Result<()>;

    /// `CommentNotFound` when the row is absent or soft-deleted,
    /// `NotCommentOwner` when it belongs to someone else.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()>;

    /// Sets the deletion flag. Flipping an already-set flag is not an error.
    async fn delete_comment(&self, comment_id: &str) -> Result<()>;

    /// All comments of a thread, oldest first, deleted ones included.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>>;
}

/// Failures of the credential collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authentication")]
    MissingToken,

    #[error("invalid access token: {0}")]
    InvalidToken(String),

    #[error("access token expired")]
    Expired,
}

/// Resolves a bearer token to the caller's credential identifier.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AccessTokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> std::result::Result<String, AuthError>;
}
