//! # DomainError
//!
//! Failure signals raised by the entity validators, the repository ports and
//! the use cases. Every variant except [`DomainError::Storage`] carries a
//! stable message key that the [`translator`](crate::translator) maps to a
//! client-facing category.

use std::fmt;

use thiserror::Error;

/// The entity whose construction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    NewThread,
    AddedThread,
    ThreadDetail,
    NewComment,
    AddedComment,
    CommentDetail,
}

impl EntityKind {
    /// Prefix of the message key, e.g. `NEW_THREAD`.
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::NewThread => "NEW_THREAD",
            Self::AddedThread => "ADDED_THREAD",
            Self::ThreadDetail => "THREAD_DETAIL",
            Self::NewComment => "NEW_COMMENT",
            Self::AddedComment => "ADDED_COMMENT",
            Self::CommentDetail => "COMMENT_DETAIL",
        }
    }
}

/// The two ways a payload can be malformed.
///
/// A payload that is both incomplete and mistyped always reports
/// `MissingProperty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationFailure {
    /// A required field is absent, `null` or an empty string.
    MissingProperty,
    /// A present field has the wrong primitive type, or a date that does not
    /// parse into a valid timestamp.
    WrongType,
}

impl ValidationFailure {
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Self::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::WrongType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

/// Key/suffix pair rendered as `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationKey {
    pub entity: EntityKind,
    pub failure: ValidationFailure,
}

impl fmt::Display for ValidationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity.key_prefix(), self.failure.key_suffix())
    }
}

pub const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";
pub const COMMENT_NOT_FOUND: &str = "komentar tidak ditemukan";
pub const NOT_COMMENT_OWNER: &str = "Anda tidak berhak menghapus komentar ini";

/// The primary error type for all forum core operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Entity construction rejected its payload.
    #[error("{0}")]
    Validation(ValidationKey),

    #[error("{}", THREAD_NOT_FOUND)]
    ThreadNotFound,

    /// Absent comment, or a soft-deleted one during the ownership check.
    #[error("{}", COMMENT_NOT_FOUND)]
    CommentNotFound,

    #[error("{}", NOT_COMMENT_OWNER)]
    NotCommentOwner,

    /// Infrastructure failure inside a repository adapter (e.g. DB down).
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub const fn validation(entity: EntityKind, failure: ValidationFailure) -> Self {
        Self::Validation(ValidationKey { entity, failure })
    }

    pub const fn missing(entity: EntityKind) -> Self {
        Self::validation(entity, ValidationFailure::MissingProperty)
    }

    pub const fn wrong_type(entity: EntityKind) -> Self {
        Self::validation(entity, ValidationFailure::WrongType)
    }

    /// The stable key used by the translator lookup.
    ///
    /// Storage failures have no entry in the lookup; their key is the
    /// rendered error so they pass through as internal failures.
    pub fn message_key(&self) -> String {
        self.to_string()
    }
}

/// A specialized Result type for forum core logic.
pub type Result<T> = std::result::Result<T, DomainError>;
