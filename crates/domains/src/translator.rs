//! # DomainErrorTranslator
//!
//! Maps the message key of a [`DomainError`] to the category the HTTP
//! boundary reports. The table is fixed at compile time; keys it does not
//! know pass through as unexpected internal failures.

use serde::Serialize;

use crate::errors::{DomainError, COMMENT_NOT_FOUND, NOT_COMMENT_OWNER, THREAD_NOT_FOUND};
use ErrorCategory::{Authorization, Invariant, NotFound};

/// Externally meaningful failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The client sent structurally or semantically invalid input.
    Invariant,
    /// The referenced resource does not exist.
    NotFound,
    /// The caller lacks rights over an existing resource.
    Authorization,
}

/// A translated failure, ready to be rendered by an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub category: ErrorCategory,
    pub message: &'static str,
}

const DIRECTORY: &[(&str, ErrorCategory, &str)] = &[
    (
        "NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
        Invariant,
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada",
    ),
    (
        "NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
        Invariant,
        "tidak dapat membuat thread baru karena tipe data tidak sesuai",
    ),
    (
        "NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
        Invariant,
        "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada",
    ),
    (
        "NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
        Invariant,
        "tidak dapat membuat komentar baru karena tipe data tidak sesuai",
    ),
    (
        "THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY",
        Invariant,
        "tidak dapat menampilkan detail thread karena properti yang dibutuhkan tidak ada",
    ),
    (
        "THREAD_DETAIL.NOT_MEET_DATA_TYPE_SPECIFICATION",
        Invariant,
        "tidak dapat menampilkan detail thread karena tipe data tidak sesuai",
    ),
    (
        "COMMENT_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY",
        Invariant,
        "tidak dapat menampilkan detail komentar karena properti yang dibutuhkan tidak ada",
    ),
    (
        "COMMENT_DETAIL.NOT_MEET_DATA_TYPE_SPECIFICATION",
        Invariant,
        "tidak dapat menampilkan detail komentar karena tipe data tidak sesuai",
    ),
    (THREAD_NOT_FOUND, NotFound, THREAD_NOT_FOUND),
    (COMMENT_NOT_FOUND, NotFound, COMMENT_NOT_FOUND),
    (NOT_COMMENT_OWNER, Authorization, NOT_COMMENT_OWNER),
];

/// Looks up a raw message key.
pub fn translate_key(key: &str) -> Option<ClientError> {
    DIRECTORY
        .iter()
        .find(|(known, _, _)| *known == key)
        .map(|&(_, category, message)| ClientError { category, message })
}

/// Translates a domain error; `None` means "unexpected, report as internal".
pub fn translate(error: &DomainError) -> Option<ClientError> {
    match error {
        DomainError::Storage(_) => None,
        other => translate_key(&other.message_key()),
    }
}
