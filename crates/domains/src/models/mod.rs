//! # Domain Models
//!
//! Immutable value objects for threads and comments. Each one validates its
//! input exactly once, at construction.

mod comments;
mod payload;
mod threads;

pub use comments::{
    AddedComment, CommentDetail, CommentRecord, CommentView, NewComment,
    DELETED_COMMENT_PLACEHOLDER,
};
pub use threads::{AddedThread, NewThread, ThreadDetail, ThreadRecord};
