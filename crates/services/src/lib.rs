//! # services
//!
//! Use cases of the forum core. Each one validates its payload through an
//! entity, checks existence and ownership through the repository ports in a
//! fixed order, and only then performs the read or write it exists for.
//! Repository failures are propagated unchanged.

pub mod use_cases;

pub use use_cases::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentCommand, DeleteCommentUseCase,
    GetThreadDetailUseCase,
};
