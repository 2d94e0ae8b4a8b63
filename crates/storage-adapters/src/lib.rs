//! # storage-adapters
//!
//! Implementations of the `ThreadRepository` and `CommentRepository` ports.
//! The in-memory store is always compiled; PostgreSQL sits behind the
//! `db-postgres` feature.

mod id;
pub mod memory;
#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use id::{IdGenerator, UuidIdGenerator};
pub use memory::{InMemoryCommentRepository, InMemoryForumStore, InMemoryThreadRepository};
#[cfg(feature = "db-postgres")]
pub use postgres::{PgCommentRepository, PgThreadRepository};
