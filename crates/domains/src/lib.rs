//! forum/crates/domains/src/lib.rs
//!
//! Entities, repository ports and the error taxonomy of the forum core.
//! Nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod ports;
pub mod translator;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;
pub use translator::{translate, translate_key, ClientError, ErrorCategory};
