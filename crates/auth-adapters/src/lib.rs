//! # auth-adapters
//!
//! Credential collaborators that resolve a bearer token to the caller's
//! identifier (`domains::AccessTokenVerifier`).

#[cfg(feature = "auth-jwt")]
mod jwt;

#[cfg(feature = "auth-jwt")]
pub use jwt::JwtAccessTokens;
