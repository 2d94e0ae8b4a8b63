//! # api-adapters
//!
//! The HTTP boundary of the forum. Handlers extract the payload and the
//! authenticated identity, invoke a use case, and render either the success
//! envelope or the translated failure.

#[cfg(feature = "web-axum")]
pub mod auth;
#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod response;
#[cfg(feature = "web-axum")]
pub mod state;

#[cfg(feature = "web-axum")]
pub use state::AppState;

#[cfg(feature = "web-axum")]
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Mounts the forum routes.
///
/// The caller decides where the router lives (e.g. nested under `/api`).
#[cfg(feature = "web-axum")]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/threads", post(handlers::threads::post_thread))
        .route("/threads/{thread_id}", get(handlers::threads::get_thread_detail))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comments::post_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
