use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::{AddedThread, ThreadDetail};
use serde::Serialize;

use super::json_payload;
use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: ThreadDetail,
}

/// `POST /threads`
pub async fn post_thread(
    State(state): State<AppState>,
    AuthenticatedUser(owner): AuthenticatedUser,
    body: Bytes,
) -> Result<(StatusCode, Json<Success<AddedThreadData>>), ApiError> {
    let added_thread = state.add_thread.execute(&json_payload(&body), &owner).await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::with_data(AddedThreadData { added_thread })),
    ))
}

/// `GET /threads/{thread_id}`, public.
pub async fn get_thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Success<ThreadData>>, ApiError> {
    let thread = state.get_thread_detail.execute(&thread_id).await?;
    Ok(Json(Success::with_data(ThreadData { thread })))
}
