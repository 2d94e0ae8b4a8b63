use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::AddedComment;
use serde::Serialize;
use services::DeleteCommentCommand;

use super::json_payload;
use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

/// `POST /threads/{thread_id}/comments`
pub async fn post_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    AuthenticatedUser(owner): AuthenticatedUser,
    body: Bytes,
) -> Result<(StatusCode, Json<Success<AddedCommentData>>), ApiError> {
    let added_comment = state
        .add_comment
        .execute(&json_payload(&body), &owner, &thread_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::with_data(AddedCommentData { added_comment })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}`, owner only.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthenticatedUser(owner): AuthenticatedUser,
) -> Result<Json<Success<()>>, ApiError> {
    let command = DeleteCommentCommand {
        thread_id,
        comment_id,
        owner,
    };
    state.delete_comment.execute(&command).await?;
    Ok(Json(Success::empty()))
}
