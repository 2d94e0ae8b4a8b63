use std::sync::Arc;

use domains::{AddedComment, CommentRepository, NewComment, Result, ThreadRepository};
use serde_json::Value;

/// Attaches a comment to an existing thread.
///
/// The thread existence check is a hard precondition: a comment is never
/// persisted for a thread that does not exist.
pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[tracing::instrument(name = "add_comment", skip(self, payload))]
    pub async fn execute(
        &self,
        payload: &Value,
        owner: &str,
        thread_id: &str,
    ) -> Result<AddedComment> {
        let new_comment = NewComment::from_payload(payload)?;

        self.thread_repository.verify_thread_exists(thread_id).await?;

        let new_comment = new_comment.attach(thread_id, owner);
        let added = self.comment_repository.add_comment(new_comment).await?;
        tracing::info!(comment_id = added.id(), "comment created");
        Ok(added)
    }
}
