use std::sync::Arc;

use domains::{CommentRepository, Result, ThreadRepository};

/// Who wants to delete which comment under which thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommentCommand {
    pub thread_id: String,
    pub comment_id: String,
    /// Credential identifier of the authenticated caller.
    pub owner: String,
}

/// Soft-deletes a comment on behalf of its owner.
///
/// Checks run strictly in order and each one short-circuits the rest:
/// thread exists, comment exists, caller owns the (non-deleted) comment.
/// Only then is the deletion flag set.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[tracing::instrument(
        name = "delete_comment",
        skip(self, command),
        fields(
            thread_id = %command.thread_id,
            comment_id = %command.comment_id,
            owner = %command.owner
        )
    )]
    pub async fn execute(&self, command: &DeleteCommentCommand) -> Result<()> {
        self.thread_repository
            .verify_thread_exists(&command.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_exists(&command.comment_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(&command.comment_id, &command.owner)
            .await?;
        self.comment_repository
            .delete_comment(&command.comment_id)
            .await?;

        tracing::info!("comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{DomainError, MockCommentRepository, MockThreadRepository};
    use mockall::Sequence;

    fn command() -> DeleteCommentCommand {
        DeleteCommentCommand {
            thread_id: "thread-123".into(),
            comment_id: "comment-123".into(),
            owner: "user-123".into(),
        }
    }

    fn use_case(
        threads: MockThreadRepository,
        comments: MockCommentRepository,
    ) -> DeleteCommentUseCase {
        DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments))
    }

    #[tokio::test]
    async fn orchestrates_delete_comment_in_order() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_verify_thread_exists()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_verify_comment_exists()
            .withf(|comment_id| comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_verify_comment_owner()
            .withf(|comment_id, owner| comment_id == "comment-123" && owner == "user-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        comments
            .expect_delete_comment()
            .withf(|comment_id| comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        tokio_test::assert_ok!(use_case(threads, comments).execute(&command()).await);
    }

    #[tokio::test]
    async fn missing_thread_stops_before_comment_checks() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_exists()
            .times(1)
            .returning(|_| Err(DomainError::ThreadNotFound));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_exists().times(0);
        comments.expect_verify_comment_owner().times(0);
        comments.expect_delete_comment().times(0);

        let err = use_case(threads, comments).execute(&command()).await.unwrap_err();
        assert!(matches!(err, DomainError::ThreadNotFound));
    }

    #[tokio::test]
    async fn missing_comment_is_not_found() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_exists().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_exists()
            .times(1)
            .returning(|_| Err(DomainError::CommentNotFound));
        comments.expect_verify_comment_owner().times(0);
        comments.expect_delete_comment().times(0);

        let err = use_case(threads, comments).execute(&command()).await.unwrap_err();
        assert!(matches!(err, DomainError::CommentNotFound));
    }

    #[tokio::test]
    async fn foreign_comment_is_an_authorization_failure() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_exists().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_comment_exists().returning(|_| Ok(()));
        comments
            .expect_verify_comment_owner()
            .times(1)
            .returning(|_, _| Err(DomainError::NotCommentOwner));
        comments.expect_delete_comment().times(0);

        let err = use_case(threads, comments).execute(&command()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotCommentOwner));
    }

    #[tokio::test]
    async fn already_deleted_comment_is_not_found_even_for_its_owner() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_exists().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        // The row still exists, but the ownership check hides it.
        comments.expect_verify_comment_exists().returning(|_| Ok(()));
        comments
            .expect_verify_comment_owner()
            .times(1)
            .returning(|_, _| Err(DomainError::CommentNotFound));
        comments.expect_delete_comment().times(0);

        let err = use_case(threads, comments).execute(&command()).await.unwrap_err();
        assert!(matches!(err, DomainError::CommentNotFound));
    }
}
