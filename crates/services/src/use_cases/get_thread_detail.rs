use std::sync::Arc;

use domains::{CommentDetail, CommentRepository, Result, ThreadDetail, ThreadRepository};

/// Public read of a thread with its comments in creation order.
///
/// Deleted comments stay in the list with their content masked; the deletion
/// flag itself is not part of the output.
pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[tracing::instrument(name = "get_thread_detail", skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        self.thread_repository.verify_thread_exists(thread_id).await?;

        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?
            .into_iter()
            .map(|record| CommentDetail::try_from(record).map(CommentDetail::into_view))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(comment_count = comments.len(), "thread detail assembled");
        ThreadDetail::new(thread, comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domains::{
        CommentRecord, CommentView, DomainError, MockCommentRepository, MockThreadRepository,
        ThreadRecord, DELETED_COMMENT_PLACEHOLDER,
    };
    use mockall::Sequence;

    fn thread_record() -> ThreadRecord {
        ThreadRecord {
            id: "thread-123".into(),
            title: "sebuah thread".into(),
            body: "sebuah body thread".into(),
            date: Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, 9).unwrap(),
            username: Some("dicoding".into()),
        }
    }

    fn comment_records() -> Vec<CommentRecord> {
        vec![
            CommentRecord {
                id: "comment-111".into(),
                username: Some("johndoe".into()),
                date: Utc.with_ymd_and_hms(2021, 8, 8, 7, 20, 0).unwrap(),
                content: "hi".into(),
                is_delete: false,
            },
            CommentRecord {
                id: "comment-222".into(),
                username: Some("dicoding".into()),
                date: Utc.with_ymd_and_hms(2021, 8, 8, 7, 21, 0).unwrap(),
                content: "secret".into(),
                is_delete: true,
            },
        ]
    }

    #[tokio::test]
    async fn orchestrates_get_thread_detail() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_verify_thread_exists()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        threads
            .expect_get_thread_by_id()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(thread_record()));
        comments
            .expect_get_comments_by_thread_id()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(comment_records()));

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let detail = use_case.execute("thread-123").await.unwrap();

        assert_eq!(detail.id(), "thread-123");
        assert_eq!(detail.date(), "2021-08-08T07:19:09.000Z");
        assert_eq!(
            detail.comments(),
            &[
                CommentView {
                    id: "comment-111".into(),
                    username: "johndoe".into(),
                    date: "2021-08-08T07:20:00.000Z".into(),
                    content: "hi".into(),
                },
                CommentView {
                    id: "comment-222".into(),
                    username: "dicoding".into(),
                    date: "2021-08-08T07:21:00.000Z".into(),
                    content: DELETED_COMMENT_PLACEHOLDER.into(),
                },
            ]
        );

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["comments"][1].get("is_delete").is_none());
    }

    #[tokio::test]
    async fn missing_thread_skips_all_reads() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_exists()
            .times(1)
            .returning(|_| Err(DomainError::ThreadNotFound));
        threads.expect_get_thread_by_id().times(0);
        let mut comments = MockCommentRepository::new();
        comments.expect_get_comments_by_thread_id().times(0);

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute("thread-404").await.unwrap_err();
        assert!(matches!(err, DomainError::ThreadNotFound));
    }

    #[tokio::test]
    async fn thread_without_comments_has_an_empty_list() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_exists().returning(|_| Ok(()));
        threads.expect_get_thread_by_id().returning(|_| Ok(thread_record()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_comments_by_thread_id()
            .returning(|_| Ok(Vec::new()));

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let detail = use_case.execute("thread-123").await.unwrap();
        assert!(detail.comments().is_empty());
    }

    #[tokio::test]
    async fn malformed_comment_row_is_a_comment_detail_failure() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_exists().returning(|_| Ok(()));
        threads.expect_get_thread_by_id().returning(|_| Ok(thread_record()));
        let mut comments = MockCommentRepository::new();
        comments.expect_get_comments_by_thread_id().returning(|_| {
            let mut rows = comment_records();
            rows[0].username = None;
            Ok(rows)
        });

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute("thread-123").await.unwrap_err();
        assert_eq!(err.message_key(), "COMMENT_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY");
    }
}
