use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedComment, CommentRecord, CommentRepository, DomainError, NewComment, Result};

use super::{InMemoryForumStore, StoredComment};
use crate::id::{IdGenerator, UuidIdGenerator};

pub struct InMemoryCommentRepository {
    store: Arc<InMemoryForumStore>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<InMemoryForumStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(store: Arc<InMemoryForumStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add_comment(&self, new_comment: NewComment) -> Result<AddedComment> {
        let thread_id = new_comment.thread_id()?;
        // Mirrors the foreign key on comments.thread_id.
        if !self.store.threads.contains_key(thread_id) {
            return Err(DomainError::ThreadNotFound);
        }

        let comment = StoredComment {
            id: format!("comment-{}", self.ids.next_id()),
            content: new_comment.content().to_owned(),
            thread_id: thread_id.to_owned(),
            owner: new_comment.owner()?.to_owned(),
            date: Utc::now(),
            is_delete: false,
            sequence: self.store.next_sequence(),
        };
        let added = AddedComment::new(&comment.id, &comment.content, &comment.owner)?;
        tracing::debug!(
            comment_id = %comment.id,
            thread_id = %comment.thread_id,
            "comment stored in memory"
        );
        self.store.comments.insert(comment.id.clone(), comment);
        Ok(added)
    }

    async fn verify_comment_exists(&self, comment_id: &str) -> Result<()> {
        if !self.store.comments.contains_key(comment_id) {
            return Err(DomainError::CommentNotFound);
        }
        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let comment = self
            .store
            .comments
            .get(comment_id)
            .ok_or(DomainError::CommentNotFound)?;

        if comment.is_delete {
            return Err(DomainError::CommentNotFound);
        }
        if comment.owner != owner {
            return Err(DomainError::NotCommentOwner);
        }
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let mut comment = self
            .store
            .comments
            .get_mut(comment_id)
            .ok_or(DomainError::CommentNotFound)?;
        if comment.is_delete {
            tracing::debug!(comment_id, "comment already soft-deleted");
        }
        comment.is_delete = true;
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>> {
        let mut rows: Vec<StoredComment> = self
            .store
            .comments
            .iter()
            .filter(|entry| entry.thread_id == thread_id)
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|comment| (comment.date, comment.sequence));

        Ok(rows
            .into_iter()
            .map(|comment| CommentRecord {
                username: Some(self.store.username_of(&comment.owner)),
                id: comment.id,
                date: comment.date,
                content: comment.content,
                is_delete: comment.is_delete,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryThreadRepository;
    use domains::{NewThread, ThreadRepository};
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Fixture {
        store: Arc<InMemoryForumStore>,
        comments: InMemoryCommentRepository,
        thread_id: String,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryForumStore::new());
        store.register_user("user-123", "dicoding");
        store.register_user("user-456", "johndoe");

        let threads = InMemoryThreadRepository::new(store.clone());
        let new_thread = NewThread::from_payload(&json!({ "title": "t", "body": "b" }))
            .unwrap()
            .attach_owner("user-123");
        let thread_id = threads.add_thread(new_thread).await.unwrap().id().to_owned();

        let counter = Arc::new(AtomicU32::new(1));
        let ids = move || format!("{}", counter.fetch_add(1, Ordering::Relaxed));
        let comments = InMemoryCommentRepository::with_id_generator(store.clone(), Arc::new(ids));

        Fixture {
            store,
            comments,
            thread_id,
        }
    }

    fn new_comment(content: &str, thread_id: &str, owner: &str) -> NewComment {
        NewComment::from_payload(&json!({ "content": content }))
            .unwrap()
            .attach(thread_id, owner)
    }

    #[tokio::test]
    async fn add_comment_returns_added_comment() {
        let fx = fixture().await;
        let added = fx
            .comments
            .add_comment(new_comment("sebuah comment", &fx.thread_id, "user-123"))
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedComment::new("comment-1", "sebuah comment", "user-123").unwrap()
        );
        assert_eq!(fx.store.comment_is_deleted("comment-1"), Some(false));
    }

    #[tokio::test]
    async fn add_comment_rejects_unknown_threads() {
        let fx = fixture().await;
        let err = fx
            .comments
            .add_comment(new_comment("x", "thread-404", "user-123"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ThreadNotFound));
    }

    #[tokio::test]
    async fn verify_comment_owner_distinguishes_failures() {
        let fx = fixture().await;
        fx.comments
            .add_comment(new_comment("x", &fx.thread_id, "user-123"))
            .await
            .unwrap();

        tokio_test::assert_ok!(fx.comments.verify_comment_owner("comment-1", "user-123").await);
        assert!(matches!(
            fx.comments.verify_comment_owner("comment-1", "user-456").await,
            Err(DomainError::NotCommentOwner)
        ));
        assert!(matches!(
            fx.comments.verify_comment_owner("comment-999", "user-123").await,
            Err(DomainError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn soft_deleted_comment_exists_but_fails_ownership_as_not_found() {
        let fx = fixture().await;
        fx.comments
            .add_comment(new_comment("x", &fx.thread_id, "user-123"))
            .await
            .unwrap();
        fx.comments.delete_comment("comment-1").await.unwrap();

        tokio_test::assert_ok!(fx.comments.verify_comment_exists("comment-1").await);
        assert!(matches!(
            fx.comments.verify_comment_owner("comment-1", "user-123").await,
            Err(DomainError::CommentNotFound)
        ));
        assert!(matches!(
            fx.comments.verify_comment_owner("comment-1", "user-456").await,
            Err(DomainError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_comment_is_idempotent_at_storage_level() {
        let fx = fixture().await;
        fx.comments
            .add_comment(new_comment("x", &fx.thread_id, "user-123"))
            .await
            .unwrap();

        tokio_test::assert_ok!(fx.comments.delete_comment("comment-1").await);
        tokio_test::assert_ok!(fx.comments.delete_comment("comment-1").await);
        assert_eq!(fx.store.comment_is_deleted("comment-1"), Some(true));

        assert!(matches!(
            fx.comments.delete_comment("comment-999").await,
            Err(DomainError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn comments_come_back_in_creation_order_with_usernames() {
        let fx = fixture().await;
        let inputs = [("first", "user-456"), ("second", "user-123"), ("third", "user-456")];
        for (content, owner) in inputs {
            fx.comments
                .add_comment(new_comment(content, &fx.thread_id, owner))
                .await
                .unwrap();
        }
        fx.comments.delete_comment("comment-2").await.unwrap();

        let rows = fx
            .comments
            .get_comments_by_thread_id(&fx.thread_id)
            .await
            .unwrap();

        let contents: Vec<_> = rows.iter().map(|row| row.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_eq!(rows[0].username.as_deref(), Some("johndoe"));
        assert_eq!(rows[1].username.as_deref(), Some("dicoding"));
        assert!(rows[1].is_delete);
        assert!(!rows[2].is_delete);

        assert!(fx
            .comments
            .get_comments_by_thread_id("thread-other")
            .await
            .unwrap()
            .is_empty());
    }
}
