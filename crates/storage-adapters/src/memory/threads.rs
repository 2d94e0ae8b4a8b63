use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedThread, DomainError, NewThread, Result, ThreadRecord, ThreadRepository};

use super::{InMemoryForumStore, StoredThread};
use crate::id::{IdGenerator, UuidIdGenerator};

pub struct InMemoryThreadRepository {
    store: Arc<InMemoryForumStore>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryThreadRepository {
    pub fn new(store: Arc<InMemoryForumStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(store: Arc<InMemoryForumStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn add_thread(&self, new_thread: NewThread) -> Result<AddedThread> {
        let thread = StoredThread {
            id: format!("thread-{}", self.ids.next_id()),
            title: new_thread.title().to_owned(),
            body: new_thread.body().to_owned(),
            owner: new_thread.owner()?.to_owned(),
            date: Utc::now(),
        };
        let added = AddedThread::new(&thread.id, &thread.title, &thread.owner)?;
        tracing::debug!(thread_id = %thread.id, owner = %thread.owner, "thread stored in memory");
        self.store.threads.insert(thread.id.clone(), thread);
        Ok(added)
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<()> {
        if !self.store.threads.contains_key(thread_id) {
            return Err(DomainError::ThreadNotFound);
        }
        Ok(())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRecord> {
        let thread = self
            .store
            .threads
            .get(thread_id)
            .map(|entry| entry.value().clone())
            .ok_or(DomainError::ThreadNotFound)?;

        Ok(ThreadRecord {
            username: Some(self.store.username_of(&thread.owner)),
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
        })
    }
}
