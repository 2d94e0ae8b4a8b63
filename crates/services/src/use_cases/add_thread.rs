use std::sync::Arc;

use domains::{AddedThread, NewThread, Result, ThreadRepository};
use serde_json::Value;

/// Creates a thread owned by the authenticated caller.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(name = "add_thread", skip(self, payload))]
    pub async fn execute(&self, payload: &Value, owner: &str) -> Result<AddedThread> {
        let new_thread = NewThread::from_payload(payload)?.attach_owner(owner);
        let added = self.thread_repository.add_thread(new_thread).await?;
        tracing::info!(thread_id = added.id(), "thread created");
        Ok(added)
    }
}
