//! State shared across all request handlers.

use std::sync::Arc;

use domains::{AccessTokenVerifier, CommentRepository, ThreadRepository};
use services::{AddCommentUseCase, AddThreadUseCase, DeleteCommentUseCase, GetThreadDetailUseCase};

#[derive(Clone)]
pub struct AppState {
    pub add_thread: Arc<AddThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
    pub get_thread_detail: Arc<GetThreadDetailUseCase>,
    pub access_tokens: Arc<dyn AccessTokenVerifier>,
}

impl AppState {
    /// Wires every use case onto the same pair of repositories.
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        access_tokens: Arc<dyn AccessTokenVerifier>,
    ) -> Self {
        Self {
            add_thread: Arc::new(AddThreadUseCase::new(threads.clone())),
            add_comment: Arc::new(AddCommentUseCase::new(threads.clone(), comments.clone())),
            delete_comment: Arc::new(DeleteCommentUseCase::new(threads.clone(), comments.clone())),
            get_thread_detail: Arc::new(GetThreadDetailUseCase::new(threads, comments)),
            access_tokens,
        }
    }
}
