mod add_comment;
mod add_thread;
mod delete_comment;
mod get_thread_detail;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::{DeleteCommentCommand, DeleteCommentUseCase};
pub use get_thread_detail::GetThreadDetailUseCase;
