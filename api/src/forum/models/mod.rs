mod comment;
mod like;
mod reply;
mod thread;

pub use comment::{CommentRow, NewComment};
pub use like::NewLike;
pub use reply::{NewReply, ReplyRow};
pub use thread::{NewThread, ThreadRow};
