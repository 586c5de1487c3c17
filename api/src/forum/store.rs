//! Capability traits the forum use cases call into.
//!
//! Each trait is the full contract a store must provide; leaving a method
//! out is a compile error rather than a runtime throw. Postgres
//! implementations live in [`super::postgres`] and the tests run against
//! in-memory ones.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel_async::pooled_connection::deadpool::PoolError;

use super::comment::AddedComment;
use super::models::{CommentRow, NewComment, NewLike, NewReply, NewThread, ReplyRow, ThreadRow};
use super::reply::AddedReply;
use super::thread::AddedThread;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl StoreError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

#[async_trait]
pub trait ThreadStore: Send + Sync {
    async fn insert(&self, thread: NewThread) -> Result<AddedThread, StoreError>;

    /// Fails with [`StoreError::NotFound`] when the thread does not exist.
    async fn exists(&self, thread_id: &str) -> Result<(), StoreError>;

    async fn get_by_id(&self, thread_id: &str) -> Result<ThreadRow, StoreError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert(&self, comment: NewComment) -> Result<AddedComment, StoreError>;

    /// NotFound when the comment is missing, Forbidden when `owner` is not
    /// its creator.
    async fn verify_access(&self, comment_id: &str, owner: &str) -> Result<(), StoreError>;

    /// Soft delete: flips `is_delete`, never removes the row.
    async fn flag_deleted(&self, comment_id: &str) -> Result<(), StoreError>;

    async fn exists(&self, comment_id: &str) -> Result<(), StoreError>;

    /// All comments of a thread in ascending creation order.
    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<CommentRow>, StoreError>;
}

#[async_trait]
pub trait ReplyStore: Send + Sync {
    async fn insert(&self, reply: NewReply) -> Result<AddedReply, StoreError>;

    async fn verify_access(&self, reply_id: &str, owner: &str) -> Result<(), StoreError>;

    async fn flag_deleted(&self, reply_id: &str) -> Result<(), StoreError>;

    /// All replies of a thread in ascending creation order. One query per
    /// thread; callers fan them out to their parent comments.
    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<ReplyRow>, StoreError>;
}

#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Like counts for the thread's comments, keyed by comment id.
    /// Comments without likes have no entry.
    async fn counts_by_thread(&self, thread_id: &str)
    -> Result<HashMap<String, i64>, StoreError>;

    async fn is_liked(&self, comment_id: &str, owner: &str) -> Result<bool, StoreError>;

    async fn insert(&self, like: NewLike) -> Result<(), StoreError>;

    async fn remove(&self, comment_id: &str, owner: &str) -> Result<(), StoreError>;
}
