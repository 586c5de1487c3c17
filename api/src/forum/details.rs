//! Thread-detail aggregation.
//!
//! Joins a thread, its comments, all replies for the thread and per-comment
//! like counts into one nested view. Soft-deleted content is masked by the
//! view entities at render time; the stored text is never touched.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{AppError, ValidationError};

use super::models::{CommentRow, ReplyRow, ThreadRow};
use super::store::{CommentStore, LikeStore, ReplyStore, ThreadStore};

pub const DELETED_COMMENT_PLACEHOLDER: &str = "**comment deleted**";
pub const DELETED_REPLY_PLACEHOLDER: &str = "**reply deleted**";

/// Read-only projection of a reply. The soft-delete flag is carried through
/// unmodified and applied by [`ReplyDetails::content`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyDetails {
    id: String,
    username: String,
    date: NaiveDateTime,
    content: String,
    is_delete: bool,
}

impl ReplyDetails {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Rendered content: the fixed placeholder when the reply was soft
    /// deleted, the stored text otherwise.
    pub fn content(&self) -> &str {
        if self.is_delete {
            DELETED_REPLY_PLACEHOLDER
        } else {
            &self.content
        }
    }
}

impl From<ReplyRow> for ReplyDetails {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: row.id,
            username: row.creator_username,
            date: row.created_at,
            content: row.comment,
            is_delete: row.is_delete,
        }
    }
}

impl Serialize for ReplyDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ReplyDetails", 4)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("content", self.content())?;
        s.end()
    }
}

/// Read-only projection of a comment with its like count and replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDetails {
    id: String,
    username: String,
    date: NaiveDateTime,
    content: String,
    is_delete: bool,
    like_count: i64,
    replies: Vec<ReplyDetails>,
}

impl CommentDetails {
    pub fn new(row: CommentRow, like_count: i64, replies: Vec<ReplyDetails>) -> Self {
        Self {
            id: row.id,
            username: row.creator_username,
            date: row.created_at,
            content: row.comment,
            is_delete: row.is_delete,
            like_count,
            replies,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Rendered content, masked for soft-deleted comments.
    pub fn content(&self) -> &str {
        if self.is_delete {
            DELETED_COMMENT_PLACEHOLDER
        } else {
            &self.content
        }
    }

    pub fn like_count(&self) -> i64 {
        self.like_count
    }

    pub fn replies(&self) -> &[ReplyDetails] {
        &self.replies
    }
}

impl Serialize for CommentDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CommentDetails", 6)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("content", self.content())?;
        s.serialize_field("likeCount", &self.like_count)?;
        s.serialize_field("replies", &self.replies)?;
        s.end()
    }
}

/// The assembled thread view returned by `GET /threads/{thread_id}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ThreadDetails {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDateTime,
    pub username: String,
    pub comments: Vec<CommentDetails>,
}

impl ThreadDetails {
    fn new(thread: ThreadRow, comments: Vec<CommentDetails>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: thread.owner,
            comments,
        }
    }
}

/// Read-side composition over four independent fetches. Stores are injected
/// at construction so callers and tests choose the implementations.
#[derive(Clone)]
pub struct GetThreadDetails {
    threads: Arc<dyn ThreadStore>,
    comments: Arc<dyn CommentStore>,
    replies: Arc<dyn ReplyStore>,
    likes: Arc<dyn LikeStore>,
}

impl GetThreadDetails {
    pub fn new(
        threads: Arc<dyn ThreadStore>,
        comments: Arc<dyn CommentStore>,
        replies: Arc<dyn ReplyStore>,
        likes: Arc<dyn LikeStore>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
            likes,
        }
    }

    /// Pure read composition: no side effects, no retries, and every store
    /// failure propagates unmodified.
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetails, AppError> {
        if thread_id.trim().is_empty() {
            return Err(ValidationError::missing("threadId").into());
        }

        let thread = self.threads.get_by_id(thread_id).await?;

        // The collection fetches are independent reads: none mutates state
        // or depends on another's result, so they can run concurrently.
        let (comments, replies, like_counts) = tokio::try_join!(
            self.comments.list_by_thread(thread_id),
            self.replies.list_by_thread(thread_id),
            self.likes.counts_by_thread(thread_id),
        )?;

        // Bucket replies by parent comment once instead of re-filtering the
        // full reply list per comment. Relative order inside each bucket
        // stays ascending because the source list is.
        let mut replies_by_comment: HashMap<String, Vec<ReplyDetails>> = HashMap::new();
        for reply in replies {
            replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(ReplyDetails::from(reply));
        }

        let comments = comments
            .into_iter()
            .map(|comment| {
                let like_count = like_counts.get(&comment.id).copied().unwrap_or(0);
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                CommentDetails::new(comment, like_count, replies)
            })
            .collect();

        Ok(ThreadDetails::new(thread, comments))
    }
}
