//! In-memory stores backing the use-case and handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::Pool;

use crate::App;

use super::comment::AddedComment;
use super::models::{CommentRow, NewComment, NewLike, NewReply, NewThread, ReplyRow, ThreadRow};
use super::reply::AddedReply;
use super::store::{CommentStore, LikeStore, ReplyStore, StoreError, ThreadStore};
use super::thread::AddedThread;

/// One instance implements all four store traits over plain vectors, with
/// the same not-found/forbidden semantics as the Postgres stores. Seeded
/// rows get strictly increasing timestamps so ordering is deterministic.
#[derive(Default)]
pub struct InMemoryForum {
    threads: Mutex<Vec<ThreadRow>>,
    comments: Mutex<Vec<CommentRow>>,
    replies: Mutex<Vec<ReplyRow>>,
    likes: Mutex<Vec<NewLike>>,
    clock: Mutex<i64>,
}

impl InMemoryForum {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_timestamp(&self) -> NaiveDateTime {
        let mut clock = self.clock.lock().unwrap();
        *clock += 1;
        chrono::DateTime::from_timestamp(1_652_900_000 + *clock, 0)
            .expect("valid timestamp")
            .naive_utc()
    }

    pub fn seed_thread(&self, id: &str, owner: &str) {
        self.threads.lock().unwrap().push(ThreadRow {
            id: id.into(),
            title: "this is new thread".into(),
            body: "welcome to new thread".into(),
            owner: owner.into(),
            created_at: self.next_timestamp(),
        });
    }

    pub fn seed_comment(&self, id: &str, thread_id: &str, username: &str, content: &str) {
        self.comments.lock().unwrap().push(CommentRow {
            id: id.into(),
            thread_id: thread_id.into(),
            creator_username: username.into(),
            comment: content.into(),
            created_at: self.next_timestamp(),
            is_delete: false,
        });
    }

    pub fn seed_reply(
        &self,
        id: &str,
        thread_id: &str,
        comment_id: &str,
        username: &str,
        content: &str,
    ) {
        self.replies.lock().unwrap().push(ReplyRow {
            id: id.into(),
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
            creator_username: username.into(),
            comment: content.into(),
            created_at: self.next_timestamp(),
            is_delete: false,
        });
    }

    pub fn seed_like(&self, comment_id: &str, owner: &str) {
        self.likes.lock().unwrap().push(NewLike {
            id: crate::id::generate("like"),
            comment_id: comment_id.into(),
            owner: owner.into(),
        });
    }

    pub fn thread_row(&self, id: &str) -> Option<ThreadRow> {
        self.threads.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    pub fn comment_row(&self, id: &str) -> Option<CommentRow> {
        self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    pub fn reply_row(&self, id: &str) -> Option<ReplyRow> {
        self.replies.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn like_count(&self, comment_id: &str) -> usize {
        self.likes
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.comment_id == comment_id)
            .count()
    }
}

#[async_trait]
impl ThreadStore for InMemoryForum {
    async fn insert(&self, thread: NewThread) -> Result<AddedThread, StoreError> {
        let added = AddedThread {
            id: thread.id.clone(),
            title: thread.title.clone(),
            owner: thread.owner.clone(),
        };
        self.threads.lock().unwrap().push(ThreadRow {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            owner: thread.owner,
            created_at: self.next_timestamp(),
        });
        Ok(added)
    }

    async fn exists(&self, thread_id: &str) -> Result<(), StoreError> {
        self.thread_row(thread_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("thread not found"))
    }

    async fn get_by_id(&self, thread_id: &str) -> Result<ThreadRow, StoreError> {
        self.thread_row(thread_id)
            .ok_or_else(|| StoreError::not_found("thread not found"))
    }
}

#[async_trait]
impl CommentStore for InMemoryForum {
    async fn insert(&self, comment: NewComment) -> Result<AddedComment, StoreError> {
        let added = AddedComment {
            id: comment.id.clone(),
            content: comment.comment.clone(),
            owner: comment.creator_username.clone(),
        };
        self.comments.lock().unwrap().push(CommentRow {
            id: comment.id,
            thread_id: comment.thread_id,
            creator_username: comment.creator_username,
            comment: comment.comment,
            created_at: self.next_timestamp(),
            is_delete: false,
        });
        Ok(added)
    }

    async fn verify_access(&self, comment_id: &str, owner: &str) -> Result<(), StoreError> {
        let comment = self
            .comment_row(comment_id)
            .ok_or_else(|| StoreError::not_found("comment not found"))?;
        if comment.creator_username != owner {
            return Err(StoreError::forbidden("you are not the owner of this comment"));
        }
        Ok(())
    }

    async fn flag_deleted(&self, comment_id: &str) -> Result<(), StoreError> {
        let mut comments = self.comments.lock().unwrap();
        if let Some(comment) = comments.iter_mut().find(|c| c.id == comment_id) {
            comment.is_delete = true;
        }
        Ok(())
    }

    async fn exists(&self, comment_id: &str) -> Result<(), StoreError> {
        self.comment_row(comment_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("comment not found"))
    }

    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<CommentRow>, StoreError> {
        let mut rows: Vec<_> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.created_at);
        Ok(rows)
    }
}

#[async_trait]
impl ReplyStore for InMemoryForum {
    async fn insert(&self, reply: NewReply) -> Result<AddedReply, StoreError> {
        let added = AddedReply {
            id: reply.id.clone(),
            content: reply.comment.clone(),
            owner: reply.creator_username.clone(),
        };
        self.replies.lock().unwrap().push(ReplyRow {
            id: reply.id,
            thread_id: reply.thread_id,
            comment_id: reply.comment_id,
            creator_username: reply.creator_username,
            comment: reply.comment,
            created_at: self.next_timestamp(),
            is_delete: false,
        });
        Ok(added)
    }

    async fn verify_access(&self, reply_id: &str, owner: &str) -> Result<(), StoreError> {
        let reply = self
            .reply_row(reply_id)
            .ok_or_else(|| StoreError::not_found("reply not found"))?;
        if reply.creator_username != owner {
            return Err(StoreError::forbidden("you are not the owner of this reply"));
        }
        Ok(())
    }

    async fn flag_deleted(&self, reply_id: &str) -> Result<(), StoreError> {
        let mut replies = self.replies.lock().unwrap();
        if let Some(reply) = replies.iter_mut().find(|r| r.id == reply_id) {
            reply.is_delete = true;
        }
        Ok(())
    }

    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<ReplyRow>, StoreError> {
        let mut rows: Vec<_> = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.thread_id == thread_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        Ok(rows)
    }
}

#[async_trait]
impl LikeStore for InMemoryForum {
    async fn counts_by_thread(
        &self,
        thread_id: &str,
    ) -> Result<HashMap<String, i64>, StoreError> {
        let comment_ids: Vec<String> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .map(|c| c.id.clone())
            .collect();

        let mut counts = HashMap::new();
        for like in self.likes.lock().unwrap().iter() {
            if comment_ids.contains(&like.comment_id) {
                *counts.entry(like.comment_id.clone()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn is_liked(&self, comment_id: &str, owner: &str) -> Result<bool, StoreError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.comment_id == comment_id && l.owner == owner))
    }

    async fn insert(&self, like: NewLike) -> Result<(), StoreError> {
        self.likes.lock().unwrap().push(like);
        Ok(())
    }

    async fn remove(&self, comment_id: &str, owner: &str) -> Result<(), StoreError> {
        self.likes
            .lock()
            .unwrap()
            .retain(|l| !(l.comment_id == comment_id && l.owner == owner));
        Ok(())
    }
}

/// An [`App`] wired to in-memory stores. The pool is lazy and never
/// connects; only the auth extractor would touch it, and handler tests
/// construct [`crate::auth::AuthUser`] directly.
pub fn test_app(forum: Arc<InMemoryForum>) -> App {
    let manager =
        AsyncDieselConnectionManager::<AsyncPgConnection>::new("postgres://localhost/unused");
    let pool = Pool::builder(manager)
        .max_size(1)
        .build()
        .expect("lazy pool");

    App::with_stores(pool, forum.clone(), forum.clone(), forum.clone(), forum)
}
