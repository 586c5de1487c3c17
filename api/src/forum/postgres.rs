//! Diesel-backed implementations of the forum store traits.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::DbPool;
use crate::schema::{comment_likes, comment_replies, thread_comments, threads};

use super::comment::AddedComment;
use super::models::{CommentRow, NewComment, NewLike, NewReply, NewThread, ReplyRow, ThreadRow};
use super::reply::AddedReply;
use super::store::{CommentStore, LikeStore, ReplyStore, StoreError, ThreadStore};
use super::thread::AddedThread;

#[derive(Clone)]
pub struct PgThreadStore {
    pool: DbPool,
}

impl PgThreadStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadStore for PgThreadStore {
    async fn insert(&self, thread: NewThread) -> Result<AddedThread, StoreError> {
        let mut conn = self.pool.get().await?;

        let (id, title, owner) = diesel::insert_into(threads::table)
            .values(&thread)
            .returning((threads::id, threads::title, threads::owner))
            .get_result::<(String, String, String)>(&mut conn)
            .await?;

        Ok(AddedThread { id, title, owner })
    }

    async fn exists(&self, thread_id: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        threads::table
            .filter(threads::id.eq(thread_id))
            .select(threads::id)
            .first::<String>(&mut conn)
            .await
            .optional()?
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("thread not found"))
    }

    async fn get_by_id(&self, thread_id: &str) -> Result<ThreadRow, StoreError> {
        let mut conn = self.pool.get().await?;

        threads::table
            .filter(threads::id.eq(thread_id))
            .select(ThreadRow::as_select())
            .first(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| StoreError::not_found("thread not found"))
    }
}

#[derive(Clone)]
pub struct PgCommentStore {
    pool: DbPool,
}

impl PgCommentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn insert(&self, comment: NewComment) -> Result<AddedComment, StoreError> {
        let mut conn = self.pool.get().await?;

        let (id, content, owner) = diesel::insert_into(thread_comments::table)
            .values(&comment)
            .returning((
                thread_comments::id,
                thread_comments::comment,
                thread_comments::creator_username,
            ))
            .get_result::<(String, String, String)>(&mut conn)
            .await?;

        Ok(AddedComment { id, content, owner })
    }

    async fn verify_access(&self, comment_id: &str, owner: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        let creator = thread_comments::table
            .filter(thread_comments::id.eq(comment_id))
            .select(thread_comments::creator_username)
            .first::<String>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| StoreError::not_found("comment not found"))?;

        if creator != owner {
            return Err(StoreError::forbidden("you are not the owner of this comment"));
        }

        Ok(())
    }

    async fn flag_deleted(&self, comment_id: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        diesel::update(thread_comments::table.filter(thread_comments::id.eq(comment_id)))
            .set(thread_comments::is_delete.eq(true))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn exists(&self, comment_id: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        thread_comments::table
            .filter(thread_comments::id.eq(comment_id))
            .select(thread_comments::id)
            .first::<String>(&mut conn)
            .await
            .optional()?
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("comment not found"))
    }

    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<CommentRow>, StoreError> {
        let mut conn = self.pool.get().await?;

        let rows = thread_comments::table
            .filter(thread_comments::thread_id.eq(thread_id))
            .select(CommentRow::as_select())
            .order(thread_comments::created_at.asc())
            .load(&mut conn)
            .await?;

        Ok(rows)
    }
}

#[derive(Clone)]
pub struct PgReplyStore {
    pool: DbPool,
}

impl PgReplyStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyStore for PgReplyStore {
    async fn insert(&self, reply: NewReply) -> Result<AddedReply, StoreError> {
        let mut conn = self.pool.get().await?;

        let (id, content, owner) = diesel::insert_into(comment_replies::table)
            .values(&reply)
            .returning((
                comment_replies::id,
                comment_replies::comment,
                comment_replies::creator_username,
            ))
            .get_result::<(String, String, String)>(&mut conn)
            .await?;

        Ok(AddedReply { id, content, owner })
    }

    async fn verify_access(&self, reply_id: &str, owner: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        let creator = comment_replies::table
            .filter(comment_replies::id.eq(reply_id))
            .select(comment_replies::creator_username)
            .first::<String>(&mut conn)
            .await
            .optional()?
            .ok_or_else(|| StoreError::not_found("reply not found"))?;

        if creator != owner {
            return Err(StoreError::forbidden("you are not the owner of this reply"));
        }

        Ok(())
    }

    async fn flag_deleted(&self, reply_id: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        diesel::update(comment_replies::table.filter(comment_replies::id.eq(reply_id)))
            .set(comment_replies::is_delete.eq(true))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<ReplyRow>, StoreError> {
        let mut conn = self.pool.get().await?;

        let rows = comment_replies::table
            .filter(comment_replies::thread_id.eq(thread_id))
            .select(ReplyRow::as_select())
            .order(comment_replies::created_at.asc())
            .load(&mut conn)
            .await?;

        Ok(rows)
    }
}

#[derive(Clone)]
pub struct PgLikeStore {
    pool: DbPool,
}

impl PgLikeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeStore for PgLikeStore {
    async fn counts_by_thread(
        &self,
        thread_id: &str,
    ) -> Result<HashMap<String, i64>, StoreError> {
        let mut conn = self.pool.get().await?;

        let counts = comment_likes::table
            .inner_join(thread_comments::table)
            .filter(thread_comments::thread_id.eq(thread_id))
            .group_by(comment_likes::comment_id)
            .select((comment_likes::comment_id, diesel::dsl::count_star()))
            .load::<(String, i64)>(&mut conn)
            .await?;

        Ok(counts.into_iter().collect())
    }

    async fn is_liked(&self, comment_id: &str, owner: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await?;

        let row = comment_likes::table
            .filter(comment_likes::comment_id.eq(comment_id))
            .filter(comment_likes::owner.eq(owner))
            .select(comment_likes::id)
            .first::<String>(&mut conn)
            .await
            .optional()?;

        Ok(row.is_some())
    }

    async fn insert(&self, like: NewLike) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(comment_likes::table)
            .values(&like)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn remove(&self, comment_id: &str, owner: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        diesel::delete(
            comment_likes::table
                .filter(comment_likes::comment_id.eq(comment_id))
                .filter(comment_likes::owner.eq(owner)),
        )
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}
