use axum::{
    Json, debug_handler,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{App, auth::AuthUser, error::AppError, forum::models::NewReply, id};

use super::{AddReply, AddedReply};

#[debug_handler]
pub async fn create_reply(
    State(ctx): State<App>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(username): AuthUser,
    crate::json::Json(payload): crate::json::Json<Value>,
) -> Result<(StatusCode, Json<AddedReply>), AppError> {
    let reply = AddReply::parse(&payload)?;

    ctx.threads.exists(&thread_id).await?;
    ctx.comments.exists(&comment_id).await?;

    let added = ctx
        .replies
        .insert(NewReply {
            id: id::generate("reply"),
            thread_id,
            comment_id,
            creator_username: username,
            comment: reply.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(added)))
}
