use axum::{
    Json, debug_handler,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{App, auth::AuthUser, error::AppError, forum::models::NewComment, id};

use super::{AddComment, AddedComment};

#[debug_handler]
pub async fn create_comment(
    State(ctx): State<App>,
    Path(thread_id): Path<String>,
    AuthUser(username): AuthUser,
    crate::json::Json(payload): crate::json::Json<Value>,
) -> Result<(StatusCode, Json<AddedComment>), AppError> {
    let comment = AddComment::parse(&payload)?;

    ctx.threads.exists(&thread_id).await?;

    let added = ctx
        .comments
        .insert(NewComment {
            id: id::generate("comment"),
            thread_id,
            creator_username: username,
            comment: comment.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(added)))
}
