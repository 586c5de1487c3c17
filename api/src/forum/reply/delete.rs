use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{App, auth::AuthUser, error::AppError};

#[debug_handler]
pub async fn delete_reply(
    State(ctx): State<App>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    AuthUser(username): AuthUser,
) -> Result<StatusCode, AppError> {
    ctx.threads.exists(&thread_id).await?;
    ctx.comments.exists(&comment_id).await?;
    ctx.replies.verify_access(&reply_id, &username).await?;
    ctx.replies.flag_deleted(&reply_id).await?;

    Ok(StatusCode::OK)
}
