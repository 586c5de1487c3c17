use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{App, auth::AuthUser, error::AppError};

#[debug_handler]
pub async fn delete_comment(
    State(ctx): State<App>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(username): AuthUser,
) -> Result<StatusCode, AppError> {
    ctx.threads.exists(&thread_id).await?;
    ctx.comments.verify_access(&comment_id, &username).await?;
    ctx.comments.flag_deleted(&comment_id).await?;

    Ok(StatusCode::OK)
}
