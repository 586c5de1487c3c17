use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{App, auth::AuthUser, error::AppError, forum::models::NewLike, id};

/// Toggle: a repeat like from the same user removes the earlier row, so
/// likes never accumulate even without a uniqueness constraint.
#[debug_handler]
pub async fn toggle_like(
    State(ctx): State<App>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    AuthUser(username): AuthUser,
) -> Result<StatusCode, AppError> {
    ctx.threads.exists(&thread_id).await?;
    ctx.comments.exists(&comment_id).await?;

    if ctx.likes.is_liked(&comment_id, &username).await? {
        ctx.likes.remove(&comment_id, &username).await?;
    } else {
        ctx.likes
            .insert(NewLike {
                id: id::generate("like"),
                comment_id,
                owner: username,
            })
            .await?;
    }

    Ok(StatusCode::OK)
}
