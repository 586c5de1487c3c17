use axum::{
    Json, debug_handler,
    extract::{Path, State},
};

use crate::{App, error::AppError, forum::details::ThreadDetails};

/// Public read of a thread with its comments, replies and like counts. All
/// assembly happens in [`crate::forum::details::GetThreadDetails`].
#[debug_handler]
pub async fn get_thread_details(
    State(ctx): State<App>,
    Path(thread_id): Path<String>,
) -> Result<Json<ThreadDetails>, AppError> {
    let details = ctx.thread_details.execute(&thread_id).await?;

    Ok(Json(details))
}
