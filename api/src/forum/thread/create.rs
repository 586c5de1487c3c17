use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde_json::Value;

use crate::{App, auth::AuthUser, error::AppError, forum::models::NewThread, id};

use super::{AddThread, AddedThread};

#[debug_handler]
pub async fn create_thread(
    State(ctx): State<App>,
    AuthUser(username): AuthUser,
    crate::json::Json(payload): crate::json::Json<Value>,
) -> Result<(StatusCode, Json<AddedThread>), AppError> {
    let thread = AddThread::parse(&payload)?;

    let added = ctx
        .threads
        .insert(NewThread {
            id: id::generate("thread"),
            title: thread.title,
            body: thread.body,
            owner: username,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(added)))
}
