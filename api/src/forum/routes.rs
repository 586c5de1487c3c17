use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::App;

use super::{comment, reply, thread};

pub fn route() -> Router<App> {
    Router::<App>::new()
        .route("/threads", post(thread::create::create_thread))
        .route("/threads/{thread_id}", get(thread::get::get_thread_details))
        .route(
            "/threads/{thread_id}/comments",
            post(comment::create::create_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comment::delete::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(reply::create::create_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(reply::delete::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(comment::like::toggle_like),
        )
}
