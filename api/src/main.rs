use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::Pool;
use dotenv::dotenv;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod auth;
mod config;
mod error;
mod forum;
mod id;
mod json;
mod schema;

use config::{Env, ServerConfig};
use forum::details::GetThreadDetails;
use forum::postgres::{PgCommentStore, PgLikeStore, PgReplyStore, PgThreadStore};
use forum::store::{CommentStore, LikeStore, ReplyStore, ThreadStore};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub type DbPool = Pool<AsyncPgConnection>;

/// Shared handler state. The stores are trait objects so request handlers
/// never see the database layer directly.
#[derive(Clone)]
pub struct App {
    pub pool: DbPool,
    pub threads: Arc<dyn ThreadStore>,
    pub comments: Arc<dyn CommentStore>,
    pub replies: Arc<dyn ReplyStore>,
    pub likes: Arc<dyn LikeStore>,
    pub thread_details: GetThreadDetails,
}

impl App {
    fn new(pool: DbPool) -> Self {
        Self::with_stores(
            pool.clone(),
            Arc::new(PgThreadStore::new(pool.clone())),
            Arc::new(PgCommentStore::new(pool.clone())),
            Arc::new(PgReplyStore::new(pool.clone())),
            Arc::new(PgLikeStore::new(pool)),
        )
    }

    pub(crate) fn with_stores(
        pool: DbPool,
        threads: Arc<dyn ThreadStore>,
        comments: Arc<dyn CommentStore>,
        replies: Arc<dyn ReplyStore>,
        likes: Arc<dyn LikeStore>,
    ) -> Self {
        let thread_details = GetThreadDetails::new(
            threads.clone(),
            comments.clone(),
            replies.clone(),
            likes.clone(),
        );

        Self {
            pool,
            threads,
            comments,
            replies,
            likes,
            thread_details,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = ServerConfig::new_from_env();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match config.env {
        Env::Production | Env::Staging => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        Env::Dev => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
    let pool = Pool::builder(manager)
        .max_size(10)
        .wait_timeout(Some(Duration::from_secs(10)))
        .runtime(deadpool_runtime::Runtime::Tokio1)
        .build()
        .expect("couldn't build the connection pool");

    let app = Router::new()
        .merge(forum::routes::route())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(App::new(pool));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("couldn't bind the listen address");

    tracing::info!("listening on {addr}");
    axum::serve(listener, app)
        .await
        .expect("server exited with an error");
}
