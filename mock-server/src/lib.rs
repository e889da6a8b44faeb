//! In-memory stand-in for the content backend.
//!
//! Serves articles, AI news, categories and tags under the same paths and
//! `{code, message, data}` envelope the real API uses. State lives for the
//! lifetime of the router.

pub mod envelope;
pub mod handlers;
pub mod models;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use envelope::Envelope;
pub use models::{Category, ContentItem, Page, Tag};
use handlers::{category, content, tag};
use store::{ContentKind, Store};

/// Fresh router over an empty store.
pub fn app() -> Router {
    let db = Store::shared();
    Router::new()
        .merge(content::routes("/articles", ContentKind::Article, db.clone()))
        .merge(content::routes("/ai-news", ContentKind::AiNews, db.clone()))
        .merge(category::routes(db.clone()))
        .merge(tag::routes(db))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
