//! HTTP surface for a single resource collection.
//!
//! Every resource gets the same four routes:
//!
//! | Method | Path                 | Success |
//! |--------|----------------------|---------|
//! | GET    | `/{collection}`      | 200     |
//! | POST   | `/{collection}`      | [`Resource::CREATED`] |
//! | PUT    | `/{collection}/{id}` | 200     |
//! | DELETE | `/{collection}/{id}` | 204     |
//!
//! A known path with an unknown verb answers 405, an unknown path 404.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::storage::{MemoryTaskStore, Repository, SqliteNoteStore};

/// A [`Repository`] exposed over HTTP.
pub trait Resource: Repository {
    /// Collection path segment, e.g. `notes`.
    const COLLECTION: &'static str;
    /// Singular name used in error messages.
    const LABEL: &'static str;
    /// Status returned by a successful create.
    const CREATED: StatusCode;
}

impl Resource for SqliteNoteStore {
    const COLLECTION: &'static str = "notes";
    const LABEL: &'static str = "note";
    const CREATED: StatusCode = StatusCode::OK;
}

impl Resource for MemoryTaskStore {
    const COLLECTION: &'static str = "tasks";
    const LABEL: &'static str = "task";
    const CREATED: StatusCode = StatusCode::CREATED;
}

/// Build the router for one resource backed by `repo`.
pub fn router<R: Resource>(repo: Arc<R>) -> Router {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);

    Router::new()
        .route(
            &collection,
            get(handlers::list::<R>).post(handlers::create::<R>),
        )
        .route(
            &item,
            put(handlers::update::<R>).delete(handlers::delete::<R>),
        )
        .with_state(repo)
        .layer(TraceLayer::new_for_http())
}

/// Bind to `config.bind` and serve `app` until Ctrl-C.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
