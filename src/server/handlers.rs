use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::Resource;
use crate::entity::Validate;
use crate::error::{CrudError, Result};

/// `GET /{collection}`
pub async fn list<R: Resource>(State(repo): State<Arc<R>>) -> Result<Json<Vec<R::Entity>>> {
    let entities = repo.list()?;
    debug!(resource = R::COLLECTION, count = entities.len(), "listed");
    Ok(Json(entities))
}

/// `POST /{collection}`
pub async fn create<R: Resource>(
    State(repo): State<Arc<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<R::Entity>)> {
    let draft: R::Draft = parse_body(&body)?;
    draft.validate()?;

    let entity = repo.create(draft)?;
    info!(resource = R::COLLECTION, "created");
    Ok((R::CREATED, Json(entity)))
}

/// `PUT /{collection}/{id}`
pub async fn update<R: Resource>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<R::Entity>> {
    let id = parse_id::<R>(&raw_id)?;
    let patch: R::Patch = parse_body(&body)?;
    patch.validate()?;

    let entity = repo.update(id, patch)?;
    info!(resource = R::COLLECTION, id, "updated");
    Ok(Json(entity))
}

/// `DELETE /{collection}/{id}`
pub async fn delete<R: Resource>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id::<R>(&raw_id)?;
    repo.delete(id)?;
    info!(resource = R::COLLECTION, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id<R: Resource>(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| CrudError::BadRequest(format!("Invalid {} ID", R::LABEL)))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "rejected request body");
        CrudError::BadRequest("Invalid JSON".to_string())
    })
}
