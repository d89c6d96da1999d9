use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use models::Source;

use super::helpers::{created, decode_json, null_as_default};
use crate::{errors::ApiError, state::AppState};

/// Source as exchanged with clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceModel {
    pub id: String,
    pub title: String,
    /// One of `book`, `url`, `custom` (checked on creation only).
    #[serde(rename = "type")]
    pub source_type: String,
}

impl From<&Source> for SourceModel {
    fn from(source: &Source) -> Self {
        Self { id: source.id.to_hex(), title: source.title.clone(), source_type: source.source_type.clone() }
    }
}

/// Body of POST and PUT. Missing and `null` fields decode as empty values.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SourceInput {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub source_type: String,
}

#[utoipa::path(
    get, path = "/api/sources", tag = "sources",
    responses(
        (status = 200, description = "All sources", body = [SourceModel]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SourceModel>>, ApiError> {
    let deadline = state.deadline();
    let sources = state.sources.list_all(&deadline).await.map_err(ApiError::internal)?;
    Ok(Json(sources.iter().map(SourceModel::from).collect()))
}

#[utoipa::path(
    get, path = "/api/sources/{id}", tag = "sources",
    params(("id" = String, Path, description = "Source id (24 hex characters)")),
    responses(
        (status = 200, description = "The source", body = SourceModel),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<SourceModel>, ApiError> {
    let deadline = state.deadline();
    let source = state.sources.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    Ok(Json(SourceModel::from(&source)))
}

#[utoipa::path(
    post, path = "/api/sources", tag = "sources",
    request_body = SourceInput,
    responses(
        (status = 201, description = "Created; Location names the new source"),
        (status = 400, description = "Malformed body or unknown type"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let deadline = state.deadline();
    let input: SourceInput = decode_json(&body)?;
    let source = Source::draft(input.title, input.source_type);
    let stored = state.sources.add(&deadline, source).await.map_err(ApiError::from_create)?;
    info!(entity = "source", id = %stored.id, source_type = %stored.source_type, "created source");
    Ok(created(format!("/api/sources/{}", stored.id.to_hex())))
}

#[utoipa::path(
    put, path = "/api/sources/{id}", tag = "sources",
    params(("id" = String, Path, description = "Source id (24 hex characters)")),
    request_body = SourceInput,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let deadline = state.deadline();
    let mut source = state.sources.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    let input: SourceInput = decode_json(&body)?;
    source.title = input.title;
    source.source_type = input.source_type;
    state.sources.update(&deadline, &source).await.map_err(ApiError::from_update)?;
    info!(entity = "source", id = %source.id, "updated source");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/sources/{id}", tag = "sources",
    params(("id" = String, Path, description = "Source id (24 hex characters)")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Malformed or unknown id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let deadline = state.deadline();
    let source = state.sources.get_by_id(&deadline, &id).await.map_err(ApiError::from_lookup)?;
    state.sources.delete(&deadline, &source).await.map_err(ApiError::internal)?;
    info!(entity = "source", id = %source.id, "deleted source");
    Ok(StatusCode::NO_CONTENT)
}
