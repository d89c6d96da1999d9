pub mod helpers;
pub mod recipes;
pub mod sources;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = Health))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes under `/api`. List endpoints also answer with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route("/api/recipes/", get(recipes::list))
        .route(
            "/api/recipes/:id",
            get(recipes::get).put(recipes::update).delete(recipes::delete),
        )
        .route("/api/sources", get(sources::list).post(sources::create))
        .route("/api/sources/", get(sources::list))
        .route(
            "/api/sources/:id",
            get(sources::get).put(sources::update).delete(sources::delete),
        )
}

/// Build the full application router: health, OpenAPI document and the CRUD API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
