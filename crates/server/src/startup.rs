use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use models::{Recipe, Source};
use service::db::MongoStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Stores backed by the configured MongoDB collections.
pub async fn connect_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let db = models::db::connect(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let recipes = MongoStore::<Recipe>::new(&db, &cfg.database.recipes_collection);
    let sources = MongoStore::<Source>::new(&db, &cfg.database.sources_collection);
    Ok(AppState::new(Arc::new(recipes), Arc::new(sources), cfg.request.timeout()))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `app` on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: connect to the document store, build the app and run the HTTP server.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = connect_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.bind_addr())))?;
    info!(%addr, timeout_secs = cfg.request.timeout_secs, "starting recipe keeper api");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await
}
