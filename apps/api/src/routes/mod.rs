pub mod frontend;
pub mod health;

use std::sync::Arc;

use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::routes::frontend::{spa_fallback, FrontendBundle};
use crate::scouting::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let bundle = Arc::new(FrontendBundle::new(state.config.static_dir.clone()));
    let static_files =
        ServeDir::new(bundle.root()).fallback(spa_fallback.with_state(bundle.clone()));

    Router::new()
        .route("/ping", get(health::ping_handler))
        .route("/health", get(health::health_handler))
        // Scouting API
        .route("/summary", post(handlers::handle_summary))
        // Frontend bundle (everything else)
        .fallback_service(static_files)
        .with_state(state)
}
