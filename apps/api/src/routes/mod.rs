pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::state::AppState;
use crate::team::handlers::handle_team;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation pipeline
        .route("/api/v1/generate", post(handle_generate))
        // Team roster
        .route("/api/v1/team", get(handle_team))
        .with_state(state)
}
