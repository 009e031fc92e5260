//! Axum route handler for the team roster.

use axum::Json;
use serde::Serialize;

use crate::team::roster::{render_cards, TeamCard};

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub members: Vec<TeamCard>,
}

/// GET /api/v1/team
///
/// Serves the fixed roster as presentational cards. Read-only; independent
/// of the generation pipeline.
pub async fn handle_team() -> Json<TeamResponse> {
    Json(TeamResponse {
        members: render_cards(),
    })
}
