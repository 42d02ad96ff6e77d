//! Axum route handlers for the Scouting API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::scouting::report::ScoutingReportPayload;
use crate::scouting::summary::generate_summary;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /summary
///
/// Classifies the report, asks the generator for a summary and returns it.
/// Body rejections (bad JSON, wrong content type) are reported as validation errors.
pub async fn handle_summary(
    State(state): State<AppState>,
    payload: Result<Json<ScoutingReportPayload>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let summary = generate_summary(payload, state.generator.as_ref()).await?;

    Ok(Json(SummaryResponse { summary }))
}
