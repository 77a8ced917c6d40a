//! Axum route handlers for stateless pathway generation.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::pathway::LearningPathwayData;
use crate::models::profile::{validate, ProfileDraft};
use crate::pathway::generator::generate_pathway;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratePathwayResponse {
    pub pathway: LearningPathwayData,
}

/// POST /api/v1/pathways/generate
///
/// One-shot pipeline for clients that manage their own state:
/// validate → build request → provider call → decode. Does not touch the
/// session resource.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<GeneratePathwayResponse>, AppError> {
    let profile = validate(&draft)?;
    let pathway = generate_pathway(state.provider.as_ref(), &profile).await?;
    Ok(Json(GeneratePathwayResponse { pathway }))
}
