//! Axum route handlers for the session resource.

use axum::{extract::State, Json};
use tracing::error;

use crate::errors::{AppError, GENERATION_FAILED_MSG};
use crate::models::profile::{validate, ProfileDraft};
use crate::pathway::generator::generate_pathway;
use crate::session::SessionSnapshot;
use crate::state::AppState;

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// POST /api/v1/session/submit
///
/// Validates the draft, moves the session to Pending, awaits the provider,
/// and lands in Ready or Failed. A failed validation never reaches `begin`,
/// so the session stays Idle and the provider is never contacted. The
/// session lock is not held across the provider await; re-entrant
/// submissions are rejected by `begin` itself.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let profile = validate(&draft)?;
    let ticket = state.session.begin(profile.clone()).await?;

    let result = match generate_pathway(state.provider.as_ref(), &profile).await {
        Ok(pathway) => Ok(pathway),
        Err(err) => {
            // Cause to the log; one generic message to the session.
            error!("Pathway generation failed: {err}");
            Err(GENERATION_FAILED_MSG.to_string())
        }
    };
    state.session.complete(ticket, result).await;

    Ok(Json(state.session.snapshot().await))
}

/// POST /api/v1/session/reset
///
/// Clears profile, pathway, and error together and returns to Idle.
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    state.session.reset().await;
    Json(state.session.snapshot().await)
}
