use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::role_matcher::{match_role, MatchResult};
use crate::matching::roles::get_role;
use crate::models::roadmap::{MilestoneStatus, Roadmap};
use crate::roadmap::progress::{completed_skills, next_steps, readiness_score, NextStep};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MilestoneUpdateRequest {
    pub phase_id: String,
    pub status: MilestoneStatus,
}

#[derive(Deserialize)]
pub struct ReadinessQuery {
    /// Role id to report a match against, e.g. `data-analyst`.
    pub target_role: Option<String>,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub readiness_score: u32,
    pub completed_skills: Vec<String>,
    pub next_steps: Vec<NextStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role_match: Option<MatchResult>,
}

/// GET /api/v1/profiles/:id/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Roadmap>, AppError> {
    state
        .store
        .get_roadmap(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap for profile {id}")))
}

/// PUT /api/v1/profiles/:id/roadmap
pub async fn handle_put_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(roadmap): Json<Roadmap>,
) -> Result<Json<Roadmap>, AppError> {
    state.store.set_roadmap(id, roadmap.clone()).await?;
    Ok(Json(roadmap))
}

/// PATCH /api/v1/profiles/:id/roadmap/milestones/:milestone_id
pub async fn handle_update_milestone(
    State(state): State<AppState>,
    Path((id, milestone_id)): Path<(Uuid, String)>,
    Json(req): Json<MilestoneUpdateRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let roadmap = state
        .store
        .update_milestone_status(id, &req.phase_id, &milestone_id, req.status)
        .await?;
    Ok(Json(roadmap))
}

/// GET /api/v1/profiles/:id/readiness?target_role=
pub async fn handle_readiness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ReadinessQuery>,
) -> Result<Json<ReadinessResponse>, AppError> {
    let record = state.store.get_profile(id).await?;
    let roadmap = state.store.get_roadmap(id).await?;

    let target_role_match = match params.target_role.as_deref() {
        Some(role_id) => {
            let role =
                get_role(role_id).ok_or_else(|| AppError::NotFound(format!("Role {role_id}")))?;
            Some(match_role(&record.profile, role))
        }
        None => None,
    };

    Ok(Json(ReadinessResponse {
        readiness_score: readiness_score(&record.profile, roadmap.as_ref()),
        completed_skills: completed_skills(roadmap.as_ref()),
        next_steps: next_steps(roadmap.as_ref()),
        target_role_match,
    }))
}
