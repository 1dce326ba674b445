use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::taxonomy::normalize_many;
use crate::models::profile::UserProfile;
use crate::store::ProfileRecord;
use crate::state::AppState;

/// Canonicalizes resume skills on the way in so matching sees taxonomy keys.
fn prepare(mut profile: UserProfile) -> UserProfile {
    if let Some(resume) = profile.resume.as_mut() {
        resume.normalized_skills = normalize_many(&resume.normalized_skills)
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect();
    }
    profile
}

/// POST /api/v1/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<(StatusCode, Json<ProfileRecord>), AppError> {
    let record = state.store.create_profile(prepare(profile)).await?;
    tracing::info!(profile = %record.id, "Profile created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileRecord>, AppError> {
    Ok(Json(state.store.get_profile(id).await?))
}

/// PUT /api/v1/profiles/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<ProfileRecord>, AppError> {
    Ok(Json(state.store.update_profile(id, prepare(profile)).await?))
}

/// DELETE /api/v1/profiles/:id
/// Removes the profile together with its roadmap and stored matches.
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.reset(id).await?;
    tracing::info!(profile = %id, "Profile reset");
    Ok(StatusCode::NO_CONTENT)
}
