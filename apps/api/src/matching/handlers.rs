use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::role_matcher::{match_specific, top_n, MatchResult};
use crate::matching::roles::{
    find_roles_by_skill, get_role, list_roles, recommend_roles_by_interests, RoleProfile,
    ROLE_CATALOG,
};
use crate::matching::taxonomy::{normalize, normalize_many, variations, CanonicalSkill};
use crate::state::AppState;

const DEFAULT_MATCH_LIMIT: usize = 3;

#[derive(Deserialize)]
pub struct SkillQuery {
    pub skill: String,
}

#[derive(Deserialize)]
pub struct InterestsRequest {
    pub interests: Vec<String>,
}

#[derive(Serialize)]
pub struct RecommendedRolesResponse {
    pub role_ids: Vec<&'static str>,
    pub roles: Vec<&'static RoleProfile>,
}

#[derive(Deserialize)]
pub struct NormalizeRequest {
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct NormalizeResponse {
    pub skills: Vec<CanonicalSkill>,
}

#[derive(Serialize)]
pub struct VariationsResponse {
    pub skill: CanonicalSkill,
    pub variations: &'static [&'static str],
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchRequest {
    /// Restrict matching to these roles. Absent or empty means the whole catalog.
    #[serde(default)]
    pub role_ids: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub use_ai: bool,
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [RoleProfile]> {
    Json(list_roles())
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(Path(id): Path<String>) -> Result<Json<&'static RoleProfile>, AppError> {
    get_role(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Role {id}")))
}

/// GET /api/v1/roles/search?skill=
pub async fn handle_search_roles(
    Query(params): Query<SkillQuery>,
) -> Json<Vec<&'static RoleProfile>> {
    Json(find_roles_by_skill(&params.skill))
}

/// POST /api/v1/roles/recommend
pub async fn handle_recommend_roles(
    Json(req): Json<InterestsRequest>,
) -> Json<RecommendedRolesResponse> {
    let role_ids = recommend_roles_by_interests(&req.interests);
    let roles = role_ids.iter().filter_map(|id| get_role(id)).collect();
    Json(RecommendedRolesResponse { role_ids, roles })
}

/// POST /api/v1/skills/normalize
pub async fn handle_normalize_skills(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        skills: normalize_many(&req.skills),
    })
}

/// GET /api/v1/skills/:skill/variations
/// Known spellings of a skill; empty when it is not in the taxonomy.
pub async fn handle_skill_variations(Path(skill): Path<String>) -> Json<VariationsResponse> {
    let skill = normalize(&skill);
    let known = variations(skill.as_str());
    Json(VariationsResponse {
        skill,
        variations: known,
    })
}

/// GET /api/v1/profiles/:id/matches
/// Returns the matches stored by the last POST.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    Ok(Json(state.store.get_role_matches(id).await?))
}

/// POST /api/v1/profiles/:id/matches
/// Computes role matches for the stored profile and saves them.
pub async fn handle_compute_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    if req.limit == Some(0) {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let record = state.store.get_profile(id).await?;
    let profile = &record.profile;

    let role_ids = req.role_ids.as_deref().unwrap_or_default();

    let mut matches = match (role_ids.is_empty(), req.use_ai) {
        (false, true) => {
            let roles: Vec<&'static RoleProfile> =
                role_ids.iter().filter_map(|id| get_role(id)).collect();
            let limit = req.limit.unwrap_or(roles.len());
            state.ai_matcher.match_roles(profile, &roles, limit).await
        }
        (false, false) => match_specific(profile, ROLE_CATALOG, role_ids),
        (true, true) => match req.limit {
            Some(limit) => state.ai_matcher.match_top(profile, limit).await,
            None => state.ai_matcher.match_all(profile).await,
        },
        (true, false) => top_n(profile, ROLE_CATALOG, req.limit.unwrap_or(DEFAULT_MATCH_LIMIT)),
    };
    if let Some(limit) = req.limit {
        matches.truncate(limit);
    }

    info!(profile = %id, count = matches.len(), use_ai = req.use_ai, "Role matches computed");
    state.store.set_role_matches(id, matches.clone()).await?;
    Ok(Json(matches))
}
