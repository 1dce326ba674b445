use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserType;
use crate::opportunities::filters::{
    filter_by_user_type, filter_opportunities, rank_opportunities, OpportunityFilters,
    RankedOpportunity,
};
use crate::state::AppState;

#[derive(Serialize)]
pub struct OpportunityListResponse {
    pub user_type: UserType,
    pub opportunities: Vec<RankedOpportunity>,
}

/// GET /api/v1/profiles/:id/opportunities?role_type=&sponsor=
/// Opportunities suited to the profile's user type, ranked by fit and relevance.
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<OpportunityFilters>,
) -> Result<Json<OpportunityListResponse>, AppError> {
    let record = state.store.get_profile(id).await?;
    let roadmap = state.store.get_roadmap(id).await?;
    let user_type = record.profile.user_type;

    let suited = filter_by_user_type(&state.opportunities, user_type);
    let filtered = filter_opportunities(&suited, &filters);
    let opportunities = rank_opportunities(
        state.fit_scorer.as_ref(),
        &record.profile,
        roadmap.as_ref(),
        filtered,
    )
    .await;

    Ok(Json(OpportunityListResponse {
        user_type,
        opportunities,
    }))
}
