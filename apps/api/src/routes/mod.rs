pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::opportunities::handlers as opportunities;
use crate::profiles::handlers as profiles;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Role catalog and taxonomy
        .route("/api/v1/roles", get(matching::handle_list_roles))
        .route("/api/v1/roles/search", get(matching::handle_search_roles))
        .route("/api/v1/roles/recommend", post(matching::handle_recommend_roles))
        .route("/api/v1/roles/:id", get(matching::handle_get_role))
        .route("/api/v1/skills/normalize", post(matching::handle_normalize_skills))
        .route(
            "/api/v1/skills/:skill/variations",
            get(matching::handle_skill_variations),
        )
        // Profiles
        .route("/api/v1/profiles", post(profiles::handle_create_profile))
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile)
                .put(profiles::handle_update_profile)
                .delete(profiles::handle_delete_profile),
        )
        // Roadmap
        .route(
            "/api/v1/profiles/:id/roadmap",
            get(roadmap::handle_get_roadmap).put(roadmap::handle_put_roadmap),
        )
        .route(
            "/api/v1/profiles/:id/roadmap/milestones/:milestone_id",
            patch(roadmap::handle_update_milestone),
        )
        .route("/api/v1/profiles/:id/readiness", get(roadmap::handle_readiness))
        // Matching and opportunities
        .route(
            "/api/v1/profiles/:id/matches",
            get(matching::handle_get_matches).post(matching::handle_compute_matches),
        )
        .route(
            "/api/v1/profiles/:id/opportunities",
            get(opportunities::handle_list_opportunities),
        )
        .with_state(state)
}
