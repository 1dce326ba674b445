//! Profile store: the explicit state container for per-user data.
//!
//! Holds the profile, its roadmap and the last computed role matches. Handlers
//! receive it through `AppState` as `Arc<dyn ProfileStore>`; matching code never
//! touches it and takes plain values instead.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::matching::role_matcher::MatchResult;
use crate::models::profile::UserProfile;
use crate::models::roadmap::{MilestoneStatus, Roadmap};

pub mod memory;
pub mod redis_store;

pub use memory::InMemoryProfileStore;
pub use redis_store::RedisProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn new(profile: UserProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, profile: UserProfile) -> Result<ProfileRecord, StoreError>;

    async fn get_profile(&self, id: Uuid) -> Result<ProfileRecord, StoreError>;

    async fn update_profile(
        &self,
        id: Uuid,
        profile: UserProfile,
    ) -> Result<ProfileRecord, StoreError>;

    async fn get_roadmap(&self, id: Uuid) -> Result<Option<Roadmap>, StoreError>;

    async fn set_roadmap(&self, id: Uuid, roadmap: Roadmap) -> Result<(), StoreError>;

    async fn get_role_matches(&self, id: Uuid) -> Result<Vec<MatchResult>, StoreError>;

    async fn set_role_matches(&self, id: Uuid, matches: Vec<MatchResult>) -> Result<(), StoreError>;

    /// Deletes the profile and everything attached to it.
    async fn reset(&self, id: Uuid) -> Result<(), StoreError>;

    async fn update_milestone_status(
        &self,
        id: Uuid,
        phase_id: &str,
        milestone_id: &str,
        status: MilestoneStatus,
    ) -> Result<Roadmap, StoreError> {
        let mut roadmap = self
            .get_roadmap(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Roadmap for profile {id}")))?;

        if !roadmap.set_milestone_status(phase_id, milestone_id, status) {
            return Err(StoreError::NotFound(format!(
                "Milestone {milestone_id} in phase {phase_id}"
            )));
        }

        self.set_roadmap(id, roadmap.clone()).await?;
        Ok(roadmap)
    }
}
