use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::matching::role_matcher::MatchResult;
use crate::models::profile::UserProfile;
use crate::models::roadmap::{MilestoneStatus, Roadmap};
use crate::store::{ProfileRecord, ProfileStore, StoreError};

struct Entry {
    record: ProfileRecord,
    roadmap: Option<Roadmap>,
    matches: Vec<MatchResult>,
}

/// Process-local store. Default when no `REDIS_URL` is configured.
#[derive(Default)]
pub struct InMemoryProfileStore {
    entries: RwLock<HashMap<Uuid, Entry>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: Uuid) -> StoreError {
    StoreError::NotFound(format!("Profile {id}"))
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create_profile(&self, profile: UserProfile) -> Result<ProfileRecord, StoreError> {
        let record = ProfileRecord::new(profile);
        self.entries.write().await.insert(
            record.id,
            Entry {
                record: record.clone(),
                roadmap: None,
                matches: vec![],
            },
        );
        Ok(record)
    }

    async fn get_profile(&self, id: Uuid) -> Result<ProfileRecord, StoreError> {
        self.entries
            .read()
            .await
            .get(&id)
            .map(|e| e.record.clone())
            .ok_or_else(|| not_found(id))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        profile: UserProfile,
    ) -> Result<ProfileRecord, StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.record.profile = profile;
        entry.record.updated_at = Utc::now();
        Ok(entry.record.clone())
    }

    async fn get_roadmap(&self, id: Uuid) -> Result<Option<Roadmap>, StoreError> {
        self.entries
            .read()
            .await
            .get(&id)
            .map(|e| e.roadmap.clone())
            .ok_or_else(|| not_found(id))
    }

    async fn set_roadmap(&self, id: Uuid, roadmap: Roadmap) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.roadmap = Some(roadmap);
        Ok(())
    }

    async fn get_role_matches(&self, id: Uuid) -> Result<Vec<MatchResult>, StoreError> {
        self.entries
            .read()
            .await
            .get(&id)
            .map(|e| e.matches.clone())
            .ok_or_else(|| not_found(id))
    }

    async fn set_role_matches(&self, id: Uuid, matches: Vec<MatchResult>) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.matches = matches;
        Ok(())
    }

    /// Read, change and write under one write lock so concurrent updates to
    /// different milestones of the same roadmap are all kept.
    async fn update_milestone_status(
        &self,
        id: Uuid,
        phase_id: &str,
        milestone_id: &str,
        status: MilestoneStatus,
    ) -> Result<Roadmap, StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        let roadmap = entry
            .roadmap
            .as_mut()
            .ok_or_else(|| StoreError::NotFound(format!("Roadmap for profile {id}")))?;

        if !roadmap.set_milestone_status(phase_id, milestone_id, status) {
            return Err(StoreError::NotFound(format!(
                "Milestone {milestone_id} in phase {phase_id}"
            )));
        }
        Ok(roadmap.clone())
    }

    async fn reset(&self, id: Uuid) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::matching::role_matcher::match_all;
    use crate::matching::roles::ROLE_CATALOG;
    use crate::models::roadmap::{Milestone, Phase};

    fn roadmap() -> Roadmap {
        Roadmap {
            phases: vec![Phase {
                id: "p1".into(),
                name: "Foundations".into(),
                milestones: vec![Milestone {
                    id: "m1".into(),
                    title: "SQL basics".into(),
                    status: MilestoneStatus::NotStarted,
                    skills: vec!["sql".into()],
                }],
            }],
        }
    }

    #[tokio::test]
    async fn test_create_get_update_profile() {
        let store = InMemoryProfileStore::new();
        let created = store
            .create_profile(UserProfile {
                name: "Kai".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let fetched = store.get_profile(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = store
            .update_profile(
                created.id,
                UserProfile {
                    name: "Kai".into(),
                    current_skills: vec!["rust".into()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.profile.current_skills, vec!["rust".to_string()]);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_unknown_profile_is_not_found() {
        let store = InMemoryProfileStore::new();
        let err = store.get_profile(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_role_matches_round_trip_and_reset() {
        let store = InMemoryProfileStore::new();
        let record = store.create_profile(UserProfile::default()).await.unwrap();
        assert!(store.get_role_matches(record.id).await.unwrap().is_empty());

        let matches = match_all(&record.profile, ROLE_CATALOG);
        store.set_role_matches(record.id, matches.clone()).await.unwrap();
        assert_eq!(store.get_role_matches(record.id).await.unwrap(), matches);

        store.reset(record.id).await.unwrap();
        assert!(store.get_role_matches(record.id).await.is_err());
    }

    #[tokio::test]
    async fn test_update_milestone_status() {
        let store = InMemoryProfileStore::new();
        let record = store.create_profile(UserProfile::default()).await.unwrap();

        let err = store
            .update_milestone_status(record.id, "p1", "m1", MilestoneStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        store.set_roadmap(record.id, roadmap()).await.unwrap();
        let updated = store
            .update_milestone_status(record.id, "p1", "m1", MilestoneStatus::Completed)
            .await
            .unwrap();
        assert_eq!(updated.phases[0].milestones[0].status, MilestoneStatus::Completed);

        let stored = store.get_roadmap(record.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);

        let err = store
            .update_milestone_status(record.id, "p1", "missing", MilestoneStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_milestone_updates_are_all_kept() {
        let store = Arc::new(InMemoryProfileStore::new());
        let record = store.create_profile(UserProfile::default()).await.unwrap();

        let milestones = (0..32)
            .map(|i| Milestone {
                id: format!("m{i}"),
                title: format!("Milestone {i}"),
                status: MilestoneStatus::NotStarted,
                skills: vec![],
            })
            .collect();
        let roadmap = Roadmap {
            phases: vec![Phase {
                id: "p1".into(),
                name: "Foundations".into(),
                milestones,
            }],
        };
        let id = record.id;
        store.set_roadmap(id, roadmap).await.unwrap();

        let updates = (0..32).map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .update_milestone_status(id, "p1", &format!("m{i}"), MilestoneStatus::Completed)
                    .await
            })
        });
        for joined in futures::future::join_all(updates).await {
            joined.unwrap().unwrap();
        }

        let stored = store.get_roadmap(id).await.unwrap().unwrap();
        assert!(stored.phases[0]
            .milestones
            .iter()
            .all(|m| m.status == MilestoneStatus::Completed));
    }
}
