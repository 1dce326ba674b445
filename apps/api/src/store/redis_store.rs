use async_trait::async_trait;
use chrono::Utc;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::matching::role_matcher::MatchResult;
use crate::models::profile::UserProfile;
use crate::models::roadmap::Roadmap;
use crate::store::{ProfileRecord, ProfileStore, StoreError};

const KEY_PREFIX: &str = "launchpad";

/// Redis-backed store. Each profile owns three JSON string keys:
/// `launchpad:{id}:profile`, `launchpad:{id}:roadmap`, `launchpad:{id}:matches`.
#[derive(Clone)]
pub struct RedisProfileStore {
    client: Client,
}

fn key(id: Uuid, part: &str) -> String {
    format!("{KEY_PREFIX}:{id}:{part}")
}

impl RedisProfileStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn conn(&self) -> Result<MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn.get(key).await?;
        Ok(raw.map(|s| serde_json::from_str(&s)).transpose()?)
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;
        let raw = serde_json::to_string(value)?;
        conn.set::<_, _, ()>(key, raw).await?;
        debug!(key, "wrote value to redis");
        Ok(())
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn().await?;
        let exists: bool = conn.exists(key(id, "profile")).await?;
        if exists {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("Profile {id}")))
        }
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn create_profile(&self, profile: UserProfile) -> Result<ProfileRecord, StoreError> {
        let record = ProfileRecord::new(profile);
        self.write(&key(record.id, "profile"), &record).await?;
        Ok(record)
    }

    async fn get_profile(&self, id: Uuid) -> Result<ProfileRecord, StoreError> {
        self.read(&key(id, "profile"))
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Profile {id}")))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        profile: UserProfile,
    ) -> Result<ProfileRecord, StoreError> {
        let mut record = self.get_profile(id).await?;
        record.profile = profile;
        record.updated_at = Utc::now();
        self.write(&key(id, "profile"), &record).await?;
        Ok(record)
    }

    async fn get_roadmap(&self, id: Uuid) -> Result<Option<Roadmap>, StoreError> {
        self.ensure_exists(id).await?;
        self.read(&key(id, "roadmap")).await
    }

    async fn set_roadmap(&self, id: Uuid, roadmap: Roadmap) -> Result<(), StoreError> {
        self.ensure_exists(id).await?;
        self.write(&key(id, "roadmap"), &roadmap).await
    }

    async fn get_role_matches(&self, id: Uuid) -> Result<Vec<MatchResult>, StoreError> {
        self.ensure_exists(id).await?;
        Ok(self.read(&key(id, "matches")).await?.unwrap_or_default())
    }

    async fn set_role_matches(&self, id: Uuid, matches: Vec<MatchResult>) -> Result<(), StoreError> {
        self.ensure_exists(id).await?;
        self.write(&key(id, "matches"), &matches).await
    }

    async fn reset(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_exists(id).await?;
        let mut conn = self.conn().await?;
        let keys = vec![key(id, "profile"), key(id, "roadmap"), key(id, "matches")];
        conn.del::<_, ()>(keys).await?;
        Ok(())
    }
}
