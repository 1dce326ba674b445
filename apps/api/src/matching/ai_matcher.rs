//! AI-assisted role matching with per-role deterministic fallback.
//!
//! One completion is issued per catalog role, concurrently. Each attempt is an
//! explicit `Result`; a failed attempt (transport error, timeout, malformed or
//! out-of-range response) is replaced by that role's algorithmic match, so one
//! bad role never sinks the batch. Without credentials the whole batch is
//! answered algorithmically.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, CompletionService, LlmError};
use crate::matching::prompts::build_role_match_prompt;
use crate::matching::role_matcher::{
    match_role, sort_by_score, MatchLevel, MatchResult, MatchSource,
};
use crate::matching::roles::RoleProfile;
use crate::matching::taxonomy::normalize_many;
use crate::models::profile::UserProfile;

#[derive(Debug, Error)]
pub enum AiMatchError {
    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),

    #[error("completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("score {0} outside 0-100")]
    ScoreOutOfRange(f64),
}

#[derive(Debug, Clone)]
pub struct AiMatchSettings {
    /// Upper bound on a single role's completion.
    pub request_timeout: Duration,
    /// Whether the prompt asks the model to score generously.
    pub generous: bool,
    /// How many results `match_all` returns.
    pub limit: usize,
}

impl Default for AiMatchSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            generous: true,
            limit: 3,
        }
    }
}

/// The JSON shape the model is asked to return. Everything except `score`
/// is optional; the model's own `matchLevel` is never trusted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiMatchPayload {
    score: f64,
    #[serde(default)]
    matched_skills: Option<Vec<String>>,
    #[serde(default)]
    gap_skills: Option<Vec<String>>,
    #[serde(default)]
    bonus_skills: Option<Vec<String>>,
    #[serde(default)]
    recommendation: Option<String>,
}

/// Validates a raw completion into a [`MatchResult`] for `role`.
pub fn parse_ai_match(role: &RoleProfile, raw: &str) -> Result<MatchResult, AiMatchError> {
    let payload: AiMatchPayload = serde_json::from_str(strip_json_fences(raw))?;

    if !payload.score.is_finite() || !(0.0..=100.0).contains(&payload.score) {
        return Err(AiMatchError::ScoreOutOfRange(payload.score));
    }
    let score = payload.score.round() as u32;

    let recommendation = payload
        .recommendation
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| format!("Based on your profile, {} could be a good fit.", role.name));

    Ok(MatchResult {
        role_id: role.id.to_string(),
        role_name: role.name.to_string(),
        score,
        matched_skills: normalize_many(payload.matched_skills.unwrap_or_default()),
        gap_skills: normalize_many(payload.gap_skills.unwrap_or_default()),
        bonus_skills: normalize_many(payload.bonus_skills.unwrap_or_default()),
        match_level: MatchLevel::from_score(score),
        recommendation,
        source: MatchSource::Ai,
    })
}

/// One role's AI attempt, before fallback is applied.
pub struct RoleAttempt {
    pub role: &'static RoleProfile,
    pub outcome: Result<MatchResult, AiMatchError>,
}

impl RoleAttempt {
    /// The AI result, or the algorithmic match when the attempt failed.
    pub fn resolve(self, profile: &UserProfile) -> MatchResult {
        match self.outcome {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    role_id = self.role.id,
                    error = %e,
                    "AI role match failed, using algorithmic fallback"
                );
                match_role(profile, self.role)
            }
        }
    }
}

pub struct AiRoleMatcher {
    completion: Arc<dyn CompletionService>,
    catalog: &'static [RoleProfile],
    settings: AiMatchSettings,
}

impl AiRoleMatcher {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        catalog: &'static [RoleProfile],
        settings: AiMatchSettings,
    ) -> Self {
        Self {
            completion,
            catalog,
            settings,
        }
    }

    pub fn is_available(&self) -> bool {
        self.completion.is_configured()
    }

    /// Top results across the catalog, AI-scored where possible, best first.
    pub async fn match_all(&self, profile: &UserProfile) -> Vec<MatchResult> {
        self.match_top(profile, self.settings.limit).await
    }

    /// The best `limit` results across the whole catalog.
    pub async fn match_top(&self, profile: &UserProfile, limit: usize) -> Vec<MatchResult> {
        let roles: Vec<&'static RoleProfile> = self.catalog.iter().collect();
        self.match_roles(profile, &roles, limit).await
    }

    /// The best `limit` results among `roles` only. Without credentials every
    /// role is matched algorithmically.
    pub async fn match_roles(
        &self,
        profile: &UserProfile,
        roles: &[&'static RoleProfile],
        limit: usize,
    ) -> Vec<MatchResult> {
        let mut results = if self.is_available() {
            self.match_each(profile, roles).await
        } else {
            info!("Completion service not configured, using algorithmic role matching");
            roles.iter().map(|role| match_role(profile, role)).collect()
        };
        sort_by_score(&mut results);
        results.truncate(limit);

        info!(
            top = ?results.iter().map(|r| (r.role_id.as_str(), r.score)).collect::<Vec<_>>(),
            "Role matching complete"
        );
        results
    }

    /// One resolved result per role, in the order given.
    pub async fn match_each(
        &self,
        profile: &UserProfile,
        roles: &[&'static RoleProfile],
    ) -> Vec<MatchResult> {
        self.attempt_roles(profile, roles)
            .await
            .into_iter()
            .map(|attempt| attempt.resolve(profile))
            .collect()
    }

    /// Issues each role's completion concurrently and waits for all of them.
    pub async fn attempt_roles(
        &self,
        profile: &UserProfile,
        roles: &[&'static RoleProfile],
    ) -> Vec<RoleAttempt> {
        let futures = roles.iter().map(|&role| async move {
            RoleAttempt {
                role,
                outcome: self.attempt(profile, role).await,
            }
        });
        join_all(futures).await
    }

    async fn attempt(
        &self,
        profile: &UserProfile,
        role: &RoleProfile,
    ) -> Result<MatchResult, AiMatchError> {
        let prompt = build_role_match_prompt(profile, role, self.settings.generous);
        let timeout = self.settings.request_timeout;

        let raw = tokio::time::timeout(timeout, self.completion.complete(&prompt))
            .await
            .map_err(|_| AiMatchError::Timeout(timeout))??;

        parse_ai_match(role, &raw)
    }
}
