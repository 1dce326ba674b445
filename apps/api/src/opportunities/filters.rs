use serde::{Deserialize, Serialize};

use crate::models::profile::{UserProfile, UserType};
use crate::models::roadmap::Roadmap;
use crate::opportunities::fit_scoring::{FitResult, FitScorer};
use crate::opportunities::models::Opportunity;

const BASE_RELEVANCE: u32 = 50;
const TYPE_RELEVANCE_BONUS: u32 = 30;
const LEVEL_RELEVANCE_BONUS: u32 = 20;
const SPONSOR_RELEVANCE_BONUS: u32 = 10;

const FIT_WEIGHT: f64 = 0.7;
const RELEVANCE_WEIGHT: f64 = 0.3;

/// Which listing categories and levels suit a user type.
pub struct OpportunityPreferences {
    pub preferred_types: &'static [&'static str],
    pub experience_levels: &'static [&'static str],
    pub exclude_types: &'static [&'static str],
}

impl UserType {
    pub fn opportunity_preferences(self) -> OpportunityPreferences {
        match self {
            UserType::Student => OpportunityPreferences {
                preferred_types: &[
                    "internship",
                    "co-op",
                    "fellowship",
                    "new-grad",
                    "entry-level",
                    "student-program",
                ],
                experience_levels: &["entry", "junior", "intern"],
                exclude_types: &["senior", "staff", "principal", "executive"],
            },
            UserType::Professional => OpportunityPreferences {
                preferred_types: &[
                    "mid-level",
                    "senior",
                    "staff",
                    "career-transition",
                    "reskilling-program",
                    "professional-development",
                ],
                experience_levels: &["mid", "senior", "staff", "principal"],
                exclude_types: &["intern", "new-grad"],
            },
            UserType::Other => OpportunityPreferences {
                preferred_types: &["entry-level", "mid-level", "freelance", "contract"],
                experience_levels: &["entry", "junior", "mid"],
                exclude_types: &[],
            },
        }
    }
}

/// Optional exact-match filters from the opportunities query string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OpportunityFilters {
    pub role_type: Option<String>,
    pub sponsor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedOpportunity {
    pub opportunity: Opportunity,
    pub fit: FitResult,
    /// `fit.score × 0.7 + relevance × 0.3`, relevance defaulting to 50.
    pub combined_score: f64,
}

fn type_contains(opportunity: &Opportunity, needle: &str) -> bool {
    opportunity
        .opportunity_type
        .as_deref()
        .is_some_and(|t| t.to_lowercase().contains(needle))
}

fn relevance(opportunity: &Opportunity, user_type: UserType, prefs: &OpportunityPreferences) -> u32 {
    let level = opportunity.level.to_lowercase();
    let mut score = BASE_RELEVANCE;

    if prefs.preferred_types.iter().any(|t| type_contains(opportunity, t)) {
        score += TYPE_RELEVANCE_BONUS;
    }
    if prefs.experience_levels.iter().any(|l| level.contains(l)) {
        score += LEVEL_RELEVANCE_BONUS;
    }
    if opportunity.sponsor_tag.is_some() && user_type == UserType::Student {
        score += SPONSOR_RELEVANCE_BONUS;
    }
    score.min(100)
}

/// Keeps the opportunities suited to `user_type`, assigns each a relevance score
/// and sorts by it, highest first.
pub fn filter_by_user_type(opportunities: &[Opportunity], user_type: UserType) -> Vec<Opportunity> {
    let prefs = user_type.opportunity_preferences();

    let mut kept: Vec<Opportunity> = opportunities
        .iter()
        .filter(|opp| !prefs.exclude_types.iter().any(|t| type_contains(opp, t)))
        .filter(|opp| {
            let level = opp.level.to_lowercase();
            let matches_type = prefs.preferred_types.iter().any(|t| {
                type_contains(opp, t) || opp.tags.iter().any(|tag| tag.to_lowercase().contains(t))
            });
            let matches_level = prefs.experience_levels.iter().any(|l| level.contains(l));
            matches_type || matches_level
        })
        .map(|opp| Opportunity {
            relevance_score: Some(relevance(opp, user_type, &prefs)),
            ..opp.clone()
        })
        .collect();

    kept.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    kept
}

/// Exact role-type and sponsor filters; an absent filter matches everything.
pub fn filter_opportunities(
    opportunities: &[Opportunity],
    filters: &OpportunityFilters,
) -> Vec<Opportunity> {
    opportunities
        .iter()
        .filter(|opp| {
            filters
                .role_type
                .as_deref()
                .map_or(true, |role_type| opp.role_type == role_type)
        })
        .filter(|opp| {
            filters
                .sponsor
                .as_deref()
                .map_or(true, |sponsor| opp.sponsor_tag.as_deref() == Some(sponsor))
        })
        .cloned()
        .collect()
}

/// Scores every opportunity with `scorer` and orders them by combined score.
pub async fn rank_opportunities(
    scorer: &dyn FitScorer,
    profile: &UserProfile,
    roadmap: Option<&Roadmap>,
    opportunities: Vec<Opportunity>,
) -> Vec<RankedOpportunity> {
    let mut ranked = Vec::with_capacity(opportunities.len());
    for opportunity in opportunities {
        let fit = scorer.score(profile, roadmap, &opportunity).await;
        let relevance = opportunity.relevance_score.unwrap_or(BASE_RELEVANCE);
        let combined_score = fit.score as f64 * FIT_WEIGHT + relevance as f64 * RELEVANCE_WEIGHT;
        ranked.push(RankedOpportunity {
            opportunity,
            fit,
            combined_score,
        });
    }

    ranked.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    ranked
}
