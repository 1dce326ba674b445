//! Fit Scoring: pluggable, trait-based scorer that measures a profile against one opportunity.
//!
//! Default: `RuleBasedFitScorer` (pure-Rust, deterministic). `AppState` holds an
//! `Arc<dyn FitScorer>` so the backend can be swapped without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::models::roadmap::Roadmap;
use crate::opportunities::models::Opportunity;
use crate::roadmap::progress::completed_skills;

const TARGET_ROLE_POINTS: u32 = 30;
const REQUIRED_SKILL_POINTS: f64 = 30.0;
const PREFERRED_SKILL_POINTS: f64 = 10.0;
const LEVEL_POINTS: u32 = 15;
const LOCATION_POINTS: u32 = 15;
const LOCATION_PARTIAL_POINTS: u32 = 7;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One named contribution to a fit score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitFactor {
    pub name: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FitFactor {
    fn new(name: &str, points: u32) -> Self {
        Self {
            name: name.to_string(),
            points,
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// `min(Σ factor points, 100)`
    pub score: u32,
    pub factors: Vec<FitFactor>,
    /// Matched required skills followed by matched preferred skills, lower-cased.
    pub matched_skills: Vec<String>,
    /// Unmatched required skills, lower-cased.
    pub missing_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Carried in `AppState` as `Arc<dyn FitScorer>`.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(
        &self,
        profile: &UserProfile,
        roadmap: Option<&Roadmap>,
        opportunity: &Opportunity,
    ) -> FitResult;
}

pub struct RuleBasedFitScorer;

#[async_trait]
impl FitScorer for RuleBasedFitScorer {
    async fn score(
        &self,
        profile: &UserProfile,
        roadmap: Option<&Roadmap>,
        opportunity: &Opportunity,
    ) -> FitResult {
        score_fit(profile, roadmap, opportunity)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core rule-based algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `profile` (plus skills earned on completed milestones) against `opportunity`.
///
/// Factors: target role 30, skills up to 40 (always present), intern level 15,
/// location 15 or partial 7.
pub fn score_fit(
    profile: &UserProfile,
    roadmap: Option<&Roadmap>,
    opportunity: &Opportunity,
) -> FitResult {
    let mut factors = Vec::new();

    if profile.target_roles.iter().any(|r| *r == opportunity.role_type) {
        factors.push(FitFactor::new("Target Role Match", TARGET_ROLE_POINTS));
    }

    let pool: Vec<String> = profile
        .current_skills
        .iter()
        .cloned()
        .chain(completed_skills(roadmap))
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let required = lowercase_all(&opportunity.required_skills);
    let preferred = lowercase_all(&opportunity.preferred_skills);
    let required_total = required.len();
    let preferred_total = preferred.len();

    let (matched_required, missing_required): (Vec<String>, Vec<String>) =
        required.into_iter().partition(|skill| pool_covers(&pool, skill));
    let matched_preferred: Vec<String> = preferred
        .iter()
        .filter(|skill| pool_covers(&pool, skill))
        .cloned()
        .collect();

    let required_points = if required_total == 0 {
        REQUIRED_SKILL_POINTS.round() as u32
    } else {
        (matched_required.len() as f64 / required_total as f64 * REQUIRED_SKILL_POINTS).round() as u32
    };
    let preferred_points = if preferred_total == 0 {
        0
    } else {
        (matched_preferred.len() as f64 / preferred_total as f64 * PREFERRED_SKILL_POINTS).round() as u32
    };

    factors.push(FitFactor {
        name: "Skills Match".to_string(),
        points: required_points + preferred_points,
        details: Some(format!(
            "{}/{} required, {}/{} preferred",
            matched_required.len(),
            required_total,
            matched_preferred.len(),
            preferred_total
        )),
    });

    if opportunity.level == "Intern" {
        factors.push(FitFactor::new("Level Appropriate", LEVEL_POINTS));
    }

    let location_match = opportunity.is_remote()
        || profile
            .region()
            .is_some_and(|region| opportunity.location_type.contains(region));
    if location_match {
        factors.push(FitFactor::new("Location Match", LOCATION_POINTS));
    } else {
        factors.push(FitFactor::new("Location Partial", LOCATION_PARTIAL_POINTS));
    }

    let score = factors.iter().map(|f| f.points).sum::<u32>().min(100);

    let mut matched_skills = matched_required;
    matched_skills.extend(matched_preferred);

    FitResult {
        score,
        factors,
        matched_skills,
        missing_skills: missing_required,
    }
}

/// Trimmed, lower-cased skills with blank entries dropped.
fn lowercase_all(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Either-direction substring match against any pool skill.
fn pool_covers(pool: &[String], skill: &str) -> bool {
    pool.iter()
        .any(|s| s.contains(skill) || skill.contains(s.as_str()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roadmap::{Milestone, MilestoneStatus, Phase};

    fn make_opportunity(required: &[&str], preferred: &[&str]) -> Opportunity {
        Opportunity {
            id: "opp-test".into(),
            title: "Data Analyst Intern".into(),
            company: "Acme".into(),
            role_type: "Data Analyst".into(),
            opportunity_type: Some("internship".into()),
            tags: vec![],
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            level: "Intern".into(),
            location_type: "Remote".into(),
            sponsor_tag: None,
            relevance_score: None,
            apply_url: "https://example.com/apply".into(),
        }
    }

    fn make_profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            current_skills: skills.iter().map(|s| s.to_string()).collect(),
            target_roles: vec!["Data Analyst".into()],
            location: "Minneapolis, MN".into(),
            ..Default::default()
        }
    }

    fn factor<'a>(result: &'a FitResult, name: &str) -> Option<&'a FitFactor> {
        result.factors.iter().find(|f| f.name == name)
    }

    #[test]
    fn test_remote_intern_target_role_scores_88() {
        let mut profile = make_profile(&["Java", "Git", "Data Structures", "SQL"]);
        profile.target_roles = vec!["Software Engineer".into()];
        let mut opp = make_opportunity(
            &["java", "git", "data structures", "algorithms"],
            &["sql", "spring"],
        );
        opp.role_type = "Software Engineer".into();

        let result = score_fit(&profile, None, &opp);
        assert_eq!(result.score, 88);
        assert_eq!(factor(&result, "Target Role Match").unwrap().points, 30);
        let skills = factor(&result, "Skills Match").unwrap();
        assert_eq!(skills.points, 28);
        assert_eq!(skills.details.as_deref(), Some("3/4 required, 1/2 preferred"));
        assert_eq!(factor(&result, "Level Appropriate").unwrap().points, 15);
        assert_eq!(factor(&result, "Location Match").unwrap().points, 15);
        assert_eq!(
            result.matched_skills,
            vec!["java".to_string(), "git".into(), "data structures".into(), "sql".into()]
        );
        assert_eq!(result.missing_skills, vec!["algorithms".to_string()]);
    }

    #[test]
    fn test_score_equals_capped_factor_sum() {
        let profile = make_profile(&["python", "sql", "excel", "tableau"]);
        let opp = make_opportunity(&["sql", "python", "excel"], &["tableau"]);

        let result = score_fit(&profile, None, &opp);
        let sum: u32 = result.factors.iter().map(|f| f.points).sum();
        assert_eq!(result.score, sum.min(100));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_required_grants_full_required_points() {
        let profile = make_profile(&[]);
        let opp = make_opportunity(&[], &[]);

        let result = score_fit(&profile, None, &opp);
        let skills = factor(&result, "Skills Match").unwrap();
        assert_eq!(skills.points, 30);
        assert_eq!(skills.details.as_deref(), Some("0/0 required, 0/0 preferred"));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_blank_opportunity_skills_are_ignored() {
        let profile = make_profile(&["excel"]);
        let opp = make_opportunity(&["", "rust"], &["   "]);

        let result = score_fit(&profile, None, &opp);
        let skills = factor(&result, "Skills Match").unwrap();
        assert_eq!(skills.points, 0);
        assert_eq!(skills.details.as_deref(), Some("0/1 required, 0/0 preferred"));
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["rust".to_string()]);

        let all_blank = make_opportunity(&["  "], &[]);
        let result = score_fit(&profile, None, &all_blank);
        let skills = factor(&result, "Skills Match").unwrap();
        assert_eq!(skills.points, 30);
        assert_eq!(skills.details.as_deref(), Some("0/0 required, 0/0 preferred"));
    }

    #[test]
    fn test_optional_factors_are_omitted() {
        let profile = UserProfile {
            location: "Austin".into(),
            ..Default::default()
        };
        let mut opp = make_opportunity(&["sql"], &[]);
        opp.level = "Mid".into();
        opp.location_type = "On-site - Chicago, IL".into();

        let result = score_fit(&profile, None, &opp);
        assert!(factor(&result, "Target Role Match").is_none());
        assert!(factor(&result, "Level Appropriate").is_none());
        assert!(factor(&result, "Location Match").is_none());
        assert_eq!(factor(&result, "Location Partial").unwrap().points, 7);
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_region_substring_matches_location() {
        let profile = make_profile(&[]);
        let mut opp = make_opportunity(&["sql"], &[]);
        opp.location_type = "Hybrid - St. Paul, MN".into();

        let result = score_fit(&profile, None, &opp);
        assert!(factor(&result, "Location Match").is_some());
    }

    #[test]
    fn test_substring_match_works_both_directions() {
        let profile = make_profile(&["machine learning engineering", "sql"]);
        let opp = make_opportunity(&["machine learning", "postgresql"], &[]);

        let result = score_fit(&profile, None, &opp);
        assert_eq!(result.matched_skills.len(), 2);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_completed_milestone_skills_count() {
        let profile = make_profile(&[]);
        let roadmap = Roadmap {
            phases: vec![Phase {
                id: "p1".into(),
                name: "Semester 1".into(),
                milestones: vec![
                    Milestone {
                        id: "m1".into(),
                        title: "SQL basics".into(),
                        status: MilestoneStatus::Completed,
                        skills: vec!["SQL".into()],
                    },
                    Milestone {
                        id: "m2".into(),
                        title: "Python".into(),
                        status: MilestoneStatus::InProgress,
                        skills: vec!["Python".into()],
                    },
                ],
            }],
        };
        let opp = make_opportunity(&["sql", "python"], &[]);

        let result = score_fit(&profile, Some(&roadmap), &opp);
        assert_eq!(result.matched_skills, vec!["sql".to_string()]);
        assert_eq!(result.missing_skills, vec!["python".to_string()]);
    }

    #[tokio::test]
    async fn test_rule_based_scorer_delegates_to_score_fit() {
        let profile = make_profile(&["SQL", "Excel"]);
        let opp = make_opportunity(&["sql", "python", "excel"], &["tableau"]);

        let via_trait = RuleBasedFitScorer.score(&profile, None, &opp).await;
        assert_eq!(via_trait, score_fit(&profile, None, &opp));
    }
}
