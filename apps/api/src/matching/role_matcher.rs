//! Deterministic role matcher: scores a user profile against catalog roles.
//!
//! Algorithm (total, pure, no I/O):
//! 1. skill pool = current skills ∪ interests ∪ resume skills, normalized
//! 2. required score = matched / required × 80 (full 80 when the role lists none)
//! 3. bonus = min(20, round(matched / preferred × 20)), 0 when the role lists none
//! 4. experience adjustment = clamp((user tier − role tier) × 5, −10, +10)
//! 5. score = clamp(round(required + bonus + adjustment), 0, 100)
//! 6. tier is derived from score, never set independently

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::roles::RoleProfile;
use crate::matching::taxonomy::{normalize_many, CanonicalSkill};
use crate::models::profile::{ExperienceLevel, UserProfile};

const REQUIRED_WEIGHT: f64 = 80.0;
const PREFERRED_WEIGHT: f64 = 20.0;
const EXPERIENCE_STEP: i32 = 5;
const EXPERIENCE_CAP: i32 = 10;

/// Coarse bucket derived purely from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    NeedsDevelopment,
}

impl MatchLevel {
    /// Thresholds evaluated top-down: ≥80 excellent, ≥60 good, ≥40 fair.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            MatchLevel::Excellent
        } else if score >= 60 {
            MatchLevel::Good
        } else if score >= 40 {
            MatchLevel::Fair
        } else {
            MatchLevel::NeedsDevelopment
        }
    }
}

/// Which backend produced a [`MatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Algorithmic,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub role_id: String,
    pub role_name: String,
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<CanonicalSkill>,
    pub gap_skills: Vec<CanonicalSkill>,
    pub bonus_skills: Vec<CanonicalSkill>,
    pub match_level: MatchLevel,
    pub recommendation: String,
    pub source: MatchSource,
}

/// Scores one profile against one role.
pub fn match_role(profile: &UserProfile, role: &RoleProfile) -> MatchResult {
    let pool = normalize_many(profile.skill_pool());
    let required = normalize_many(role.required_skills);
    let preferred = normalize_many(role.preferred_skills);

    let (matched, gaps): (Vec<CanonicalSkill>, Vec<CanonicalSkill>) =
        required.into_iter().partition(|s| pool.contains(s));
    let bonus: Vec<CanonicalSkill> = preferred
        .iter()
        .filter(|s| pool.contains(s))
        .cloned()
        .collect();

    let required_score = required_score(matched.len(), matched.len() + gaps.len());
    let bonus_score = bonus_score(bonus.len(), preferred.len());
    let adjustment = experience_adjustment(profile.experience_tier(), role.min_experience_level);

    let score = clamp_score(required_score + bonus_score + adjustment as f64);
    let match_level = MatchLevel::from_score(score);
    let recommendation = build_recommendation(role.name, match_level, &gaps);

    debug!(
        role_id = role.id,
        score,
        required_score,
        bonus_score,
        adjustment,
        "computed role match"
    );

    MatchResult {
        role_id: role.id.to_string(),
        role_name: role.name.to_string(),
        score,
        matched_skills: matched,
        gap_skills: gaps,
        bonus_skills: bonus,
        match_level,
        recommendation,
        source: MatchSource::Algorithmic,
    }
}

/// Matches every catalog role, best first. Ties keep catalog order.
pub fn match_all(profile: &UserProfile, catalog: &[RoleProfile]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog.iter().map(|r| match_role(profile, r)).collect();
    sort_by_score(&mut results);
    results
}

pub fn top_n(profile: &UserProfile, catalog: &[RoleProfile], n: usize) -> Vec<MatchResult> {
    let mut results = match_all(profile, catalog);
    results.truncate(n);
    results
}

/// Matches only the named roles; unknown ids are skipped.
/// An empty id list means "no preference" and yields the top three.
pub fn match_specific(
    profile: &UserProfile,
    catalog: &[RoleProfile],
    role_ids: &[String],
) -> Vec<MatchResult> {
    if role_ids.is_empty() {
        return top_n(profile, catalog, 3);
    }

    let mut results: Vec<MatchResult> = role_ids
        .iter()
        .filter_map(|id| catalog.iter().find(|r| r.id == id.as_str()))
        .map(|role| match_role(profile, role))
        .collect();
    sort_by_score(&mut results);
    results
}

/// Stable descending sort by score.
pub(crate) fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

pub(crate) fn clamp_score(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u32
}

fn required_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return REQUIRED_WEIGHT;
    }
    matched as f64 / total as f64 * REQUIRED_WEIGHT
}

fn bonus_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64 * PREFERRED_WEIGHT)
        .round()
        .min(PREFERRED_WEIGHT)
}

fn experience_adjustment(user: ExperienceLevel, role_min: ExperienceLevel) -> i32 {
    let difference = user.ordinal() - role_min.ordinal();
    if difference >= 0 {
        (difference * EXPERIENCE_STEP).min(EXPERIENCE_CAP)
    } else {
        (difference * EXPERIENCE_STEP).max(-EXPERIENCE_CAP)
    }
}

fn join_skills(skills: &[CanonicalSkill], take: usize, separator: &str) -> String {
    skills
        .iter()
        .take(take)
        .map(CanonicalSkill::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Builds a human-readable recommendation from the tier and leading gaps.
pub(crate) fn build_recommendation(
    role_name: &str,
    level: MatchLevel,
    gaps: &[CanonicalSkill],
) -> String {
    match level {
        MatchLevel::Excellent => format!(
            "Excellent match! You have most skills needed for {role_name}. \
             Consider applying to {role_name} positions."
        ),
        MatchLevel::Good if gaps.is_empty() => format!(
            "Good fit for {role_name}. Deepen your preferred skills to strengthen your candidacy."
        ),
        MatchLevel::Good => format!(
            "Good fit for {role_name}. Focus on gaining {} to strengthen your candidacy.",
            join_skills(gaps, 2, " and ")
        ),
        MatchLevel::Fair if gaps.is_empty() => format!(
            "{role_name} is achievable with effort. Build depth through projects and courses."
        ),
        MatchLevel::Fair => format!(
            "{role_name} is achievable with effort. Build skills in {} through projects and courses.",
            join_skills(gaps, 3, ", ")
        ),
        MatchLevel::NeedsDevelopment if gaps.is_empty() => format!(
            "{role_name} is a longer-term goal. Start with foundational projects to build experience."
        ),
        MatchLevel::NeedsDevelopment => format!(
            "{role_name} is a longer-term goal. Start with foundational skills: {}.",
            join_skills(gaps, 3, ", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::roles::ROLE_CATALOG;
    use crate::matching::taxonomy::normalize;
    use crate::models::profile::ResumeExtract;

    fn make_role(
        id: &'static str,
        required: &'static [&'static str],
        preferred: &'static [&'static str],
        min_level: ExperienceLevel,
    ) -> RoleProfile {
        RoleProfile {
            id,
            name: "Test Role",
            summary: "",
            description: "",
            required_skills: required,
            preferred_skills: preferred,
            typical_tools: &[],
            typical_stack: "",
            responsibilities: &[],
            example_projects: &[],
            career_trajectory: "",
            min_experience_level: min_level,
            related_roles: &[],
        }
    }

    fn make_profile(skills: &[&str], level: &str) -> UserProfile {
        UserProfile {
            name: "Sam".to_string(),
            current_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_level: level.to_string(),
            ..Default::default()
        }
    }

    fn names(skills: &[CanonicalSkill]) -> Vec<&str> {
        skills.iter().map(CanonicalSkill::as_str).collect()
    }

    #[test]
    fn test_end_to_end_example_scores_fair() {
        let role = make_role(
            "example",
            &["programming", "git", "sql"],
            &["react"],
            ExperienceLevel::Beginner,
        );
        let profile = make_profile(&["javascript", "git", "sql"], "beginner");

        let result = match_role(&profile, &role);
        // 2/3 * 80 = 53.33 → 53; no bonus; no experience adjustment
        assert_eq!(result.score, 53);
        assert_eq!(result.match_level, MatchLevel::Fair);
        assert_eq!(names(&result.matched_skills), vec!["git", "sql"]);
        assert_eq!(names(&result.gap_skills), vec!["programming"]);
        assert!(result.bonus_skills.is_empty());
        assert!(result.recommendation.contains("Test Role"));
        assert!(result.recommendation.contains("programming"));
        assert_eq!(result.source, MatchSource::Algorithmic);
    }

    #[test]
    fn test_empty_required_skills_contributes_full_80() {
        let role = make_role("open", &[], &[], ExperienceLevel::Beginner);
        let result = match_role(&make_profile(&[], "beginner"), &role);
        assert_eq!(result.score, 80);
        assert_eq!(result.match_level, MatchLevel::Excellent);
        assert!(result.matched_skills.is_empty());
        assert!(result.gap_skills.is_empty());
    }

    #[test]
    fn test_empty_preferred_skills_gives_no_bonus() {
        let role = make_role("r", &["git"], &[], ExperienceLevel::Beginner);
        let result = match_role(&make_profile(&["git"], "beginner"), &role);
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_bonus_rounds_and_caps_at_20() {
        let role = make_role("r", &["git"], &["react", "vue", "svelte"], ExperienceLevel::Beginner);
        let result = match_role(&make_profile(&["git", "reactjs"], "beginner"), &role);
        // 80 + round(1/3 * 20) = 80 + 7
        assert_eq!(result.score, 87);
        assert_eq!(names(&result.bonus_skills), vec!["react"]);

        let all = match_role(&make_profile(&["git", "react", "vue", "svelte"], "beginner"), &role);
        assert_eq!(all.score, 100);
    }

    #[test]
    fn test_experience_adjustment_symmetric_and_capped() {
        use ExperienceLevel::*;
        assert_eq!(experience_adjustment(Beginner, Beginner), 0);
        assert_eq!(experience_adjustment(Intermediate, Beginner), 5);
        assert_eq!(experience_adjustment(Advanced, Beginner), 10);
        assert_eq!(experience_adjustment(Beginner, Intermediate), -5);
        assert_eq!(experience_adjustment(Beginner, Advanced), -10);
    }

    #[test]
    fn test_underqualified_profile_is_penalized() {
        let role = make_role("r", &["git", "sql"], &[], ExperienceLevel::Advanced);
        let result = match_role(&make_profile(&["git"], "No experience yet"), &role);
        // 40 - 10
        assert_eq!(result.score, 30);
        assert_eq!(result.match_level, MatchLevel::NeedsDevelopment);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let role = make_role("r", &["git"], &["sql"], ExperienceLevel::Beginner);
        let result = match_role(&make_profile(&["git", "sql"], "expert"), &role);
        // 80 + 20 + 10 clamps to 100
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_aliases_match_across_sources() {
        let role = make_role("r", &["JavaScript", "PostgreSQL"], &[], ExperienceLevel::Beginner);
        let mut profile = make_profile(&["JS"], "beginner");
        profile.resume = Some(ResumeExtract {
            normalized_skills: vec!["postgres".to_string()],
            ..Default::default()
        });
        let result = match_role(&profile, &role);
        assert_eq!(result.score, 80);
        assert!(result.gap_skills.is_empty());
    }

    #[test]
    fn test_interests_count_toward_pool() {
        let role = make_role("r", &["machine learning"], &[], ExperienceLevel::Beginner);
        let mut profile = make_profile(&[], "beginner");
        profile.interests = vec!["Machine Learning".to_string()];
        assert_eq!(match_role(&profile, &role).score, 80);
    }

    #[test]
    fn test_matched_and_gap_partition_required_set() {
        let profile = make_profile(&["python", "sql", "git", "html"], "intermediate");
        for role in ROLE_CATALOG {
            let result = match_role(&profile, role);
            let mut union: Vec<CanonicalSkill> = result
                .matched_skills
                .iter()
                .chain(result.gap_skills.iter())
                .cloned()
                .collect();
            union.sort();
            let mut required = normalize_many(role.required_skills);
            required.sort();
            assert_eq!(union, required, "partition broken for {}", role.id);
        }
    }

    #[test]
    fn test_match_is_deterministic_and_tier_consistent() {
        let profile = make_profile(&["react", "css", "html", "git"], "some experience");
        for role in ROLE_CATALOG {
            let a = match_role(&profile, role);
            let b = match_role(&profile, role);
            assert_eq!(a, b);
            assert!(a.score <= 100);
            assert_eq!(a.match_level, MatchLevel::from_score(a.score));
        }
    }

    #[test]
    fn test_match_all_sorted_with_stable_ties() {
        let profile = make_profile(&[], "beginner");
        let results = match_all(&profile, ROLE_CATALOG);
        assert_eq!(results.len(), ROLE_CATALOG.len());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));

        // Equal scores keep catalog order.
        let position = |id: &str| ROLE_CATALOG.iter().position(|r| r.id == id).unwrap();
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(position(&pair[0].role_id) < position(&pair[1].role_id));
            }
        }
    }

    #[test]
    fn test_top_n_is_prefix_of_match_all() {
        let profile = make_profile(&["python", "statistics", "sql"], "intermediate");
        let all = match_all(&profile, ROLE_CATALOG);
        let top = top_n(&profile, ROLE_CATALOG, 3);
        assert_eq!(top.as_slice(), &all[..3]);
        assert_eq!(top[0].role_id, "data-scientist");
    }

    #[test]
    fn test_match_specific_skips_unknown_ids() {
        let profile = make_profile(&["sql"], "beginner");
        let ids = vec!["data-analyst".to_string(), "astronaut".to_string()];
        let results = match_specific(&profile, ROLE_CATALOG, &ids);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].role_id, "data-analyst");
    }

    #[test]
    fn test_match_specific_without_ids_returns_top_three() {
        let profile = make_profile(&["sql"], "beginner");
        assert_eq!(
            match_specific(&profile, ROLE_CATALOG, &[]),
            top_n(&profile, ROLE_CATALOG, 3)
        );
    }

    #[test]
    fn test_recommendation_good_names_two_gaps() {
        let gaps = vec![normalize("docker"), normalize("k8s"), normalize("aws")];
        let rec = build_recommendation("Backend Engineer", MatchLevel::Good, &gaps);
        assert!(rec.contains("docker and kubernetes"));
        assert!(!rec.contains("aws"));
    }

    #[test]
    fn test_recommendation_excellent_mentions_role() {
        let rec = build_recommendation("Data Analyst", MatchLevel::Excellent, &[]);
        assert!(rec.starts_with("Excellent match!"));
        assert!(rec.contains("Data Analyst"));
    }

    #[test]
    fn test_clamp_score_handles_negatives() {
        assert_eq!(clamp_score(-12.4), 0);
        assert_eq!(clamp_score(52.5), 53);
        assert_eq!(clamp_score(f64::NAN), 0);
    }
}
