use serde::Serialize;

use crate::models::profile::UserProfile;
use crate::models::roadmap::{Milestone, MilestoneStatus, Roadmap};

const MAX_NEXT_STEPS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Continue,
    Start,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextStep {
    pub kind: StepKind,
    pub phase: String,
    pub phase_id: String,
    pub milestone: Milestone,
}

/// Skills attached to completed milestones, deduplicated in first-seen order.
pub fn completed_skills(roadmap: Option<&Roadmap>) -> Vec<String> {
    let Some(roadmap) = roadmap else {
        return vec![];
    };

    let mut skills: Vec<String> = Vec::new();
    for milestone in roadmap
        .milestones()
        .filter(|m| m.status == MilestoneStatus::Completed)
    {
        for skill in &milestone.skills {
            if !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }
    }
    skills
}

/// Portfolio readiness, 0–100.
///
/// Completed milestones carry 60 points, in-progress ones 20, and each current
/// skill adds 2. A missing or empty roadmap scores 0.
pub fn readiness_score(profile: &UserProfile, roadmap: Option<&Roadmap>) -> u32 {
    let Some(roadmap) = roadmap else {
        return 0;
    };

    let total = roadmap.milestones().count();
    if total == 0 {
        return 0;
    }

    let count = |status: MilestoneStatus| roadmap.milestones().filter(|m| m.status == status).count();
    let completed = count(MilestoneStatus::Completed) as f64 / total as f64 * 60.0;
    let in_progress = count(MilestoneStatus::InProgress) as f64 / total as f64 * 20.0;
    let skills = profile.current_skills.len() as f64 * 2.0;

    ((completed + in_progress + skills).round() as u32).min(100)
}

/// Up to three suggested milestones, walking phases in order.
///
/// Each phase contributes its first in-progress milestone ("continue"), then its
/// first not-started one ("start") while fewer than three steps are collected.
pub fn next_steps(roadmap: Option<&Roadmap>) -> Vec<NextStep> {
    let Some(roadmap) = roadmap else {
        return vec![];
    };

    let mut steps = Vec::new();
    for phase in &roadmap.phases {
        let first_with = |status: MilestoneStatus| phase.milestones.iter().find(|m| m.status == status);

        if let Some(milestone) = first_with(MilestoneStatus::InProgress) {
            steps.push(NextStep {
                kind: StepKind::Continue,
                phase: phase.name.clone(),
                phase_id: phase.id.clone(),
                milestone: milestone.clone(),
            });
        }

        if steps.len() < MAX_NEXT_STEPS {
            if let Some(milestone) = first_with(MilestoneStatus::NotStarted) {
                steps.push(NextStep {
                    kind: StepKind::Start,
                    phase: phase.name.clone(),
                    phase_id: phase.id.clone(),
                    milestone: milestone.clone(),
                });
            }
        }

        if steps.len() >= MAX_NEXT_STEPS {
            break;
        }
    }
    steps
}
