use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// An AI-generated learning plan: ordered phases of milestones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Roadmap {
    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.phases.iter().flat_map(|p| p.milestones.iter())
    }

    /// Sets the status of one milestone. Returns `false` if no such milestone exists.
    pub fn set_milestone_status(
        &mut self,
        phase_id: &str,
        milestone_id: &str,
        status: MilestoneStatus,
    ) -> bool {
        let milestone = self
            .phases
            .iter_mut()
            .filter(|p| p.id == phase_id)
            .flat_map(|p| p.milestones.iter_mut())
            .find(|m| m.id == milestone_id);

        match milestone {
            Some(m) => {
                m.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap() -> Roadmap {
        Roadmap {
            phases: vec![Phase {
                id: "p1".into(),
                name: "Semester 1".into(),
                milestones: vec![Milestone {
                    id: "m1".into(),
                    title: "Learn SQL".into(),
                    status: MilestoneStatus::NotStarted,
                    skills: vec!["sql".into()],
                }],
            }],
        }
    }

    #[test]
    fn test_set_milestone_status() {
        let mut r = roadmap();
        assert!(r.set_milestone_status("p1", "m1", MilestoneStatus::Completed));
        assert_eq!(r.phases[0].milestones[0].status, MilestoneStatus::Completed);
    }

    #[test]
    fn test_set_milestone_status_wrong_phase_is_noop() {
        let mut r = roadmap();
        assert!(!r.set_milestone_status("p2", "m1", MilestoneStatus::Completed));
        assert_eq!(r.phases[0].milestones[0].status, MilestoneStatus::NotStarted);
    }

    #[test]
    fn test_status_serde_is_snake_case() {
        let json = serde_json::to_string(&MilestoneStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
