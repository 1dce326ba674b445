use serde::{Deserialize, Serialize};

/// Ordinal experience tier. Roles declare a minimum tier; profiles carry a
/// free-text label that is mapped onto one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner = 0,
    Intermediate = 1,
    Advanced = 2,
}

impl ExperienceLevel {
    /// Maps an onboarding label ("Beginner - no experience", "Some experience", ...)
    /// onto a tier. Unrecognized labels fall back to `Beginner`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("beginner") || label.contains("no experience") {
            ExperienceLevel::Beginner
        } else if label.contains("intermediate") || label.contains("some experience") {
            ExperienceLevel::Intermediate
        } else if label.contains("advanced") || label.contains("expert") {
            ExperienceLevel::Advanced
        } else {
            ExperienceLevel::Beginner
        }
    }

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// Persona chosen at onboarding. Drives which opportunities are surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Student,
    Professional,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub time_availability: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

/// Skills and background parsed from an uploaded resume by an external extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeExtract {
    #[serde(default)]
    pub normalized_skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    /// Field of study.
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    /// Free-text label from onboarding; see [`ExperienceLevel::from_label`].
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub graduation_timeline: String,
    /// "City, Region" as entered by the user.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub target_roles: Vec<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub resume: Option<ResumeExtract>,
}

impl UserProfile {
    pub fn experience_tier(&self) -> ExperienceLevel {
        ExperienceLevel::from_label(&self.experience_level)
    }

    /// Raw (un-normalized) skill pool: current skills, interests and resume skills.
    pub fn skill_pool(&self) -> Vec<&str> {
        let resume_skills = self
            .resume
            .as_ref()
            .map(|r| r.normalized_skills.as_slice())
            .unwrap_or_default();

        self.current_skills
            .iter()
            .chain(self.interests.iter())
            .chain(resume_skills.iter())
            .map(String::as_str)
            .collect()
    }

    /// Region part of the location: the text after the first comma, trimmed.
    pub fn region(&self) -> Option<&str> {
        self.location
            .split_once(',')
            .map(|(_, region)| region.trim())
            .filter(|region| !region.is_empty())
    }
}
