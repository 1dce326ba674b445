use serde::{Deserialize, Serialize};

/// One external internship or job listing. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Display name of the role, compared literally against a profile's target roles.
    pub role_type: String,
    /// Listing category ("internship", "co-op", "senior", ...) used by user-type filtering.
    #[serde(rename = "type", default)]
    pub opportunity_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    /// "Intern", "Entry", "Mid", "Senior", ...
    pub level: String,
    /// "Remote", or e.g. "Hybrid - Minneapolis, MN".
    pub location_type: String,
    #[serde(default)]
    pub sponsor_tag: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<u32>,
    pub apply_url: String,
}

impl Opportunity {
    pub fn is_remote(&self) -> bool {
        self.location_type.trim().eq_ignore_ascii_case("remote")
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpportunityFile {
    pub opportunities: Vec<Opportunity>,
}
