use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::opportunities::models::{Opportunity, OpportunityFile};

const BUNDLED_OPPORTUNITIES: &str = include_str!("../../data/opportunities.json");

/// Loads the opportunity catalog: from `path` when given, else the bundled listing.
pub fn load_opportunities(path: Option<&Path>) -> Result<Vec<Opportunity>> {
    let opportunities = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read opportunities from {}", path.display()))?;
            parse_opportunities(&raw)
                .with_context(|| format!("Invalid opportunities file {}", path.display()))?
        }
        None => parse_opportunities(BUNDLED_OPPORTUNITIES).context("Invalid bundled opportunities")?,
    };

    info!("Loaded {} opportunities", opportunities.len());
    Ok(opportunities)
}

fn parse_opportunities(raw: &str) -> Result<Vec<Opportunity>> {
    let file: OpportunityFile = serde_json::from_str(raw)?;
    Ok(file.opportunities)
}
