use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent or blank: AI matching is skipped and the deterministic matcher answers.
    pub anthropic_api_key: Option<String>,
    /// Absent: profiles live in process memory.
    pub redis_url: Option<String>,
    /// Absent: the bundled opportunity listing is used.
    pub opportunities_path: Option<PathBuf>,
    pub ai_match_timeout: Duration,
    pub ai_match_generous: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            opportunities_path: optional_env("OPPORTUNITIES_PATH").map(PathBuf::from),
            ai_match_timeout: Duration::from_secs(
                optional_env("AI_MATCH_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("AI_MATCH_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(30),
            ),
            ai_match_generous: optional_env("AI_MATCH_GENEROUS")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("AI_MATCH_GENEROUS must be true or false")?
                .unwrap_or(true),
        })
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
