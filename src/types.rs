//! Core types and structures for username-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Username generation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Exactly 5 characters, letter/digit compositions
    FiveChar,
    /// Random length in [3, 12]
    Random,
    /// Gaming-themed word compositions
    Gaming,
    /// Cool/aesthetic word compositions
    Cool,
    /// Letter-majority alphanumeric mix, length in [4, 10]
    Mixed,
}

impl Style {
    /// Parse a style tag, falling back to the 5-character style for
    /// anything unrecognized.
    pub fn parse_or_default(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "5char" | "fivechar" | "5" => Style::FiveChar,
            "random" => Style::Random,
            "gaming" => Style::Gaming,
            "cool" => Style::Cool,
            "mixed" => Style::Mixed,
            _ => Style::FiveChar,
        }
    }

    /// All known styles
    pub fn all() -> &'static [Style] {
        &[
            Style::FiveChar,
            Style::Random,
            Style::Gaming,
            Style::Cool,
            Style::Mixed,
        ]
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::FiveChar => write!(f, "5char"),
            Style::Random => write!(f, "random"),
            Style::Gaming => write!(f, "gaming"),
            Style::Cool => write!(f, "cool"),
            Style::Mixed => write!(f, "mixed"),
        }
    }
}

/// How a check verdict was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMethod {
    /// Verdict came from the remote validation authority
    Remote,
    /// Feature-weighted heuristic fallback
    SmartHeuristic,
    /// Coarse length/digit bucket fallback
    BasicHeuristic,
    /// Fail-open marker for an unexpected error past the oracle
    ErrorFallback,
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMethod::Remote => write!(f, "remote"),
            CheckMethod::SmartHeuristic => write!(f, "smart-heuristic"),
            CheckMethod::BasicHeuristic => write!(f, "basic-heuristic"),
            CheckMethod::ErrorFallback => write!(f, "unverified-error"),
        }
    }
}

/// Availability check result for a single candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub candidate: String,
    pub available: bool,
    /// False when the verdict came from a heuristic rather than the
    /// remote authority.
    pub verified: bool,
    pub method: CheckMethod,
    pub checked_at: DateTime<Utc>,
}

/// Configuration for availability checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Validation endpoint URL
    pub endpoint: String,
    /// Constant sentinel birthday the endpoint requires
    pub birthday: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum gap between remote checks
    pub min_interval: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://auth.roblox.com/v1/usernames/validate".to_string(),
            birthday: "1337-04-20".to_string(),
            timeout: Duration::from_secs(8),
            min_interval: Duration::from_millis(150),
        }
    }
}

impl CheckConfig {
    /// Default configuration with the endpoint optionally overridden by
    /// the `USERNAME_VALIDATION_URL` environment variable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("USERNAME_VALIDATION_URL") {
            if !url.is_empty() {
                config.endpoint = url;
            }
        }
        config
    }
}

/// Configuration for the search loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Optional ceiling on total attempts; `None` searches until satisfied
    pub max_attempts: Option<u64>,
    /// Emit a progress snapshot every N attempts
    pub progress_interval: u64,
    /// How many taken results to append to the output for context
    pub taken_sample_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            progress_interval: 10,
            taken_sample_size: 3,
        }
    }
}

/// Periodic search progress snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Available names found so far
    pub found: usize,
    /// Target count for this run
    pub target: usize,
    /// Distinct candidates checked
    pub total_checked: u64,
    /// Attempts including duplicate skips
    pub attempts: u64,
}

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCompletion {
    /// Target count reached
    Satisfied,
    /// Attempt ceiling hit before the target was reached
    Exhausted,
    /// Cancelled via the cancel handle
    Cancelled,
}

impl std::fmt::Display for SearchCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCompletion::Satisfied => write!(f, "satisfied"),
            SearchCompletion::Exhausted => write!(f, "exhausted"),
            SearchCompletion::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Final result set of one search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub style: Style,
    pub target: usize,
    /// Available results in discovery order
    pub available: Vec<CheckResult>,
    /// First few taken results, for user context
    pub taken_sample: Vec<CheckResult>,
    /// Distinct candidates checked
    pub total_checked: u64,
    /// Attempts including duplicate skips
    pub attempts: u64,
    pub completion: SearchCompletion,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SearchOutcome {
    /// True when nothing at all could be produced
    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.taken_sample.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_or_default() {
        assert_eq!(Style::parse_or_default("5char"), Style::FiveChar);
        assert_eq!(Style::parse_or_default("GAMING"), Style::Gaming);
        assert_eq!(Style::parse_or_default("cool"), Style::Cool);
        assert_eq!(Style::parse_or_default("mixed"), Style::Mixed);
        assert_eq!(Style::parse_or_default("random"), Style::Random);
        // Unknown tags fall back to the 5-character style
        assert_eq!(Style::parse_or_default("no-such-style"), Style::FiveChar);
        assert_eq!(Style::parse_or_default(""), Style::FiveChar);
    }

    #[test]
    fn test_style_display_round_trip() {
        for style in Style::all() {
            assert_eq!(Style::parse_or_default(&style.to_string()), *style);
        }
    }

    #[test]
    fn test_check_config_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(8));
        assert_eq!(config.min_interval, Duration::from_millis(150));
        assert_eq!(config.birthday, "1337-04-20");
    }

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.progress_interval, 10);
        assert_eq!(config.taken_sample_size, 3);
    }
}
