use index::IndexError;
use ingest::{Category, Details, Item};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything that can be scored against a stored item.
///
/// Implemented for stored [`Item`]s and for ad-hoc [`MatchProbe`]s, so a
/// user can search the opposite collection without filing a report first.
pub trait Matchable {
    fn category(&self) -> Category;
    fn details(&self) -> &Details;
    /// Free-text location; empty when unknown.
    fn location(&self) -> &str;
}

impl Matchable for Item {
    fn category(&self) -> Category {
        self.category
    }

    fn details(&self) -> &Details {
        &self.details
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// A description of an item to look for, not backed by a stored report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchProbe {
    pub category: Category,
    #[serde(default)]
    pub details: Details,
    #[serde(default)]
    pub location: String,
}

impl Matchable for MatchProbe {
    fn category(&self) -> Category {
        self.category
    }

    fn details(&self) -> &Details {
        &self.details
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// Configuration for the [`Matcher`](crate::Matcher).
///
/// Cheap to clone and serde-friendly so it can sit inside the service YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchConfig {
    /// Configuration schema version.
    pub version: String,
    /// Cap on returned hits. `None` returns the full ranked list.
    pub max_results: Option<usize>,
    /// Minimum score a candidate needs to be returned. Never below 1, so
    /// zero-score candidates are always dropped.
    pub min_score: u32,
    /// Populate the per-signal [`ScoreBreakdown`] on each hit.
    pub explain: bool,
}

impl MatchConfig {
    pub(crate) fn default_min_score() -> u32 {
        1
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero when set".into(),
            ));
        }
        if self.min_score == 0 {
            return Err(MatchError::InvalidConfig("min_score must be >= 1".into()));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            max_results: None,
            min_score: Self::default_min_score(),
            explain: false,
        }
    }
}

/// How a score was assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Points from detail values (10 exact, 5 partial per key).
    pub detail_points: u32,
    /// Points from the location comparison (10 exact, 5 partial).
    pub location_points: u32,
    /// Detail keys that compared exactly equal.
    pub exact_keys: Vec<String>,
    /// Detail keys where one value contains the other.
    pub partial_keys: Vec<String>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.detail_points + self.location_points
    }
}

/// A single ranked candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchHit {
    /// 1-based position in the ranked list.
    pub rank: usize,
    pub score: u32,
    pub item: Item,
    /// Present when [`MatchConfig::explain`] is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<ScoreBreakdown>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Reference item lookup failed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_uncapped() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_results, None);
        assert_eq!(cfg.min_score, 1);
    }

    #[test]
    fn zero_min_score_rejected() {
        let cfg = MatchConfig {
            min_score: 0,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("min_score")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_max_results_rejected() {
        let cfg = MatchConfig {
            max_results: Some(0),
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_results")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_version_rejected() {
        let cfg = MatchConfig {
            version: "  ".into(),
            ..MatchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probe_deserializes_without_location() {
        let probe: MatchProbe = serde_json::from_str(
            r#"{"category":"Smartphone","details":{"brand":"Apple"}}"#,
        )
        .expect("deserialize");
        assert_eq!(probe.location, "");
        assert_eq!(probe.details["brand"], "Apple");
    }

    #[test]
    fn breakdown_total_adds_both_signals() {
        let breakdown = ScoreBreakdown {
            detail_points: 25,
            location_points: 5,
            ..Default::default()
        };
        assert_eq!(breakdown.total(), 30);
    }
}
