//! Configuration for report intake.
//!
//! [`IngestConfig`] controls how strictly submitted reports are validated.
//! Defaults match the reporting form: only the category is checked, and the
//! event time is stored as typed.
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig {
//!     strict_event_time: true,
//!     require_contact: true,
//!     ..Default::default()
//! };
//! config.validate().expect("valid configuration");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for report validation.
///
/// Serializable so it can be embedded in the YAML service configuration:
///
/// ```yaml
/// ingest:
///   version: 1
///   strip_control_chars: true
///   strict_event_time: false
///   require_contact: false
///   max_detail_entries: 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Configuration schema version.
    ///
    /// Default: `1`
    pub version: u32,

    /// Remove ASCII/Unicode control characters from every text field before
    /// trimming. Keeps terminal escapes and stray newlines out of logs.
    ///
    /// Default: `true`
    pub strip_control_chars: bool,

    /// Reject reports whose `event_time` cannot be parsed with
    /// [`IngestError::MalformedDate`](crate::IngestError::MalformedDate).
    /// When off, the raw string is stored and the item simply drops out of
    /// date-bounded searches.
    ///
    /// Default: `false`
    pub strict_event_time: bool,

    /// Require non-empty `person_name` and `contact_info`.
    ///
    /// Default: `false`
    pub require_contact: bool,

    /// Maximum number of detail entries per report. `None` disables the check.
    ///
    /// Default: `Some(32)`
    pub max_detail_entries: Option<usize>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_control_chars: true,
            strict_event_time: false,
            require_contact: false,
            max_detail_entries: Some(32),
        }
    }
}

/// Invalid [`IngestConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl IngestConfig {
    /// Check configuration invariants. Call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::Invalid("version must be >= 1".into()));
        }
        if self.max_detail_entries == Some(0) {
            return Err(ConfigError::Invalid(
                "max_detail_entries must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_lenient() {
        let cfg = IngestConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.strip_control_chars);
        assert!(!cfg.strict_event_time);
        assert!(!cfg.require_contact);
    }

    #[test]
    fn zero_detail_limit_is_rejected() {
        let cfg = IngestConfig {
            max_detail_entries: Some(0),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_version_is_rejected() {
        let cfg = IngestConfig {
            version: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: IngestConfig =
            serde_json::from_str(r#"{"strict_event_time": true}"#).expect("deserialize");
        assert!(cfg.strict_event_time);
        assert_eq!(cfg.max_detail_entries, Some(32));
    }
}
