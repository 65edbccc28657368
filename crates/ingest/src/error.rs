//! Error types produced by the ingest crate.
//!
//! All errors are typed, cloneable, and comparable so callers can map them to
//! form validation messages or HTTP status codes without string matching.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`InvalidCategory`](IngestError::InvalidCategory) | Category is not one of the closed set |
//! | [`MalformedDate`](IngestError::MalformedDate) | `event_time` unparsable under strict validation |
//! | [`InvalidField`](IngestError::InvalidField) | Required reporter field empty after sanitising |
//! | [`TooManyDetails`](IngestError::TooManyDetails) | Details map exceeds the configured entry limit |
//!
//! # Examples
//!
//! ```rust
//! use ingest::IngestError;
//!
//! fn form_message(error: &IngestError) -> String {
//!     match error {
//!         IngestError::InvalidCategory(raw) => format!("Pick a category from the list (got {raw:?})"),
//!         IngestError::MalformedDate(_) => "Use YYYY-MM-DD HH:MM for the time".to_string(),
//!         other => other.to_string(),
//!     }
//! }
//!
//! assert!(form_message(&IngestError::InvalidCategory("Umbrella".into())).contains("Umbrella"));
//! ```
use thiserror::Error;

/// Errors that can occur while validating a lost/found report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The category string does not name a known [`Category`](crate::Category).
    ///
    /// ```rust
    /// use ingest::{Category, IngestError};
    ///
    /// let err = "Umbrella".parse::<Category>().unwrap_err();
    /// assert_eq!(err, IngestError::InvalidCategory("Umbrella".into()));
    /// ```
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    /// A timestamp could not be parsed.
    ///
    /// Only raised at report time when
    /// [`IngestConfig::strict_event_time`](crate::IngestConfig::strict_event_time)
    /// is enabled. Filtering never raises this; unparsable times are excluded
    /// from date-bounded results instead.
    #[error("malformed date: {0:?}")]
    MalformedDate(String),

    /// A reporter field required by the active [`IngestConfig`](crate::IngestConfig)
    /// is empty after control-character stripping and trimming.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// The details map has more entries than
    /// [`IngestConfig::max_detail_entries`](crate::IngestConfig::max_detail_entries).
    #[error("too many detail entries: {count} exceeds limit of {limit}")]
    TooManyDetails { count: usize, limit: usize },
}

impl IngestError {
    /// All ingest errors describe bad input.
    pub fn is_client_error(&self) -> bool {
        true
    }

    /// Suggested HTTP status code for this error.
    ///
    /// ```rust
    /// use ingest::IngestError;
    ///
    /// assert_eq!(IngestError::InvalidCategory("x".into()).http_status_code(), 400);
    /// assert_eq!(IngestError::TooManyDetails { count: 40, limit: 32 }.http_status_code(), 413);
    /// ```
    pub fn http_status_code(&self) -> u16 {
        match self {
            IngestError::TooManyDetails { .. } => 413,
            _ => 400,
        }
    }
}
