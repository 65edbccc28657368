//! LostFound Ingest Layer
//!
//! This is where reports enter the system. A [`ReportRequest`] comes in from
//! the reporting form, gets validated and sanitised, and leaves as an [`Item`]
//! ready to be appended to the store.
//!
//! ## What we do here
//!
//! - **Parse the category** - The one hard check. Anything outside the closed
//!   [`Category`] set fails with [`IngestError::InvalidCategory`].
//! - **Sanitise text** - Strip control characters and trim every field,
//!   detail keys and values included. Detail entries with an empty key are
//!   dropped.
//! - **Generate identity** - Fresh UUIDv4 id, `report_time = now`, status
//!   `Open`.
//! - **Optional policies** - Strict event-time parsing, required contact
//!   details and a cap on detail entries, all driven by [`IngestConfig`].
//! - **Log everything** - Structured `report_success` / `report_failure`
//!   events via tracing.
//!
//! ## Example
//!
//! ```
//! use ingest::{ingest, Category, IngestConfig, ItemKind, ItemStatus, ReportRequest};
//!
//! let mut request = ReportRequest {
//!     person_name: "John Doe".into(),
//!     contact_info: "john@example.com".into(),
//!     category: "Smartphone".into(),
//!     event_time: "2023-04-15T14:30:00Z".into(),
//!     location: "UB, Floor 4".into(),
//!     ..Default::default()
//! };
//! request.details.insert("brand".into(), "  Apple ".into());
//!
//! let item = ingest(ItemKind::Lost, request, &IngestConfig::default()).unwrap();
//! assert_eq!(item.category, Category::Smartphone);
//! assert_eq!(item.status, ItemStatus::Open);
//! assert_eq!(item.details["brand"], "Apple");
//! ```
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn, Level};
use uuid::Uuid;

mod category;
mod config;
mod error;
mod time;
mod types;

pub use crate::category::{attribute_label, Category};
pub use crate::config::{ConfigError, IngestConfig};
pub use crate::error::IngestError;
pub use crate::time::{parse_event_time, parse_lower_bound, parse_upper_bound};
pub use crate::types::{Details, Item, ItemKind, ItemStatus, ReportRequest};

/// Validate a report and turn it into a new open [`Item`] of the given kind.
pub fn ingest(kind: ItemKind, raw: ReportRequest, cfg: &IngestConfig) -> Result<Item, IngestError> {
    let start = Instant::now();
    let category_hint = raw.category.clone();

    let span = tracing::span!(Level::INFO, "ingest.report", kind = %kind);
    let _guard = span.enter();

    match ingest_inner(kind, raw, cfg) {
        Ok(item) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                item_id = %item.id,
                category = %item.category,
                detail_count = item.details.len(),
                elapsed_micros,
                "report_success"
            );
            Ok(item)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(
                category = ?category_hint,
                error = %err,
                elapsed_micros,
                "report_failure"
            );
            Err(err)
        }
    }
}

fn ingest_inner(kind: ItemKind, raw: ReportRequest, cfg: &IngestConfig) -> Result<Item, IngestError> {
    let ReportRequest {
        person_name,
        contact_info,
        category,
        event_time,
        location,
        details,
        additional_info,
    } = raw;

    let category: Category = category.parse()?;
    let strip = cfg.strip_control_chars;

    let person_name = sanitize(&person_name, strip);
    let contact_info = sanitize(&contact_info, strip);
    if cfg.require_contact {
        require_non_empty("person_name", &person_name)?;
        require_non_empty("contact_info", &contact_info)?;
    }

    let event_time = sanitize(&event_time, strip);
    if cfg.strict_event_time && parse_event_time(&event_time).is_none() {
        return Err(IngestError::MalformedDate(event_time));
    }

    if let Some(limit) = cfg.max_detail_entries {
        if details.len() > limit {
            return Err(IngestError::TooManyDetails {
                count: details.len(),
                limit,
            });
        }
    }
    let details = details
        .into_iter()
        .filter_map(|(key, value)| {
            let key = sanitize(&key, strip);
            (!key.is_empty()).then(|| (key, sanitize(&value, strip)))
        })
        .collect::<Details>();

    Ok(Item {
        id: Uuid::new_v4().to_string(),
        kind,
        person_name,
        contact_info,
        category,
        event_time,
        location: sanitize(&location, strip),
        report_time: Utc::now(),
        details,
        additional_info: sanitize(&additional_info, strip),
        status: ItemStatus::Open,
    })
}

/// Strip control characters (optionally) and trim.
fn sanitize(value: &str, strip_control: bool) -> String {
    if strip_control {
        value
            .chars()
            .filter(|c| !c.is_control())
            .collect::<String>()
            .trim()
            .to_string()
    } else {
        value.trim().to_string()
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), IngestError> {
    if value.is_empty() {
        return Err(IngestError::InvalidField(format!("{field} empty")));
    }
    Ok(())
}
