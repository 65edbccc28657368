//! Core data model types for lost-and-found reports.
//!
//! ```text
//! ReportRequest                      (what the reporting form submits)
//! ├── person_name, contact_info
//! ├── category: String               (parsed into Category)
//! ├── event_time: String             (kept verbatim)
//! ├── location: String
//! ├── details: BTreeMap<String, String>
//! └── additional_info: String
//!
//!         ↓ ingest()
//!
//! Item
//! ├── id: String                     (UUIDv4, generated)
//! ├── kind: ItemKind                 (Lost | Found)
//! ├── category: Category
//! ├── report_time: DateTime<Utc>     (generated)
//! ├── status: ItemStatus             (starts Open)
//! └── ... sanitised copies of the request fields
//! ```
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Free-form descriptive attributes. Keys are advisory per category.
pub type Details = BTreeMap<String, String>;

/// Which collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    /// The collection a match for this kind is searched in.
    pub fn opposite(self) -> Self {
        match self {
            ItemKind::Lost => ItemKind::Found,
            ItemKind::Found => ItemKind::Lost,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(ItemKind::Lost),
            "found" => Ok(ItemKind::Found),
            other => Err(format!("unknown item kind {other:?}; expected lost or found")),
        }
    }
}

/// Lifecycle state of a report. Only `Open` items are match candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    #[default]
    Open,
    Closed,
    Matched,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Open => "OPEN",
            ItemStatus::Closed => "CLOSED",
            ItemStatus::Matched => "MATCHED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub person_name: String,
    pub contact_info: String,
    pub category: String,
    /// When the item was lost or found, as typed by the reporter.
    pub event_time: String,
    pub location: String,
    #[serde(default)]
    pub details: Details,
    #[serde(default)]
    pub additional_info: String,
}

/// A single lost or found report record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub person_name: String,
    pub contact_info: String,
    pub category: Category,
    pub event_time: String,
    pub location: String,
    pub report_time: DateTime<Utc>,
    pub details: Details,
    pub additional_info: String,
    pub status: ItemStatus,
}

impl Item {
    pub fn is_open(&self) -> bool {
        self.status == ItemStatus::Open
    }
}
