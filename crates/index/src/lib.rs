//! # LostFound Item Store (`index`)
//!
//! Keeps the two disjoint report collections (lost and found) in process
//! memory. Items are appended through [`ItemStore::report_item`], which runs
//! the report through [`ingest::ingest`] first; after that the only mutation
//! is a status change via [`ItemStore::set_status`].
//!
//! ## Key Concepts
//!
//! - **Owned state** - The store is a plain value. Construct one per process
//!   (or per test) and pass it around; there are no globals.
//! - **No internal locking** - Mutations take `&mut self`. A multi-request host
//!   wraps the whole store in a single lock so both collections share one
//!   mutual-exclusion boundary.
//! - **Stable order** - Both collections preserve insertion order, which the
//!   filter and match engines rely on for deterministic, stable results.
//!
//! ## Example Usage
//!
//! ```
//! use index::ItemStore;
//! use ingest::{ItemKind, ItemStatus, ReportRequest};
//!
//! let mut store = ItemStore::default();
//! let item = store
//!     .report_item(
//!         ItemKind::Found,
//!         ReportRequest {
//!             category: "Keys".into(),
//!             location: "UB, Floor 6 (Near Lift)".into(),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(store.list_items(ItemKind::Found).len(), 1);
//! store.set_status(ItemKind::Found, &item.id, ItemStatus::Matched).unwrap();
//! assert_eq!(store.items(ItemKind::Found)[0].status, ItemStatus::Matched);
//! ```

mod backend;

use chrono::{TimeZone, Utc};
use ingest::{ingest, Category, Details, IngestConfig, IngestError, Item, ItemKind, ItemStatus, ReportRequest};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::backend::Collection;

/// Errors raised by store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexError {
    /// No item with this id exists in the named collection.
    #[error("no {kind} item with id {id:?}")]
    NotFound { kind: ItemKind, id: String },
    /// The generated id collided with an existing one.
    #[error("duplicate {kind} item id {id:?}")]
    DuplicateId { kind: ItemKind, id: String },
    /// The report failed validation.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Collection sizes, for readiness and status endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub lost: usize,
    pub found: usize,
    pub open_lost: usize,
    pub open_found: usize,
}

/// In-memory store of lost and found reports.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    cfg: IngestConfig,
    lost: Collection,
    found: Collection,
}

impl ItemStore {
    /// Create an empty store that validates reports with `cfg`.
    pub fn new(cfg: IngestConfig) -> Self {
        Self {
            cfg,
            lost: Collection::default(),
            found: Collection::default(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.cfg
    }

    fn collection(&self, kind: ItemKind) -> &Collection {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    fn collection_mut(&mut self, kind: ItemKind) -> &mut Collection {
        match kind {
            ItemKind::Lost => &mut self.lost,
            ItemKind::Found => &mut self.found,
        }
    }

    /// Validate a report and append it as a new open item of `kind`.
    pub fn report_item(&mut self, kind: ItemKind, report: ReportRequest) -> Result<Item, IndexError> {
        let item = ingest(kind, report, &self.cfg)?;
        self.append(item.clone())?;
        info!(kind = %kind, item_id = %item.id, total = self.len(kind), "item_reported");
        Ok(item)
    }

    fn append(&mut self, item: Item) -> Result<(), IndexError> {
        let kind = item.kind;
        let id = item.id.clone();
        if self.collection_mut(kind).push(item) {
            Ok(())
        } else {
            warn!(kind = %kind, item_id = %id, "duplicate_item_id");
            Err(IndexError::DuplicateId { kind, id })
        }
    }

    /// Owned snapshot of a collection in insertion order.
    pub fn list_items(&self, kind: ItemKind) -> Vec<Item> {
        self.items(kind).to_vec()
    }

    /// Borrowed view of a collection in insertion order.
    pub fn items(&self, kind: ItemKind) -> &[Item] {
        self.collection(kind).as_slice()
    }

    pub fn get_item(&self, kind: ItemKind, id: &str) -> Result<&Item, IndexError> {
        self.collection(kind)
            .get(id)
            .ok_or_else(|| IndexError::NotFound {
                kind,
                id: id.to_string(),
            })
    }

    /// Overwrite the status of an existing item and return the updated record.
    pub fn set_status(
        &mut self,
        kind: ItemKind,
        id: &str,
        status: ItemStatus,
    ) -> Result<Item, IndexError> {
        match self.collection_mut(kind).set_status(id, status) {
            Some(item) => {
                info!(kind = %kind, item_id = %id, status = %status, "status_updated");
                Ok(item.clone())
            }
            None => {
                warn!(kind = %kind, item_id = %id, "status_update_unknown_item");
                Err(IndexError::NotFound {
                    kind,
                    id: id.to_string(),
                })
            }
        }
    }

    pub fn len(&self, kind: ItemKind) -> usize {
        self.collection(kind).len()
    }

    pub fn is_empty(&self, kind: ItemKind) -> bool {
        self.len(kind) == 0
    }

    pub fn stats(&self) -> StoreStats {
        let open = |kind| self.items(kind).iter().filter(|item| item.is_open()).count();
        StoreStats {
            lost: self.len(ItemKind::Lost),
            found: self.len(ItemKind::Found),
            open_lost: open(ItemKind::Lost),
            open_found: open(ItemKind::Found),
        }
    }

    /// Append the demo reports (two lost, two found). Returns how many were added.
    pub fn seed_sample_data(&mut self) -> Result<usize, IndexError> {
        let items = sample_items();
        let count = items.len();
        for item in items {
            self.append(item)?;
        }
        info!(count, "sample_data_seeded");
        Ok(count)
    }
}

fn details(pairs: &[(&str, &str)]) -> Details {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn sample_item(
    id: &str,
    kind: ItemKind,
    person_name: &str,
    contact_info: &str,
    category: Category,
    event_time: &str,
    location: &str,
    reported: (u32, u32, u32, u32),
    detail_pairs: &[(&str, &str)],
    additional_info: &str,
) -> Item {
    let (month, day, hour, minute) = reported;
    Item {
        id: id.to_string(),
        kind,
        person_name: person_name.to_string(),
        contact_info: contact_info.to_string(),
        category,
        event_time: event_time.to_string(),
        location: location.to_string(),
        report_time: Utc
            .with_ymd_and_hms(2023, month, day, hour, minute, 0)
            .single()
            .unwrap_or_else(Utc::now),
        details: details(detail_pairs),
        additional_info: additional_info.to_string(),
        status: ItemStatus::Open,
    }
}

/// The demo reports the reporting UI ships with.
pub fn sample_items() -> Vec<Item> {
    vec![
        sample_item(
            "sample-lost-1",
            ItemKind::Lost,
            "John Doe",
            "john@example.com",
            Category::Smartphone,
            "2023-04-15T14:30:00Z",
            "Main Building, Room 204",
            (4, 15, 15, 45),
            &[
                ("brand", "Apple"),
                ("model", "iPhone 13"),
                ("color", "Black"),
                ("case_description", "Clear case with red popsocket"),
                ("has_lock_screen", "Yes"),
            ],
            "The phone has a photo of a dog as the lock screen",
        ),
        sample_item(
            "sample-lost-2",
            ItemKind::Lost,
            "Sarah Johnson",
            "sarah@example.com",
            Category::Wallet,
            "2023-04-16T09:15:00Z",
            "Cafeteria",
            (4, 16, 10, 30),
            &[
                ("color", "Brown"),
                ("size", "Medium"),
                ("distinguishing_features", "Has a small butterfly logo"),
            ],
            "Contains ID card and some cash",
        ),
        sample_item(
            "sample-found-1",
            ItemKind::Found,
            "Mike Smith",
            "mike@example.com",
            Category::Keys,
            "2023-04-16T13:45:00Z",
            "Main Building",
            (4, 16, 14, 20),
            &[
                ("color", "Silver"),
                ("size", "Small"),
                ("distinguishing_features", "Blue keychain"),
                ("number_of_keys", "3"),
            ],
            "Found near the entrance",
        ),
        sample_item(
            "sample-found-2",
            ItemKind::Found,
            "Emily Davis",
            "emily@example.com",
            Category::Smartphone,
            "2023-04-15T16:30:00Z",
            "Library",
            (4, 15, 17, 0),
            &[
                ("brand", "Apple"),
                ("model", "iPhone 13"),
                ("color", "Black"),
                ("case_description", "Clear case"),
                ("has_lock_screen", "Yes"),
            ],
            "Found on a study table",
        ),
    ]
}
