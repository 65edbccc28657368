//! Workspace umbrella crate for the LostFound matching service.
//!
//! This crate stitches together the location catalog, report intake, item
//! store and matcher behind one [`LostFound`] facade, so callers can file
//! reports, search them and rank lost/found candidates through a single
//! entry point.
//!
//! ```
//! use lostfound::{FilterQuery, ItemKind, LostFound, ReportRequest};
//!
//! let mut service = LostFound::new();
//! service.seed_sample_data().unwrap();
//!
//! let lost = service.list_items(ItemKind::Lost);
//! let hits = service.find_matches(ItemKind::Lost, &lost[0].id).unwrap();
//! assert_eq!(hits[0].item.location, "Library");
//!
//! let wallets = service.filter_items(ItemKind::Lost, &FilterQuery::new().with_text("butterfly"));
//! assert_eq!(wallets.len(), 1);
//! ```

pub mod config;

pub use catalog::{format_location, Location, LocationCatalog, GROUND_FLOOR};
pub use index::{sample_items, IndexError, ItemStore, StoreStats};
pub use ingest::{
    attribute_label, ingest, parse_event_time, Category, Details, IngestConfig, IngestError, Item,
    ItemKind, ItemStatus, ReportRequest,
};
pub use matcher::{
    filter_items, find_matches, score_match, set_match_metrics, FilterQuery, MatchConfig,
    MatchError, MatchHit, MatchMetrics, MatchProbe, Matchable, Matcher, ScoreBreakdown,
};

#[cfg(feature = "server")]
pub use server;

pub use crate::config::{CatalogYamlConfig, ConfigLoadError, LostFoundConfig};

use thiserror::Error;
use tracing::info;

/// Errors surfaced by the [`LostFound`] facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LostFoundError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// The whole service in one value: catalog, both collections and the matcher.
///
/// Mutations take `&mut self`; wrap it in a lock to share across threads.
#[derive(Debug, Clone)]
pub struct LostFound {
    catalog: LocationCatalog,
    store: ItemStore,
    matcher: Matcher,
}

impl Default for LostFound {
    fn default() -> Self {
        Self::new()
    }
}

impl LostFound {
    /// Default campus catalog, default validation and ranking policy, no items.
    pub fn new() -> Self {
        Self {
            catalog: LocationCatalog::default(),
            store: ItemStore::new(IngestConfig::default()),
            matcher: Matcher::default(),
        }
    }

    /// Build from a loaded configuration, seeding demo data when asked.
    pub fn from_config(cfg: &LostFoundConfig) -> Result<Self, LostFoundError> {
        cfg.validate()?;
        let mut service = Self {
            catalog: cfg.catalog.build(),
            store: ItemStore::new(cfg.ingest.clone()),
            matcher: Matcher::new(cfg.matcher.clone())?,
        };
        if cfg.seed_sample_data {
            service.seed_sample_data()?;
        }
        info!(
            locations = service.catalog.len(),
            seeded = cfg.seed_sample_data,
            "lostfound_ready"
        );
        Ok(service)
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Load the demo reports. Returns how many were added.
    pub fn seed_sample_data(&mut self) -> Result<usize, IndexError> {
        self.store.seed_sample_data()
    }

    pub fn report_item(&mut self, kind: ItemKind, report: ReportRequest) -> Result<Item, IndexError> {
        self.store.report_item(kind, report)
    }

    pub fn set_status(
        &mut self,
        kind: ItemKind,
        id: &str,
        status: ItemStatus,
    ) -> Result<Item, IndexError> {
        self.store.set_status(kind, id, status)
    }

    pub fn get_item(&self, kind: ItemKind, id: &str) -> Result<&Item, IndexError> {
        self.store.get_item(kind, id)
    }

    pub fn list_items(&self, kind: ItemKind) -> Vec<Item> {
        self.store.list_items(kind)
    }

    pub fn filter_items(&self, kind: ItemKind, query: &FilterQuery) -> Vec<Item> {
        self.matcher.filter_items(&self.store, kind, query)
    }

    /// Ranked candidates from the opposite collection for a stored item.
    pub fn find_matches(&self, kind: ItemKind, id: &str) -> Result<Vec<MatchHit>, MatchError> {
        self.matcher.find_matches_for(&self.store, kind, id)
    }

    /// Ranked candidates from `candidate_kind` for an unfiled description.
    pub fn search(&self, probe: &MatchProbe, candidate_kind: ItemKind) -> Vec<MatchHit> {
        self.matcher.search(&self.store, probe, candidate_kind)
    }

    pub fn list_buildings(&self) -> Vec<String> {
        self.catalog.list_buildings()
    }

    pub fn list_floors(&self, building: &str) -> Vec<String> {
        self.catalog.list_floors(building)
    }

    pub fn list_locations(&self, building: &str, floor: &str) -> Vec<Location> {
        self.catalog.list_locations(building, floor)
    }
}
