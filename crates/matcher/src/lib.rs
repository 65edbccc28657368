//! # LostFound Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the ingest data model (`ingest`) and the item
//! store (`index`). It scores lost/found pairs by attribute overlap, ranks
//! candidate matches, and filters item collections for search.
//!
//! ## Scoring
//!
//! - Different categories never match (score 0).
//! - Each detail key of the reference that also carries a non-empty value on
//!   the candidate: +10 on a case-insensitive exact match, +5 when one value
//!   contains the other.
//! - Location: +10 exact, +5 containment. An empty location is contained in
//!   every location, and two empty locations are an exact match.
//!
//! Scores are additive and unbounded. [`find_matches`] keeps only open,
//! same-category candidates with a positive score and ranks them with a
//! stable descending sort.
//!
//! ## Core Types
//!
//! - [`Matchable`]: category + details + location; implemented for
//!   [`ingest::Item`] and for [`MatchProbe`].
//! - [`MatchConfig`]: `max_results`, `min_score`, `explain`.
//! - [`MatchHit`]: rank, score, the candidate item and an optional
//!   [`ScoreBreakdown`].
//! - [`Matcher`]: store-aware front end with tracing spans and a
//!   [`MatchMetrics`] hook.
//! - [`FilterQuery`]: text, category, building, floor and date-range search.
//!
//! ## Example Usage
//!
//! ```
//! use index::ItemStore;
//! use ingest::{IngestConfig, ItemKind, ReportRequest};
//! use matcher::{MatchConfig, Matcher};
//!
//! let mut store = ItemStore::new(IngestConfig::default());
//! let mut lost = ReportRequest {
//!     category: "Smartphone".into(),
//!     location: "UB, Floor 4 (Main Floor)".into(),
//!     ..Default::default()
//! };
//! lost.details.insert("brand".into(), "Apple".into());
//! let lost = store.report_item(ItemKind::Lost, lost).unwrap();
//!
//! let mut found = ReportRequest {
//!     category: "Smartphone".into(),
//!     location: "UB".into(),
//!     ..Default::default()
//! };
//! found.details.insert("brand".into(), "apple".into());
//! store.report_item(ItemKind::Found, found).unwrap();
//!
//! let matcher = Matcher::new(MatchConfig::default()).unwrap();
//! let hits = matcher.find_matches(&store, &lost);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].score, 15);
//! ```

mod engine;
mod filter;
mod metrics;
mod types;

pub use crate::engine::{find_matches, score_breakdown, score_match, Matcher};
pub use crate::filter::{filter_items, CompiledFilter, FilterQuery};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchConfig, MatchError, MatchHit, MatchProbe, Matchable, ScoreBreakdown};
