use std::time::Instant;

use index::ItemStore;
use ingest::{Item, ItemKind};
use tracing::{debug, info, Level};

use crate::filter::{filter_items, FilterQuery};
use crate::metrics::metrics_recorder;
use crate::types::{MatchConfig, MatchError, MatchHit, MatchProbe, Matchable, ScoreBreakdown};


const EXACT_POINTS: u32 = 10;
const PARTIAL_POINTS: u32 = 5;

/// Compare two already-lowercased values: 10 when equal, 5 when one contains
/// the other, 0 otherwise. An empty value is contained in every value.
fn compare_values(a: &str, b: &str) -> u32 {
    if a == b {
        EXACT_POINTS
    } else if a.contains(b) || b.contains(a) {
        PARTIAL_POINTS
    } else {
        0
    }
}

/// Score `b` against `a`, signal by signal.
///
/// Only `a`'s detail keys are visited, and a key is skipped when `b` has no
/// value for it. The location is always compared. Swapping the arguments
/// gives the same total unless `a` carries an empty detail value that `b`
/// fills in: that key earns a partial match one way and is skipped the other.
pub fn score_breakdown<A, B>(a: &A, b: &B) -> ScoreBreakdown
where
    A: Matchable + ?Sized,
    B: Matchable + ?Sized,
{
    let mut breakdown = ScoreBreakdown::default();
    if a.category() != b.category() {
        return breakdown;
    }

    let other = b.details();
    for (key, value) in a.details() {
        let Some(candidate) = other.get(key).filter(|value| !value.is_empty()) else {
            continue;
        };
        match compare_values(&value.to_lowercase(), &candidate.to_lowercase()) {
            EXACT_POINTS => {
                breakdown.detail_points += EXACT_POINTS;
                breakdown.exact_keys.push(key.clone());
            }
            PARTIAL_POINTS => {
                breakdown.detail_points += PARTIAL_POINTS;
                breakdown.partial_keys.push(key.clone());
            }
            _ => {}
        }
    }

    breakdown.location_points =
        compare_values(&a.location().to_lowercase(), &b.location().to_lowercase());
    breakdown
}

/// Additive similarity score; 0 whenever the categories differ.
pub fn score_match<A, B>(a: &A, b: &B) -> u32
where
    A: Matchable + ?Sized,
    B: Matchable + ?Sized,
{
    score_breakdown(a, b).total()
}

/// Rank the open, same-category `candidates` against `reference`.
///
/// Zero-score candidates are dropped. The sort is stable, so equal scores
/// keep their collection order. The list is never truncated.
pub fn find_matches<M>(reference: &M, candidates: &[Item]) -> Vec<MatchHit>
where
    M: Matchable + ?Sized,
{
    rank(reference, candidates, 1, false)
}

fn rank<M>(reference: &M, candidates: &[Item], min_score: u32, explain: bool) -> Vec<MatchHit>
where
    M: Matchable + ?Sized,
{
    let category = reference.category();
    let mut scored: Vec<(u32, Option<ScoreBreakdown>, &Item)> = candidates
        .iter()
        .filter(|candidate| candidate.is_open() && candidate.category == category)
        .filter_map(|candidate| {
            let breakdown = score_breakdown(reference, candidate);
            let score = breakdown.total();
            (score > 0 && score >= min_score)
                .then(|| (score, explain.then_some(breakdown), candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (score, explanation, item))| MatchHit {
            rank: idx + 1,
            score,
            item: item.clone(),
            explanation,
        })
        .collect()
}

/// Store-aware matcher: applies [`MatchConfig`] policy, tracing and metrics
/// on top of [`find_matches`] and [`filter_items`].
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Match a stored item against the opposite collection.
    pub fn find_matches(&self, store: &ItemStore, reference: &Item) -> Vec<MatchHit> {
        self.run(store, reference, reference.kind.opposite(), Some(reference.id.as_str()))
    }

    /// Look up `id` in the `kind` collection and match it against the opposite one.
    pub fn find_matches_for(
        &self,
        store: &ItemStore,
        kind: ItemKind,
        id: &str,
    ) -> Result<Vec<MatchHit>, MatchError> {
        let reference = store.get_item(kind, id)?;
        Ok(self.find_matches(store, reference))
    }

    /// Rank the `candidate_kind` collection against an ad-hoc probe.
    pub fn search(
        &self,
        store: &ItemStore,
        probe: &MatchProbe,
        candidate_kind: ItemKind,
    ) -> Vec<MatchHit> {
        self.run(store, probe, candidate_kind, None)
    }

    /// Filter a store collection; see [`filter_items`].
    pub fn filter_items(&self, store: &ItemStore, kind: ItemKind, query: &FilterQuery) -> Vec<Item> {
        let out = filter_items(store.items(kind), query);
        debug!(kind = %kind, hit_count = out.len(), "filter_items");
        out
    }

    fn run<M>(
        &self,
        store: &ItemStore,
        reference: &M,
        candidate_kind: ItemKind,
        reference_id: Option<&str>,
    ) -> Vec<MatchHit>
    where
        M: Matchable + ?Sized,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.find_matches",
            candidate_kind = %candidate_kind,
            category = %reference.category(),
        );
        let _guard = span.enter();

        let candidates = store.items(candidate_kind);
        let mut hits = rank(reference, candidates, self.cfg.min_score, self.cfg.explain);
        let ranked = hits.len();
        if let Some(limit) = self.cfg.max_results {
            hits.truncate(limit);
        }

        let latency = start.elapsed();
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(candidate_kind, latency, hits.len());
        }
        info!(
            reference_id = reference_id.unwrap_or("probe"),
            scanned = candidates.len(),
            ranked,
            hit_count = hits.len(),
            top_score = hits.first().map(|hit| hit.score).unwrap_or(0),
            elapsed_micros = latency.as_micros(),
            "match_complete"
        );
        hits
    }
}
