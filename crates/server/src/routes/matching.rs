use crate::error::{ServerError, ServerResult};
use crate::routes::items::parse_kind;
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use ingest::{Category, Details, ItemKind};
use matcher::{MatchHit, MatchProbe};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for the matches endpoint
#[derive(Debug, Default, Deserialize)]
pub struct MatchesQuery {
    /// Maximum hits to return (server default when absent)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Probe search request: describe an item without filing a report.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub category: String,

    #[serde(default)]
    pub details: Details,

    #[serde(default)]
    pub location: String,

    /// Collection to search: `"lost"` or `"found"`
    #[serde(default = "default_search_kind")]
    pub kind: String,

    /// Maximum results to return
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Match response
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub candidate_kind: ItemKind,
    pub total_matches: usize,
    pub matches: Vec<MatchHit>,
}

fn default_search_kind() -> String {
    "found".to_string()
}

fn resolve_limit(state: &ServerState, requested: Option<usize>) -> ServerResult<usize> {
    match requested {
        Some(0) => Err(ServerError::BadRequest(
            "limit must be greater than zero".into(),
        )),
        Some(limit) => Ok(limit),
        None => Ok(state.config.default_match_limit),
    }
}

/// Ranked candidates for a stored item, from the opposite collection.
///
/// `total_matches` counts every positive-scoring candidate; `matches` is
/// truncated to `limit`.
pub async fn item_matches(
    State(state): State<Arc<ServerState>>,
    Path((kind, id)): Path<(String, String)>,
    Query(query): Query<MatchesQuery>,
) -> ServerResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let limit = resolve_limit(&state, query.limit)?;

    let mut hits = {
        let store = state.read_store()?;
        state.matcher.find_matches_for(&store, kind, &id)?
    };

    metrics::counter!("lostfound_match_requests_total", "source" => "item").increment(1);

    let total_matches = hits.len();
    hits.truncate(limit);
    Ok(Json(MatchResponse {
        reference_id: Some(id),
        candidate_kind: kind.opposite(),
        total_matches,
        matches: hits,
    }))
}

/// Probe search against one collection
pub async fn match_probe(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<MatchRequest>,
) -> ServerResult<impl IntoResponse> {
    let candidate_kind = parse_kind(&request.kind)?;
    let limit = resolve_limit(&state, request.limit)?;
    let category: Category = request.category.parse()?;

    let probe = MatchProbe {
        category,
        details: request.details,
        location: request.location,
    };

    let mut hits = {
        let store = state.read_store()?;
        state.matcher.search(&store, &probe, candidate_kind)
    };

    metrics::counter!("lostfound_match_requests_total", "source" => "probe").increment(1);

    let total_matches = hits.len();
    hits.truncate(limit);
    Ok(Json(MatchResponse {
        reference_id: None,
        candidate_kind,
        total_matches,
        matches: hits,
    }))
}
