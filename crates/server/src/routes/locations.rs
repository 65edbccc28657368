use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog::{format_location, Location};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `?building=` query
#[derive(Debug, Deserialize)]
pub struct FloorsQuery {
    #[serde(default)]
    pub building: String,
}

/// `?building=&floor=` query
#[derive(Debug, Deserialize)]
pub struct LocationsQuery {
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor: String,
}

/// Catalog entry plus its display string
#[derive(Debug, Serialize)]
pub struct LocationEntry {
    #[serde(flatten)]
    pub location: Location,
    pub formatted: String,
}

pub async fn list_buildings(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.catalog.list_buildings())
}

pub async fn list_floors(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<FloorsQuery>,
) -> impl IntoResponse {
    Json(state.catalog.list_floors(&query.building))
}

pub async fn list_locations(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<LocationsQuery>,
) -> impl IntoResponse {
    let entries: Vec<LocationEntry> = state
        .catalog
        .list_locations(&query.building, &query.floor)
        .into_iter()
        .map(|location| LocationEntry {
            formatted: format_location(&location),
            location,
        })
        .collect();
    Json(entries)
}
