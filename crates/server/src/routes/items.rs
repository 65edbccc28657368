use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ingest::{attribute_label, Category, Item, ItemKind, ItemStatus, ReportRequest};
use matcher::FilterQuery;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parse the `{kind}` path segment.
pub(crate) fn parse_kind(raw: &str) -> ServerResult<ItemKind> {
    raw.parse::<ItemKind>().map_err(ServerError::BadRequest)
}

/// Query parameters for item search
#[derive(Debug, Default, Deserialize)]
pub struct ItemSearchQuery {
    /// Free text matched against details, description and location
    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub building: Option<String>,

    #[serde(default)]
    pub floor: Option<String>,

    /// Inclusive lower bound on the event time
    #[serde(default)]
    pub date_from: Option<String>,

    /// Inclusive upper bound on the event time
    #[serde(default)]
    pub date_to: Option<String>,
}

impl ItemSearchQuery {
    fn into_filter(self) -> ServerResult<FilterQuery> {
        let category = match self.category.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                raw.parse::<Category>()
                    .map_err(|err| ServerError::BadRequest(err.to_string()))?,
            ),
            _ => None,
        };
        Ok(FilterQuery {
            text: self.q,
            category,
            building: self.building,
            floor: self.floor,
            date_from: self.date_from,
            date_to: self.date_to,
        })
    }
}

/// Item list response
#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub kind: ItemKind,
    pub total: usize,
    pub items: Vec<Item>,
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ItemStatus,
}

/// Category with its suggested detail attributes
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: Category,
    pub attributes: Vec<AttributeInfo>,
}

#[derive(Debug, Serialize)]
pub struct AttributeInfo {
    pub key: &'static str,
    pub label: String,
}

/// List categories and their advisory attributes
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = Category::ALL
        .iter()
        .map(|category| CategoryInfo {
            name: *category,
            attributes: category
                .attributes()
                .iter()
                .map(|key| AttributeInfo {
                    key: *key,
                    label: attribute_label(key),
                })
                .collect(),
        })
        .collect();
    Json(categories)
}

/// File a lost or found report
pub async fn report_item(
    State(state): State<Arc<ServerState>>,
    Path(kind): Path<String>,
    Json(request): Json<ReportRequest>,
) -> ServerResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let item = state.write_store()?.report_item(kind, request)?;

    metrics::counter!("lostfound_reports_total", "kind" => kind.as_str()).increment(1);

    Ok((StatusCode::CREATED, Json(item)))
}

/// List a collection, optionally filtered
pub async fn list_items(
    State(state): State<Arc<ServerState>>,
    Path(kind): Path<String>,
    Query(query): Query<ItemSearchQuery>,
) -> ServerResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let filter = query.into_filter()?;

    let items = {
        let store = state.read_store()?;
        state.matcher.filter_items(&store, kind, &filter)
    };

    Ok(Json(ItemListResponse {
        kind,
        total: items.len(),
        items,
    }))
}

/// Get a single item
pub async fn get_item(
    State(state): State<Arc<ServerState>>,
    Path((kind, id)): Path<(String, String)>,
) -> ServerResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let item = state.read_store()?.get_item(kind, &id)?.clone();
    Ok(Json(item))
}

/// Change an item's status
pub async fn update_status(
    State(state): State<Arc<ServerState>>,
    Path((kind, id)): Path<(String, String)>,
    Json(request): Json<StatusUpdateRequest>,
) -> ServerResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let item = state
        .write_store()?
        .set_status(kind, &id, request.status)?;

    metrics::counter!(
        "lostfound_status_updates_total",
        "kind" => kind.as_str(),
        "status" => request.status.as_str()
    )
    .increment(1);

    Ok(Json(item))
}
