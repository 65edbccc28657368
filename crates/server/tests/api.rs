//! HTTP round trips through the full router (middleware included).

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog::{Location, LocationCatalog};
use server::{
    build_router, CatalogConfig, ChatIntent, IntentClassifier, ServerConfig, ServerState,
};

fn test_state(seed: bool) -> ServerState {
    let config = ServerConfig {
        seed_sample_data: seed,
        ..ServerConfig::default()
    };
    ServerState::new(config).expect("Failed to create test state")
}

fn test_app(seed: bool) -> Router {
    build_router(Arc::new(test_state(seed)))
}

/// Classifier that always answers the same way, or always fails.
struct FixedClassifier(Option<ChatIntent>);

#[async_trait]
impl IntentClassifier for FixedClassifier {
    async fn classify(&self, _message: &str) -> anyhow::Result<ChatIntent> {
        self.0
            .ok_or_else(|| anyhow::anyhow!("classifier backend unreachable"))
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn iphone_report(location: &str, color: &str) -> Value {
    json!({
        "person_name": "John Doe",
        "contact_info": "john@example.com",
        "category": "Smartphone",
        "event_time": "2023-04-15 14:30",
        "location": location,
        "details": {"brand": "Apple", "model": "iPhone 13", "color": color},
        "additional_info": "Has a cracked screen protector"
    })
}

#[tokio::test]
async fn health_and_info_endpoints_respond() {
    let app = test_app(false);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["api_version"], "v1");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"]["lost"], 0);
}

#[tokio::test]
async fn metrics_endpoint_is_hidden_without_recorder() {
    let app = test_app(false);
    let (status, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = test_app(false);
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn report_then_match_round_trip() {
    let app = test_app(false);

    let (status, lost) = send(
        &app,
        Method::POST,
        "/api/v1/items/lost",
        Some(iphone_report("UB, Floor 4 (Main Floor)", "Black")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lost["status"], "OPEN");
    assert_eq!(lost["category"], "Smartphone");
    let lost_id = lost["id"].as_str().unwrap().to_string();

    let (status, found) = send(
        &app,
        Method::POST,
        "/api/v1/items/found",
        Some(iphone_report("UB", "black")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let found_id = found["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/items/lost/{lost_id}/matches"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidate_kind"], "found");
    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["matches"][0]["score"], 35);
    assert_eq!(body["matches"][0]["rank"], 1);
    assert_eq!(body["matches"][0]["item"]["id"], found_id.as_str());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/items/found/{found_id}/status"),
        Some(json!({"status": "MATCHED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "MATCHED");

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/items/lost/{lost_id}/matches"),
        None,
    )
    .await;
    assert_eq!(body["total_matches"], 0);
}

#[tokio::test]
async fn invalid_category_is_rejected_with_400() {
    let app = test_app(false);
    let mut report = iphone_report("Library", "Blue");
    report["category"] = json!("Umbrella");

    let (status, body) = send(&app, Method::POST, "/api/v1/items/lost", Some(report)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REPORT");
}

#[tokio::test]
async fn unknown_kind_and_item_are_reported() {
    let app = test_app(false);

    let (status, body) = send(&app, Method::GET, "/api/v1/items/stolen", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/items/lost/does-not-exist/status",
        Some(json!({"status": "CLOSED"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, Method::GET, "/api/v1/items/found/nope/matches", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_filters_seeded_collection() {
    let app = test_app(true);

    let (status, body) = send(&app, Method::GET, "/api/v1/items/lost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (_, body) = send(&app, Method::GET, "/api/v1/items/lost?category=Wallet", None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["category"], "Wallet");

    let (_, body) = send(&app, Method::GET, "/api/v1/items/found?q=library", None).await;
    assert_eq!(body["total"], 1);

    let (status, body) = send(&app, Method::GET, "/api/v1/items/lost?category=Umbrella", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].as_str().unwrap().contains("Umbrella"));

    // Blank category means no category filter.
    let (status, body) = send(&app, Method::GET, "/api/v1/items/lost?category=%20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn probe_search_ranks_found_items() {
    let app = test_app(true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/match",
        Some(json!({
            "category": "smartphone",
            "details": {"brand": "Apple"},
            "kind": "found",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidate_kind"], "found");
    assert!(body["total_matches"].as_u64().unwrap() >= 1);
    assert_eq!(body["matches"][0]["item"]["category"], "Smartphone");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/match",
        Some(json!({"category": "Smartphone", "limit": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_walk() {
    let app = test_app(false);

    let (status, body) = send(&app, Method::GET, "/api/v1/locations/floors?building=UB", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["1", "2", "4", "6"]));

    let (_, body) = send(&app, Method::GET, "/api/v1/locations/floors?building=Nowhere", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/api/v1/locations?building=UB&floor=4", None).await;
    assert_eq!(body[0]["building_name"], "UB");
    assert_eq!(body[0]["formatted"], "UB, Floor 4 (Entrance Lobby)");

    let (_, body) = send(&app, Method::GET, "/api/v1/categories", None).await;
    assert_eq!(body.as_array().unwrap().len(), 9);
    assert_eq!(body[0]["name"], "Smartphone");
}

#[tokio::test]
async fn chat_routes_by_keyword() {
    let app = test_app(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat",
        Some(json!({"message": "I think I lost my keys"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "report_lost");
    assert!(body["reply"].as_str().unwrap().contains("Lost Items"));

    let (status, _) = send(&app, Method::POST, "/api/v1/chat", Some(json!({"message": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_uses_installed_classifier() {
    let state = test_state(false).with_classifier(Arc::new(FixedClassifier(Some(ChatIntent::Search))));
    let app = build_router(Arc::new(state));

    // Keyword rules would say report_lost; the installed classifier wins.
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat",
        Some(json!({"message": "I lost my wallet"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent"], "search");
    assert_eq!(body["reply"], ChatIntent::Search.reply());
}

#[tokio::test]
async fn chat_classifier_failure_is_bad_gateway() {
    let state = test_state(false).with_classifier(Arc::new(FixedClassifier(None)));
    let app = build_router(Arc::new(state));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/chat",
        Some(json!({"message": "hello"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "CHAT_ERROR");
}

#[tokio::test]
async fn configured_catalog_replaces_campus_defaults() {
    let config = ServerConfig {
        catalog: CatalogConfig {
            locations: Some(vec![
                Location::new("Annex", "2", "Print Room"),
                Location::new("Annex", "Ground", "Mail Room"),
            ]),
        },
        ..ServerConfig::default()
    };
    let app = build_router(Arc::new(ServerState::new(config).unwrap()));

    let (status, body) = send(&app, Method::GET, "/api/v1/locations/buildings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Annex"]));

    let (_, body) = send(&app, Method::GET, "/api/v1/locations/floors?building=Annex", None).await;
    assert_eq!(body, json!(["Ground", "2"]));
}

#[tokio::test]
async fn catalog_can_be_swapped_on_state() {
    let catalog = LocationCatalog::with_locations(vec![Location::new("Gym", "", "Locker Room")]);
    let app = build_router(Arc::new(test_state(false).with_catalog(catalog)));

    let (_, body) = send(&app, Method::GET, "/api/v1/locations/buildings", None).await;
    assert_eq!(body, json!(["Gym"]));

    let (_, body) = send(&app, Method::GET, "/api/v1/locations?building=Gym&floor=", None).await;
    assert_eq!(body[0]["formatted"], "Gym (Locker Room)");
}
