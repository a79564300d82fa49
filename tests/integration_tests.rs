//! Integration tests using an in-process axum router
//!
//! Tests the full handler flow: query string → PageRequest → result set → next-page link

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_paging::pagination::{get_pagination_type, CURSOR_TYPE, OFFSET_TYPE};
use http_paging::{CursorRecord, CursorValue, Options, PageRequest, PaginationType, Result};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Debug, Clone, Serialize)]
struct Event {
    id: i64,
    occurred_at: DateTime<Utc>,
}

impl CursorRecord for Event {
    fn cursor_field(&self, field: &str) -> Option<CursorValue> {
        match field {
            "id" => Some(self.id.into()),
            "occurred_at" => Some(self.occurred_at.into()),
            _ => None,
        }
    }
}

fn events() -> Vec<Event> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (1..=25)
        .map(|id| Event {
            id,
            occurred_at: start + Duration::hours(id),
        })
        .collect()
}

/// Stand-in for the handler's own query
fn fetch(page: &PageRequest) -> Vec<Event> {
    let limit = page.limit as usize;
    match page.pagination_type {
        PaginationType::Offset => events()
            .into_iter()
            .skip(page.offset as usize)
            .take(limit)
            .collect(),
        PaginationType::Cursor => events()
            .into_iter()
            .filter(|event| event.id > page.cursor)
            .take(limit)
            .collect(),
    }
}

async fn list_events(State(options): State<Options>, page: PageRequest) -> Result<Json<Value>> {
    let data = fetch(&page);
    let next = page.next_uri(&data, "id", &options)?;
    Ok(Json(json!({
        "type": page.pagination_type,
        "data": data,
        "next": next,
    })))
}

async fn list_by_time(State(options): State<Options>, page: PageRequest) -> Result<Json<Value>> {
    let data = fetch(&page);
    let next = page.next_uri(&data, "occurred_at", &options)?;
    Ok(Json(json!({ "next": next })))
}

async fn list_broken(State(options): State<Options>, page: PageRequest) -> Result<Json<Value>> {
    let data = fetch(&page);
    let next = page.next_uri(&data, "missing", &options)?;
    Ok(Json(json!({ "next": next })))
}

fn app(options: Options) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/by-time", get(list_by_time))
        .route("/events/broken", get(list_broken))
        .with_state(options)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Offset Pagination
// ============================================================================

#[tokio::test]
async fn test_offset_pagination() {
    let (status, body) = get_json(app(Options::default()), "/events?limit=10&offset=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], OFFSET_TYPE);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["id"], 21);
    assert_eq!(body["next"], "?limit=10&offset=30");
}

#[tokio::test]
async fn test_default_limit() {
    let options = Options::new().with_default_limit(4);
    let (status, body) = get_json(app(options), "/events?limit=oops").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["next"], "?limit=4&offset=4");
}

#[tokio::test]
async fn test_max_limit_clamps() {
    let options = Options::new().with_max_limit(3);
    let (_, body) = get_json(app(options), "/events?limit=500").await;

    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["next"], "?limit=3&offset=3");
}

// ============================================================================
// Cursor Pagination
// ============================================================================

#[tokio::test]
async fn test_cursor_pagination_walks_all_pages() {
    let options = Options::default();
    let mut uri = "/events?limit=10&cursor=1".to_string();
    let mut seen = Vec::new();

    loop {
        let (status, body) = get_json(app(options.clone()), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], CURSOR_TYPE);

        let data = body["data"].as_array().unwrap();
        if data.is_empty() {
            // Empty page: zero cursor sentinel
            assert_eq!(body["next"], "?limit=10&cursor=0");
            break;
        }
        seen.extend(data.iter().map(|event| event["id"].as_i64().unwrap()));

        let next = body["next"].as_str().unwrap();
        assert_eq!(get_pagination_type(next, Some(&options)), PaginationType::Cursor);
        uri = format!("/events{next}");
    }

    assert_eq!(seen, (2..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_timestamp_cursor() {
    let (status, body) = get_json(app(Options::default()), "/events/by-time?limit=2&cursor=1").await;

    assert_eq!(status, StatusCode::OK);
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap().timestamp();
    assert_eq!(body["next"], format!("?limit=2&cursor={expected}"));
}

#[tokio::test]
async fn test_custom_key_names() {
    let options = Options::new()
        .with_limit_key_name("per_page")
        .with_cursor_key_name("after");
    let (_, body) = get_json(app(options), "/events?per_page=2&after=5").await;

    assert_eq!(body["data"][0]["id"], 6);
    assert_eq!(body["next"], "?per_page=2&after=7");
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_negative_limit_rejected() {
    let (status, body) = get_json(app(Options::default()), "/events?limit=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Invalid pagination parameters: limit=-1, marker=0"
    );
}

#[tokio::test]
async fn test_negative_offset_rejected() {
    let (status, _) = get_json(app(Options::default()), "/events?offset=-10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_field_is_server_error() {
    let (status, body) = get_json(app(Options::default()), "/events/broken?cursor=3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("missing"));
}
