//! Integration tests for the `/api/books` HTTP surface.
//!
//! Every test builds its own router over a fresh seeded store and drives it
//! with `tower::ServiceExt::oneshot`, so tests never share state.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use bookshelf::{BookStore, InMemoryBookStore, ServerConfig, ServerState, build_router, seed_books};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> (Router, Arc<ServerState>) {
    let state = Arc::new(ServerState::new(ServerConfig::default()));
    (build_router(state.clone()), state)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_payload() -> Value {
    json!({
        "title": "The Rust Programming Language",
        "author": "Steve Klabnik",
        "category": "Computer Science",
        "rating": 5
    })
}

fn assert_error_shape(body: &Value, status: u16) {
    assert_eq!(body["status"], status);
    assert!(body["message"].is_string());
    assert!(body["timeStamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn list_returns_seed_books_in_order() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::GET, "/api/books", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(seed_books()).unwrap());
}

#[tokio::test]
async fn list_filters_category_case_insensitively() {
    let (app, _) = test_app();
    let (status, body) =
        send_json(&app, request(Method::GET, "/api/books?category=math", None)).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Why 1+1 Rocks", "Why 2+2 is better"]);
}

#[tokio::test]
async fn list_with_unknown_category_is_empty_array() {
    let (app, _) = test_app();
    let (status, body) =
        send_json(&app, request(Method::GET, "/api/books?category=Poetry", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_with_encoded_category() {
    let (app, _) = test_app();
    let (status, body) = send_json(
        &app,
        request(Method::GET, "/api/books?category=computer%20science", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_with_repeated_category_still_succeeds() {
    let (app, _) = test_app();
    let (status, body) = send_json(
        &app,
        request(Method::GET, "/api/books?category=math&category=history", None),
    )
    .await;

    // The values are joined into "math,history", which names no category.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_book_three() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::GET, "/api/books/3", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 3, "title": "Why 1+1 Rocks", "author": "Adil A.", "category": "Math", "rating": 5})
    );
}

#[tokio::test]
async fn get_missing_book_is_404() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::GET, "/api/books/999", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_shape(&body, 404);
    assert_eq!(body["message"], "Book not found with id: 999");
}

#[tokio::test]
async fn non_positive_id_is_400() {
    let (app, _) = test_app();
    for uri in ["/api/books/0", "/api/books/-4"] {
        let (status, body) = send_json(&app, request(Method::GET, uri, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_error_shape(&body, 400);
        assert_eq!(body["errors"][0]["field"], "id");
    }
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::DELETE, "/api/books/abc", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_shape(&body, 400);
}

#[tokio::test]
async fn create_returns_201_with_empty_body_and_location() {
    let (app, state) = test_app();
    let (status, headers, bytes) =
        send(&app, request(Method::POST, "/api/books", Some(valid_payload()))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(bytes.is_empty());
    assert_eq!(headers[header::LOCATION], "/api/books/7");

    let (status, body) = send_json(&app, request(Method::GET, "/api/books/7", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "The Rust Programming Language");
    assert_eq!(state.store.len(), 7);
}

#[tokio::test]
async fn create_then_list_contains_it_once() {
    let (app, _) = test_app();
    send(&app, request(Method::POST, "/api/books", Some(valid_payload()))).await;

    let (_, body) = send_json(&app, request(Method::GET, "/api/books", None)).await;
    let matching: Vec<&Value> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["title"] == "The Rust Programming Language")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], 7);
}

#[tokio::test]
async fn create_with_invalid_fields_is_400_and_store_unchanged() {
    let (app, state) = test_app();
    let cases = [
        json!({"title": "", "author": "A", "category": "C", "rating": 3}),
        json!({"title": "x".repeat(31), "author": "A", "category": "C", "rating": 3}),
        json!({"title": "T", "author": "A", "category": "C", "rating": 0}),
        json!({"title": "T", "author": "A", "category": "C", "rating": 6}),
    ];

    for payload in cases {
        let (status, body) =
            send_json(&app, request(Method::POST, "/api/books", Some(payload.clone()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_error_shape(&body, 400);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    }
    assert_eq!(state.store.list(), seed_books());
}

#[tokio::test]
async fn create_reports_every_violation() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::POST, "/api/books", Some(json!({})))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "author", "category", "rating"]);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (app, state) = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let (status, body) = send_json(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_shape(&body, 400);
    assert_eq!(state.store.len(), 6);
}

#[tokio::test]
async fn wrong_field_type_is_400() {
    let (app, _) = test_app();
    let payload = json!({"title": "T", "author": "A", "category": "C", "rating": "five"});
    let (status, body) = send_json(&app, request(Method::POST, "/api/books", Some(payload))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_shape(&body, 400);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_position() {
    let (app, state) = test_app();
    let payload = json!({"title": "Hibernation 101", "author": "Bob B.", "category": "Biology", "rating": 4});
    let (status, body) =
        send_json(&app, request(Method::PUT, "/api/books/4", Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 4, "title": "Hibernation 101", "author": "Bob B.", "category": "Biology", "rating": 4})
    );

    let books = state.store.list();
    assert_eq!(books.len(), 6);
    assert_eq!(books[3].id, 4);
    assert_eq!(books[3].title, "Hibernation 101");
}

#[tokio::test]
async fn update_missing_book_is_404() {
    let (app, _) = test_app();
    let (status, body) = send_json(
        &app,
        request(Method::PUT, "/api/books/999", Some(valid_payload())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_shape(&body, 404);
}

#[tokio::test]
async fn update_with_invalid_payload_is_400() {
    let (app, state) = test_app();
    let payload = json!({"title": "T", "author": "a".repeat(41), "category": "C", "rating": 2});
    let (status, body) = send_json(&app, request(Method::PUT, "/api/books/1", Some(payload))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "author");
    assert_eq!(state.store.find_by_id(1).unwrap(), seed_books()[0]);
}

#[tokio::test]
async fn delete_returns_204_then_get_is_404() {
    let (app, state) = test_app();
    let (status, _, bytes) = send(&app, request(Method::DELETE, "/api/books/5", None)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());
    assert_eq!(state.store.len(), 5);

    let (status, _) = send_json(&app, request(Method::GET, "/api/books/5", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_book_is_404_and_store_unchanged() {
    let (app, state) = test_app();
    let (status, body) = send_json(&app, request(Method::DELETE, "/api/books/999", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book not found with id: 999");
    assert_eq!(state.store.list(), seed_books());
}

#[tokio::test]
async fn unknown_route_uses_error_shape() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::GET, "/api/authors", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_shape(&body, 404);
}

#[tokio::test]
async fn unsupported_method_uses_error_shape() {
    let (app, state) = test_app();
    let (status, body) = send_json(
        &app,
        request(Method::PATCH, "/api/books/1", Some(valid_payload())),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error_shape(&body, 405);
    assert_eq!(body["message"], "Method not allowed: PATCH /api/books/1");
    assert_eq!(state.store.list(), seed_books());
}

#[tokio::test]
async fn openapi_document_lists_book_routes() {
    let (app, _) = test_app();
    let (status, body) =
        send_json(&app, request(Method::GET, "/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    let by_id = &body["paths"]["/api/books/{id}"];
    assert!(by_id["get"].is_object());
    assert!(by_id["put"].is_object());
    assert!(by_id["delete"].is_object());
    assert!(body["components"]["schemas"]["Book"].is_object());
}

#[tokio::test]
async fn health_reports_book_count() {
    let (app, _) = test_app();
    let (status, body) = send_json(&app, request(Method::GET, "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 6);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let (app, _) = test_app();
    let req = Request::builder()
        .uri("/api/books/1")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, req).await;
    assert_eq!(headers["x-request-id"], "abc-123");

    let (_, headers, _) = send(&app, request(Method::GET, "/api/books/1", None)).await;
    assert!(!headers["x-request-id"].is_empty());
}

#[tokio::test]
async fn unseeded_store_starts_ids_at_one() {
    let state = Arc::new(ServerState::with_store(
        ServerConfig::default(),
        Arc::new(InMemoryBookStore::new()),
    ));
    let app = build_router(state);

    let (_, body) = send_json(&app, request(Method::GET, "/api/books", None)).await;
    assert_eq!(body, json!([]));

    let (status, headers, _) =
        send(&app, request(Method::POST, "/api/books", Some(valid_payload()))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/api/books/1");
}
