use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use enhancer_core::{Identifier, RedirectStore, StoreError};
use enhancer_gateway::{App, AppState};
use enhancer_generator::RandomGenerator;
use enhancer_shortener::ShortenerService;
use enhancer_storage::InMemoryRepository;
use serde_json::Value;
use tower::ServiceExt;

const BASE_URL: &str = "http://localhost:8080";

fn test_store() -> Arc<dyn RedirectStore> {
    Arc::new(ShortenerService::new(
        InMemoryRepository::new(),
        RandomGenerator::default(),
    ))
}

fn router(store: Arc<dyn RedirectStore>) -> Router {
    App::router(AppState::new(store, BASE_URL))
}

fn enhance_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/enhance")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Always reports an exhausted key space.
struct ExhaustedStore;

#[async_trait]
impl RedirectStore for ExhaustedStore {
    async fn allocate(&self, _target_url: &str) -> Result<Identifier, StoreError> {
        Err(StoreError::KeySpaceExhausted { attempts: 1000 })
    }

    async fn resolve(&self, identifier: &str) -> Result<String, StoreError> {
        Err(StoreError::NotFound(identifier.to_string()))
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router(test_store()).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn enhance_then_follow_redirect() {
    let app = router(test_store());

    let response = app
        .clone()
        .oneshot(enhance_request("url=https%3A%2F%2Fexample.com%2Fa"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    let key = body["key"].as_str().unwrap().to_string();
    assert!(Identifier::new_unchecked(&key).conforms_to(8));
    assert_eq!(body["original_url"], "https://example.com/a");
    assert_eq!(
        body["enhanced_url"],
        format!("http://localhost:8080/enhanced/{key}")
    );

    let response = app
        .oneshot(get(&format!("/enhanced/{key}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/a"
    );
}

#[tokio::test]
async fn enhance_without_url_is_bad_request() {
    let app = router(test_store());

    for body in ["", "url="] {
        let response = app.clone().oneshot(enhance_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "URL parameter is missing");
    }
}

#[tokio::test]
async fn unknown_key_is_not_found() {
    let response = router(test_store())
        .oneshot(get("/enhanced/zzzzzzzz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_key_is_bad_request() {
    let response = router(test_store())
        .oneshot(get("/enhanced/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "key is missing");
}

#[tokio::test]
async fn exhausted_key_space_is_service_unavailable() {
    let response = router(Arc::new(ExhaustedStore))
        .oneshot(enhance_request("url=https%3A%2F%2Fexample.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unrepresentable_target_is_server_error() {
    let store = test_store();
    let key = store.allocate("https://example.com/\nbad").await.unwrap();

    let response = router(store)
        .oneshot(get(&format!("/enhanced/{key}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_normalised() {
    let app = App::router(AppState::new(test_store(), "http://short.example/"));

    let response = app
        .oneshot(enhance_request("url=https%3A%2F%2Fexample.com"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let key = body["key"].as_str().unwrap();

    assert_eq!(
        body["enhanced_url"],
        format!("http://short.example/enhanced/{key}")
    );
}

#[tokio::test]
async fn enhance_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/enhance")
        .body(Body::empty())
        .unwrap();

    let response = router(test_store()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "URL parameter is missing");
}

#[tokio::test]
async fn enhance_reads_url_from_query_string() {
    let app = router(test_store());
    let request = Request::builder()
        .method("POST")
        .uri("/enhance?url=https%3A%2F%2Fexample.com%2Fq")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["original_url"], "https://example.com/q");

    let key = body["key"].as_str().unwrap();
    let response = app
        .oneshot(get(&format!("/enhanced/{key}")))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/q"
    );
}

#[tokio::test]
async fn form_body_takes_precedence_over_query_string() {
    let request = Request::builder()
        .method("POST")
        .uri("/enhance?url=https%3A%2F%2Fquery.example")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("url=https%3A%2F%2Fbody.example"))
        .unwrap();

    let response = router(test_store()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["original_url"], "https://body.example");
}

#[tokio::test]
async fn missing_key_without_trailing_slash_is_bad_request() {
    let response = router(test_store())
        .oneshot(get("/enhanced"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "key is missing");
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let response = router(test_store())
        .oneshot(get("/no/such/route"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "route not found");
}
