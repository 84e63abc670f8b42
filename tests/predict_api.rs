use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use spamguard::{
    classifier::{Classifier, ClassifierError},
    config::RateLimitConfig,
    http::{rate_limit::ClientRateLimits, router, AppState},
    text::StopWords,
};

/// Deterministic stand-in for the trained model.
struct StubClassifier {
    label: u8,
}

impl Classifier for StubClassifier {
    fn predict(&self, batch: &[String]) -> Result<Vec<u8>, ClassifierError> {
        Ok(vec![self.label; batch.len()])
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _batch: &[String]) -> Result<Vec<u8>, ClassifierError> {
        Err(ClassifierError::Invocation(
            "model backend offline".to_string(),
        ))
    }
}

fn test_router(classifier: impl Classifier + 'static, limits: RateLimitConfig) -> Router {
    let state = Arc::new(AppState {
        classifier: Arc::new(classifier),
        stopwords: Arc::new(StopWords::english()),
        limits: ClientRateLimits::new(limits),
    });
    router(state)
}

fn generous_limits() -> RateLimitConfig {
    RateLimitConfig {
        predict_per_minute: 1_000,
        per_hour: 10_000,
        per_day: 100_000,
    }
}

fn predict_request(body: &str, client: &str) -> Request<Body> {
    let addr: SocketAddr = format!("{client}:55000").parse().unwrap();
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .extension(ConnectInfo(addr))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn spam_label_when_classifier_returns_one() {
    let app = test_router(StubClassifier { label: 1 }, generous_limits());
    let response = app
        .oneshot(predict_request("message=free+prize+waiting", "10.1.0.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "prediction": "Spam" }));
}

#[tokio::test]
async fn not_spam_label_when_classifier_returns_zero() {
    let app = test_router(StubClassifier { label: 0 }, generous_limits());
    let response = app
        .oneshot(predict_request("message=see+you+at+lunch", "10.1.0.2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "prediction": "Not Spam" }));
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let app = test_router(StubClassifier { label: 1 }, generous_limits());
    let response = app
        .oneshot(predict_request("", "10.1.0.3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Message is required" }));
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let app = test_router(StubClassifier { label: 1 }, generous_limits());
    let response = app
        .oneshot(predict_request("message=", "10.1.0.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn whitespace_only_message_fails_validation() {
    let app = test_router(StubClassifier { label: 1 }, generous_limits());
    let response = app
        .oneshot(predict_request("message=+++", "10.1.0.5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Input cannot be empty" }));
}

#[tokio::test]
async fn oversized_message_fails_validation() {
    let app = test_router(StubClassifier { label: 1 }, generous_limits());
    let long = "a".repeat(10_001);
    let response = app
        .oneshot(predict_request(&format!("message={long}"), "10.1.0.6"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Input text is too long" }));
}

#[tokio::test]
async fn classifier_failure_yields_generic_internal_error() {
    let app = test_router(FailingClassifier, generous_limits());
    let response = app
        .oneshot(predict_request("message=anything+at+all", "10.1.0.7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "error": "An unexpected error occurred" })
    );
    // internal detail must never leak
    assert!(!body.to_string().contains("model backend offline"));
}

#[tokio::test]
async fn eleventh_request_in_a_minute_is_rate_limited() {
    let limits = RateLimitConfig {
        predict_per_minute: 10,
        per_hour: 10_000,
        per_day: 100_000,
    };
    let app = test_router(StubClassifier { label: 0 }, limits);

    for _ in 0..10 {
        let response = app
            .clone()
            .oneshot(predict_request("message=hello+there+friend", "10.2.0.1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(predict_request("message=hello+there+friend", "10.2.0.1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn rate_limits_do_not_leak_across_clients() {
    let limits = RateLimitConfig {
        predict_per_minute: 1,
        per_hour: 10_000,
        per_day: 100_000,
    };
    let app = test_router(StubClassifier { label: 0 }, limits);

    let first = app
        .clone()
        .oneshot(predict_request("message=hello+there", "10.3.0.1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let throttled = app
        .clone()
        .oneshot(predict_request("message=hello+there", "10.3.0.1"))
        .await
        .unwrap();
    assert_eq!(throttled.status(), StatusCode::TOO_MANY_REQUESTS);

    let other_client = app
        .oneshot(predict_request("message=hello+there", "10.3.0.2"))
        .await
        .unwrap();
    assert_eq!(other_client.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_enveloped_not_found() {
    let app = test_router(StubClassifier { label: 0 }, generous_limits());
    let addr: SocketAddr = "10.4.0.1:55000".parse().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri("/no-such-route")
        .extension(ConnectInfo(addr))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], 404);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn wrong_method_on_predict_returns_enveloped_405() {
    let app = test_router(StubClassifier { label: 0 }, generous_limits());
    let addr: SocketAddr = "10.4.0.2:55000".parse().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri("/predict")
        .extension(ConnectInfo(addr))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = json_body(response).await;
    assert_eq!(body["code"], 405);
}

#[tokio::test]
async fn index_serves_the_static_page() {
    let app = test_router(StubClassifier { label: 0 }, generous_limits());
    let addr: SocketAddr = "10.4.0.3:55000".parse().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .extension(ConnectInfo(addr))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Spam Detector"));
}
