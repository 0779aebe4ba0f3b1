//! Integration tests for the HTTP client against a mocked classification service

use sentiscope_sdk::{SdkError, SentimentClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analysis_body(score: i64, label: &str, emoji: &str) -> serde_json::Value {
    json!({
        "text": "sample",
        "sentiment_score": score,
        "sentiment_label": label,
        "emoji": emoji,
        "confidence": 0.8,
        "probabilities": {
            "-3 (Very Negative)": 0.02,
            "-2 (Negative)": 0.02,
            "-1 (Slightly Negative)": 0.02,
            "+0 (Neutral)": 0.04,
            "+1 (Slightly Positive)": 0.05,
            "+2 (Positive)": 0.05,
            "+3 (Very Positive)": 0.8
        }
    })
}

/// Address nothing listens on
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_health_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "model_loaded": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let health = client.check_health().await.unwrap();
    assert_eq!(health.status.as_deref(), Some("healthy"));
    assert_eq!(health.model_loaded, Some(true));
}

#[tokio::test]
async fn test_health_ignores_payload_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    assert!(client.check_health().await.is_ok());
}

#[tokio::test]
async fn test_health_failure_status_is_connectivity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client.check_health().await.unwrap_err();
    assert!(matches!(err, SdkError::Connectivity(_)));
    assert_eq!(err.user_message(), "Failed to connect to API");
}

#[tokio::test]
async fn test_health_connection_refused() {
    let client = SentimentClient::new(closed_port_url()).unwrap();
    let err = client.check_health().await.unwrap_err();
    assert!(matches!(err, SdkError::Connectivity(_)));
}

#[tokio::test]
async fn test_analyze_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "Loved it"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(analysis_body(3, "Very Positive", "🤩")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let response = client.analyze("Loved it").await.unwrap();
    assert_eq!(response.sentiment_score, 3);
    assert_eq!(response.probabilities.unwrap().len(), 7);
}

#[tokio::test]
async fn test_analyze_extracts_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"detail": "model unavailable"})),
        )
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client.analyze("anything").await.unwrap_err();
    assert!(matches!(err, SdkError::Service(_)));
    assert_eq!(err.user_message(), "model unavailable");
}

#[tokio::test]
async fn test_analyze_generic_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
        )
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client.analyze("anything").await.unwrap_err();
    assert!(matches!(err, SdkError::Service(_)));
    assert_eq!(err.user_message(), "Failed to analyze sentiment");
}

#[tokio::test]
async fn test_analyze_timeout_is_connectivity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(analysis_body(0, "Neutral", "😶"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = SentimentClient::with_timeout(server.uri(), Duration::from_millis(200)).unwrap();
    let err = client.analyze("slow").await.unwrap_err();
    assert!(matches!(err, SdkError::Connectivity(_)));
}

#[tokio::test]
async fn test_analyze_schema_mismatch_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client.analyze("anything").await.unwrap_err();
    assert!(matches!(err, SdkError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_no_retry_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    assert!(client.analyze("once").await.is_err());
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn test_batch_returns_all_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze/batch"))
        .and(body_json(json!({"texts": ["good", "bad"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            analysis_body(2, "Positive", "😊"),
            analysis_body(-2, "Negative", "😞"),
        ])))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let texts = vec!["good".to_string(), "bad".to_string()];
    let results = client.analyze_batch(&texts).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].sentiment_score, -2);
}

#[tokio::test]
async fn test_batch_failure_is_atomic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze/batch"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Error analyzing batch: boom"
        })))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client
        .analyze_batch(&["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Error analyzing batch: boom");
}

#[tokio::test]
async fn test_batch_count_mismatch_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([analysis_body(
            1,
            "Slightly Positive",
            "🙂"
        )])))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client
        .analyze_batch(&["a".to_string(), "b".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_examples_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/examples"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "-3": ["This movie was absolutely terrible!"],
            "3": ["Absolutely amazing!", "Masterpiece!"]
        })))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let examples = client.get_examples().await.unwrap();
    assert_eq!(examples.len(), 2);
    let keys: Vec<_> = examples.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["-3", "3"]);
}

#[tokio::test]
async fn test_examples_failure_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/examples"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not Found"})))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let err = client.get_examples().await.unwrap_err();
    assert!(matches!(err, SdkError::Service(_)));
    assert_eq!(err.user_message(), "Failed to load examples");

    let offline = SentimentClient::new(closed_port_url()).unwrap();
    assert!(matches!(
        offline.get_examples().await.unwrap_err(),
        SdkError::Service(_)
    ));
}

#[tokio::test]
async fn test_sentiment_scale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sentiment-scale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "-3": {"label": "Very Negative", "emoji": "😢"},
            "0": {"label": "Neutral", "emoji": "😶"},
            "3": {"label": "Very Positive", "emoji": "🤩"}
        })))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri()).unwrap();
    let scale = client.get_sentiment_scale().await.unwrap();
    assert_eq!(scale.len(), 3);
    assert_eq!(scale[&0].emoji, "😶");
}

#[tokio::test]
async fn test_base_path_is_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SentimentClient::new(format!("{}/api/", server.uri())).unwrap();
    assert!(client.check_health().await.is_ok());
}
