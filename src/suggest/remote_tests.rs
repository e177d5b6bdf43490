//! Tests for the remote client wire schema and error taxonomy

use super::*;
use serde_json::json;

/// Helper to run async tests with a tokio runtime
fn run_async<F: std::future::Future>(f: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    rt.block_on(f)
}

// =========================================================================
// Wire Schema Tests
// =========================================================================

#[test]
fn test_reply_request_serialization() {
    let request = ReplyRequest {
        context: "see you soon".to_string(),
        tone: "casual".to_string(),
        language_mode: "english".to_string(),
        count: 3,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "context": "see you soon",
            "tone": "casual",
            "language_mode": "english",
            "count": 3,
        })
    );
}

#[test]
fn test_rewrite_request_serialization() {
    let request = RewriteRequest {
        text: "nenu vachanu".to_string(),
        tone: "professional".to_string(),
        language_mode: "romanized".to_string(),
        count: 3,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "text": "nenu vachanu",
            "tone": "professional",
            "language_mode": "romanized",
            "count": 3,
        })
    );
}

#[test]
fn test_reply_response_parsing() {
    let response: ReplyResponse = serde_json::from_value(json!({
        "suggestions": ["a", "b", "c"],
        "language_used": "telugu",
    }))
    .unwrap();
    assert_eq!(response.suggestions, vec!["a", "b", "c"]);
    assert_eq!(response.language_used.as_deref(), Some("telugu"));
}

#[test]
fn test_reply_response_language_used_is_optional() {
    let response: ReplyResponse =
        serde_json::from_value(json!({ "suggestions": ["a"] })).unwrap();
    assert!(response.language_used.is_none());
}

#[test]
fn test_rewrite_response_parsing() {
    let response: RewriteResponse =
        serde_json::from_value(json!({ "rewrites": ["x", "y", "z"] })).unwrap();
    assert_eq!(response.rewrites, vec!["x", "y", "z"]);
}

#[test]
fn test_error_body_parsing() {
    let body: ErrorBody = serde_json::from_value(json!({
        "error": "rate limit exceeded",
        "code": "RATE_LIMITED",
    }))
    .unwrap();
    assert_eq!(body.error, "rate limit exceeded");
    assert_eq!(body.code.as_deref(), Some("RATE_LIMITED"));

    let bare: ErrorBody = serde_json::from_value(json!({ "error": "oops" })).unwrap();
    assert!(bare.code.is_none());
}

#[test]
fn test_malformed_response_is_parse_error() {
    let result: Result<ReplyResponse, _> =
        serde_json::from_str("{\"unexpected\": true}");
    assert!(result.is_err());
}

// =========================================================================
// Error Display Tests
// =========================================================================

#[test]
fn test_error_messages() {
    let api = RemoteError::Api {
        code: 429,
        message: "rate limit exceeded [RATE_LIMITED]".to_string(),
    };
    assert!(api.to_string().contains("429"));
    assert!(api.to_string().contains("rate limit"));

    assert_eq!(RemoteError::Timeout.to_string(), "request timed out");
    assert_eq!(RemoteError::Cancelled.to_string(), "request cancelled");
}

// =========================================================================
// Mock Client Tests
// =========================================================================

#[test]
fn test_mock_client_echoes_request_text() {
    run_async(async {
        let client = mock::MockClient::instant();
        let token = tokio_util::sync::CancellationToken::new();
        let result = client.fetch("hello", &token).await.unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|s| s.contains("hello")));
    });
}

#[test]
fn test_mock_client_observes_pre_cancelled_token() {
    run_async(async {
        let client = mock::MockClient::slow(std::time::Duration::from_secs(60));
        let token = tokio_util::sync::CancellationToken::new();
        token.cancel();
        let result = client.fetch("hello", &token).await;
        assert!(matches!(result, Err(RemoteError::Cancelled)));
    });
}

#[test]
fn test_mock_client_failure() {
    run_async(async {
        let client = mock::MockClient::failing();
        let token = tokio_util::sync::CancellationToken::new();
        let result = client.fetch("hello", &token).await;
        assert!(matches!(result, Err(RemoteError::Network(_))));
    });
}
