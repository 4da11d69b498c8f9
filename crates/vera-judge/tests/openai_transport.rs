//! `OpenAiTransport` against a local mock of the chat completions API.

use std::sync::Arc;

use serde_json::json;
use vera_config::JudgeConfig;
use vera_core::JudgeOutcome;
use vera_judge::{Judge, JudgeError, JudgeRequest, JudgeTransport, OpenAiTransport};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> JudgeConfig {
    JudgeConfig {
        api_key: "sk-test".into(),
        base_url: format!("{}/v1", server.uri()),
        timeout_secs: 2,
        ..JudgeConfig::default()
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
}

fn request() -> JudgeRequest {
    JudgeRequest {
        model: "gpt-3.5-turbo".into(),
        system_prompt: "system".into(),
        user_prompt: "user".into(),
        temperature: 0.1,
        max_tokens: 500,
    }
}

#[tokio::test]
async fn sends_bearer_auth_and_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "gpt-3.5-turbo", "max_tokens": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let transport = OpenAiTransport::from_config(&config_for(&server)).unwrap();
    let content = transport.complete(&request()).await.unwrap();
    assert_eq!(content, "hello");
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let transport = OpenAiTransport::from_config(&config_for(&server)).unwrap();
    let err = transport.complete(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Api { status: 500, ref message } if message == "upstream down"));
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let transport = OpenAiTransport::from_config(&config_for(&server)).unwrap();
    let err = transport.complete(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::RateLimited { retry_after_secs: 7 }));
}

#[tokio::test]
async fn empty_choices_is_envelope_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let transport = OpenAiTransport::from_config(&config_for(&server)).unwrap();
    let err = transport.complete(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Envelope(_)));
}

#[tokio::test]
async fn slow_server_times_out_as_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("{}"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = JudgeConfig {
        timeout_secs: 1,
        ..config_for(&server)
    };
    let judge = Judge::from_config(&config).unwrap();
    let outcome = judge.evaluate("slow news", 2000).await;
    assert!(matches!(outcome, JudgeOutcome::Failed { .. }));
}

#[tokio::test]
async fn judge_parses_reply_end_to_end() {
    let server = MockServer::start().await;
    let reply = r#"Analysis: {"credibility_score": 12.4, "is_likely_fake": true, "confidence": 91, "red_flags": ["Miracle cure claims"], "green_flags": [], "reasoning": "No sources cited", "recommendations": "Consult a doctor"}"#;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(reply)))
        .mount(&server)
        .await;

    let judge = Judge::from_config(&config_for(&server)).unwrap();
    assert!(judge.is_available());
    match judge.evaluate("Lemon water cures everything", 2000).await {
        JudgeOutcome::Opinion { opinion, raw_text } => {
            assert_eq!(opinion.credibility_score, 12);
            assert!(opinion.is_likely_fake);
            assert_eq!(opinion.red_flags, vec!["Miracle cure claims"]);
            assert_eq!(opinion.recommendation, "Consult a doctor");
            assert_eq!(raw_text, reply);
        }
        other => panic!("expected opinion, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_is_object_safe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("plain words")))
        .mount(&server)
        .await;

    let transport: Arc<dyn JudgeTransport> =
        Arc::new(OpenAiTransport::from_config(&config_for(&server)).unwrap());
    let judge = Judge::with_transport(&config_for(&server), Some(transport));
    let outcome = judge.evaluate("x", 10).await;
    let opinion = outcome.opinion().expect("opinion");
    assert_eq!(opinion.red_flags, vec!["Unable to parse detailed analysis"]);
}
