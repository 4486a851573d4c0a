use std::collections::HashMap;

use dial_client::{
    ChatModel, ChatRole, DialError, DialSettings, LlmClient, Message, MessageInput,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn settings_for(server: &MockServer) -> DialSettings {
    DialSettings {
        api_key: "test-key".to_string(),
        api_url: server.uri(),
        ..DialSettings::default()
    }
}

fn user_message(content: &str) -> MessageInput {
    Message {
        role: ChatRole::User,
        content: content.to_string(),
    }
    .into()
}

fn completion_response(content: &str, prompt_tokens: u32, completion_tokens: u32) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": prompt_tokens,
            "completion_tokens": completion_tokens,
            "total_tokens": prompt_tokens + completion_tokens
        }
    }))
}

async fn mount_completions(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4/chat/completions"))
        .and(query_param("api-version", "2024-02-15-preview"))
        .and(header("api-key", "test-key"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn request_body(request: &wiremock::Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}

#[tokio::test]
async fn generate_maps_content_model_and_usage() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("Hi there", 5, 3)).await;

    let client = LlmClient::new(settings_for(&server));
    let completion = client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect("completion");

    assert_eq!(completion.content, "Hi there");
    assert_eq!(completion.model, "gpt-4");
    assert_eq!(completion.usage.prompt_tokens, 5);
    assert_eq!(completion.usage.completion_tokens, 3);
    assert_eq!(
        completion.usage.total_tokens,
        completion.usage.prompt_tokens + completion.usage.completion_tokens
    );
}

#[tokio::test]
async fn request_carries_model_messages_temperature_and_cap() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("ok", 1, 1)).await;

    let client = LlmClient::new(settings_for(&server));
    client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect("completion");

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert_eq!(requests.len(), 1);

    let body = request_body(&requests[0]);
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"], json!([{ "role": "user", "content": "Hello" }]));
    assert_eq!(body["temperature"], 0.0);
    assert_eq!(body["max_tokens"], 1000);
}

#[tokio::test]
async fn temperature_override_applies_to_a_single_call_only() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("ok", 1, 1)).await;

    let client = LlmClient::new(settings_for(&server));
    client
        .generate(vec![user_message("first")], Some(0.5))
        .await
        .expect("overridden call");
    client
        .generate(vec![user_message("second")], None)
        .await
        .expect("default call");

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert_eq!(requests.len(), 2);
    assert_eq!(request_body(&requests[0])["temperature"], 0.5);
    assert_eq!(request_body(&requests[1])["temperature"], 0.0);
}

#[tokio::test]
async fn raw_pairs_and_typed_messages_dispatch_identically() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("ok", 1, 1)).await;

    let raw: HashMap<String, String> = [
        ("role".to_string(), "user".to_string()),
        ("content".to_string(), "Hello".to_string()),
    ]
    .into();

    let client = LlmClient::new(settings_for(&server));
    client
        .generate(vec![raw.into()], None)
        .await
        .expect("completion");
    client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect("completion");

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert_eq!(requests.len(), 2);
    assert_eq!(
        request_body(&requests[0])["messages"],
        request_body(&requests[1])["messages"]
    );
}

#[tokio::test]
async fn malformed_message_aborts_before_any_network_activity() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("never", 1, 1)).await;

    let missing_content: HashMap<String, String> =
        [("role".to_string(), "user".to_string())].into();

    let client = LlmClient::new(settings_for(&server));
    let err = client
        .generate(vec![missing_content.into()], None)
        .await
        .expect_err("missing content key");

    assert!(matches!(err, DialError::InvalidMessage { index: 0, .. }));

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn auth_failure_surfaces_as_a_single_call_error() {
    let server = MockServer::start().await;
    mount_completions(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "invalid api key" }
        })),
    )
    .await;

    let client = LlmClient::new(settings_for(&server));
    let err = client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect_err("unauthorized");

    match err {
        DialError::Call(cause) => {
            assert!(cause.contains("401"));
            assert!(cause.contains("invalid api key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn server_error_surfaces_as_a_single_call_error() {
    let server = MockServer::start().await;
    mount_completions(&server, ResponseTemplate::new(500).set_body_string("upstream down")).await;

    let client = LlmClient::new(settings_for(&server));
    let err = client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect_err("server error");

    assert!(matches!(err, DialError::Call(_)));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn undecodable_body_surfaces_as_a_single_call_error() {
    let server = MockServer::start().await;
    mount_completions(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let client = LlmClient::new(settings_for(&server));
    let err = client
        .generate(vec![user_message("Hello")], None)
        .await
        .expect_err("undecodable body");

    assert!(matches!(err, DialError::Call(_)));
}

#[tokio::test]
async fn empty_message_list_is_forwarded_to_the_provider() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("ok", 1, 1)).await;

    let client = LlmClient::new(settings_for(&server));
    client.generate(vec![], None).await.expect("completion");

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(request_body(&requests[0])["messages"], json!([]));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("ok", 2, 2)).await;

    let client = LlmClient::new(settings_for(&server));
    let (first, second) = tokio::join!(
        client.generate(vec![user_message("one")], None),
        client.generate(vec![user_message("two")], Some(0.5)),
    );

    assert_eq!(first.expect("first call").content, "ok");
    assert_eq!(second.expect("second call").content, "ok");
}

#[tokio::test]
async fn chat_model_handle_round_trips_on_shared_settings() {
    let server = MockServer::start().await;
    mount_completions(&server, completion_response("Hi there", 5, 3)).await;

    let client = LlmClient::new(settings_for(&server));
    let handle = client.chat_model().expect("chat model handle");

    let completion = handle
        .chat(vec![Message {
            role: ChatRole::User,
            content: "Hello".to_string(),
        }])
        .await
        .expect("completion");

    assert_eq!(completion.content, "Hi there");
    assert_eq!(completion.usage.total_tokens, 8);

    let requests = server
        .received_requests()
        .await
        .expect("mock server should record requests");
    assert_eq!(request_body(&requests[0])["temperature"], 0.0);
}
