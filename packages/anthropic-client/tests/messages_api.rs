// Messages API calls against a mock server.
use anthropic_client::{AnthropicClient, AnthropicError, Message, MessagesRequest};
use mockito::{Matcher, Server};
use serde_json::json;

fn request() -> MessagesRequest {
    MessagesRequest::new("claude-3-opus-20240229", 2000).message(Message::user("Extract"))
}

#[tokio::test]
async fn test_messages_sends_headers_and_returns_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "sk-ant-test")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "model": "claude-3-opus-20240229",
            "max_tokens": 2000,
            "messages": [{ "role": "user", "content": "Extract" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "text", "text": "{\"title\":\"Gala\"}" }],
                "stop_reason": "end_turn",
                "usage": { "input_tokens": 12, "output_tokens": 6 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = AnthropicClient::new("sk-ant-test").with_base_url(server.url());
    let completion = client.messages(request()).await.unwrap();

    assert_eq!(completion.text, "{\"title\":\"Gala\"}");
    assert_eq!(completion.stop_reason.as_deref(), Some("end_turn"));
    assert_eq!(completion.usage.unwrap().output_tokens, 6);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_messages_surfaces_api_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(401)
        .with_body(r#"{"type":"error","error":{"type":"authentication_error"}}"#)
        .create_async()
        .await;

    let client = AnthropicClient::new("bad-key").with_base_url(server.url());
    let err = client.messages(request()).await.unwrap_err();

    match err {
        AnthropicError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("authentication_error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_messages_without_text_block() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content":[]}"#)
        .create_async()
        .await;

    let client = AnthropicClient::new("sk-ant-test").with_base_url(server.url());
    let err = client.messages(request()).await.unwrap_err();

    assert!(matches!(err, AnthropicError::EmptyCompletion));
}
