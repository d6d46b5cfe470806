//! Tests for the chat completions request body.

use scout_llm::{Client, General, OpenAI, Request};

#[test]
fn request_from_general_sets_model() {
    let req = Request::from(General::new("gpt-4o-mini"));
    assert_eq!(req.model, "gpt-4o-mini");
    assert!(req.messages.is_empty());
    assert!(req.stream.is_none());
}

#[test]
fn request_omits_unset_sampling_fields() {
    let value = serde_json::to_value(Request::from(General::default())).unwrap();
    assert!(value.get("temperature").is_none());
    assert!(value.get("max_tokens").is_none());
    assert!(value.get("stream_options").is_none());
}

#[test]
fn request_stream_sets_include_usage() {
    let req = Request::from(General::default()).stream(true);
    assert_eq!(req.stream, Some(true));
    let opts = req.stream_options.expect("stream_options");
    assert_eq!(opts["include_usage"], true);
}

#[test]
fn request_stream_without_usage_omits_stream_options() {
    let req = Request::from(General::default()).stream(false);
    assert_eq!(req.stream, Some(true));
    assert!(req.stream_options.is_none());
}

#[test]
fn provider_wraps_prompt_as_single_user_message() {
    let config = General {
        temperature: Some(0.2),
        ..General::new("m")
    };
    let provider = OpenAI::custom(Client::new(), "k", "http://localhost/v1", config).unwrap();
    let value = serde_json::to_value(provider.request("Summarize: hello")).unwrap();
    assert_eq!(value["model"], "m");
    assert_eq!(value["stream"], true);
    assert_eq!(value["messages"].as_array().unwrap().len(), 1);
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "Summarize: hello");
    assert!((value["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
}

#[test]
fn provider_sets_bearer_and_content_type() {
    let provider = OpenAI::api(Client::new(), "test-key", General::default()).unwrap();
    let auth = provider
        .headers()
        .get("authorization")
        .expect("authorization header");
    assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    let ct = provider.headers().get("content-type").expect("content-type");
    assert_eq!(ct.to_str().unwrap(), "application/json");
    assert_eq!(provider.endpoint(), scout_llm::endpoint::OPENAI);
}
