mod common;

use common::RecordingTransport;
use relnotes::engine::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use relnotes::{
    GenerateError, GenerationRequest, GenerationRequestBuilder, GeneratorConfig,
    GeneratorConfigBuilder, NotesGenerator, ReleaseStyle, ValidationError,
};

fn request(product: &str, version: &str, style: ReleaseStyle) -> GenerationRequest {
    GenerationRequestBuilder::default()
        .product_name(product)
        .version(version)
        .style(style)
        .change_description("Added dark mode")
        .credential("sk-test")
        .build()
        .expect("valid request")
}

fn system_instruction(transport: &RecordingTransport) -> String {
    transport.only_call().body["messages"][0]["content"]
        .as_str()
        .expect("system content is a string")
        .to_string()
}

#[test]
fn test_end_to_end_request_shape() {
    let generator = NotesGenerator::new(
        GeneratorConfig::default(),
        RecordingTransport::completion("# Acme - 1.9.2\n\n- Added dark mode"),
    );

    let notes = generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap();
    assert_eq!(notes, "# Acme - 1.9.2\n\n- Added dark mode");

    let call = generator.transport().only_call();
    assert_eq!(call.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(call.credential, "sk-test");
    assert_eq!(call.body["model"], DEFAULT_MODEL);
    assert_eq!(call.body["temperature"], 0.7);
    assert!(call.body.get("stream").is_none());

    let messages = call.body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Added dark mode");

    let system = messages[0]["content"].as_str().unwrap();
    assert!(system.contains("Acme"));
    assert!(system.contains("1.9.2"));
}

#[test]
fn test_title_is_literal_in_both_styles() {
    for style in ReleaseStyle::ALL {
        let generator =
            NotesGenerator::new(GeneratorConfig::default(), RecordingTransport::completion("ok"));
        generator
            .generate(&request("Widget Pro", "3.0.0-rc.1", style))
            .unwrap();

        let system = system_instruction(generator.transport());
        assert!(system.contains("\"Widget Pro - 3.0.0-rc.1\""), "{style}: {system}");
        assert!(!system.contains("{{"));
        assert!(!system.contains("product_name"));
        assert!(!system.to_lowercase().contains("[version]"));
    }
}

#[test]
fn test_expanded_instruction_differs_and_mandates_sections() {
    let normal = NotesGenerator::new(GeneratorConfig::default(), RecordingTransport::completion("n"));
    normal
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap();
    let expanded =
        NotesGenerator::new(GeneratorConfig::default(), RecordingTransport::completion("e"));
    expanded
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Expanded))
        .unwrap();

    let normal = system_instruction(normal.transport());
    let expanded = system_instruction(expanded.transport());
    assert_ne!(normal, expanded);
    assert!(expanded.contains("multiple sections"));
    assert!(!normal.contains("multiple sections"));
    for text in [&normal, &expanded] {
        assert!(text.contains("markdown"));
        assert!(text.contains("never use placeholders"));
    }
}

#[test]
fn test_config_overrides_reach_the_wire() {
    let config = GeneratorConfigBuilder::default()
        .endpoint("http://localhost:8080/v1/chat/completions")
        .model("gpt-4o-mini")
        .temperature(0.2)
        .build()
        .unwrap();
    let generator = NotesGenerator::new(config, RecordingTransport::completion("ok"));
    generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap();

    let call = generator.transport().only_call();
    assert_eq!(call.endpoint, "http://localhost:8080/v1/chat/completions");
    assert_eq!(call.body["model"], "gpt-4o-mini");
    assert_eq!(call.body["temperature"], 0.2);
}

#[test]
fn test_error_message_is_surfaced_verbatim() {
    let generator = NotesGenerator::new(
        GeneratorConfig::default(),
        RecordingTransport::replying(401, r#"{"error":{"message":"invalid_api_key","type":"invalid_request_error"}}"#),
    );
    let err = generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap_err();

    match &err {
        GenerateError::Service { status, message } => {
            assert_eq!(*status, Some(401));
            assert!(message.contains("invalid_api_key"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("invalid_api_key"));
    assert_eq!(generator.transport().call_count(), 1);
}

#[test]
fn test_error_without_body_uses_status_text() {
    let generator = NotesGenerator::new(
        GeneratorConfig::default(),
        RecordingTransport::replying(401, ""),
    );
    let err = generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("Unauthorized"), "{err}");

    let generator = NotesGenerator::new(
        GeneratorConfig::default(),
        RecordingTransport::replying(503, "<html>upstream down</html>"),
    );
    let err = generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap_err();
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Service Unavailable"), "{err}");
}

#[test]
fn test_missing_content_is_transport_error() {
    for body in [
        r#"{"choices":[]}"#,
        r#"{"choices":[{"message":{"role":"assistant"}}]}"#,
        r#"{"id":"x"}"#,
        "not json at all",
    ] {
        let generator =
            NotesGenerator::new(GeneratorConfig::default(), RecordingTransport::replying(200, body));
        let err = generator
            .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
            .unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)), "{body}: {err:?}");
    }
}

#[test]
fn test_network_failure_is_transport_error() {
    let generator = NotesGenerator::new(
        GeneratorConfig::default(),
        RecordingTransport::failing("connection refused"),
    );
    let err = generator
        .generate(&request("Acme", "1.9.2", ReleaseStyle::Normal))
        .unwrap_err();
    assert!(matches!(err, GenerateError::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(generator.transport().call_count(), 1);
}

#[test]
fn test_builder_rejects_invalid_fields() {
    let blank = GenerationRequestBuilder::default()
        .product_name("  ")
        .version("1.0")
        .change_description("x")
        .credential("sk-test")
        .build()
        .unwrap_err();
    assert_eq!(blank, ValidationError::Required("Product name"));

    let bad_key = GenerationRequestBuilder::default()
        .product_name("Acme")
        .version("1.0")
        .change_description("x")
        .credential("not-a-key")
        .build()
        .unwrap_err();
    assert_eq!(bad_key, ValidationError::CredentialFormat("sk-"));

    let missing = GenerationRequestBuilder::default()
        .product_name("Acme")
        .credential("sk-test")
        .build()
        .unwrap_err();
    assert!(matches!(missing, ValidationError::Required(_)));
}
