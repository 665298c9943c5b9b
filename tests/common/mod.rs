#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow};
use relnotes::engine::model::ChatRequest;
use relnotes::ui::prompts::{Prompter, ReleaseDetails};
use relnotes::{CompletionTransport, Credential, GenerateError, RawResponse, ReleaseStyle};
use serde_json::Value;

/// One observed outbound call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub credential: String,
    pub body: Value,
}

/// Answers every call with the same canned response and keeps a log.
pub struct RecordingTransport {
    reply: Result<RawResponse, String>,
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn completion(text: &str) -> Self {
        let body = serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": text } }]
        });
        Self::replying(200, &body.to_string())
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one outbound call");
        calls[0].clone()
    }
}

impl CompletionTransport for RecordingTransport {
    fn post(
        &self,
        endpoint: &str,
        credential: &Credential,
        body: &ChatRequest<'_>,
    ) -> Result<RawResponse, GenerateError> {
        self.calls.borrow_mut().push(RecordedCall {
            endpoint: endpoint.to_string(),
            credential: credential.expose().to_string(),
            body: serde_json::to_value(body).expect("request body serializes"),
        });
        self.reply
            .clone()
            .map_err(GenerateError::Transport)
    }
}

/// Replays prepared answers and counts how often each question was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub credentials: VecDeque<String>,
    pub details: Option<ReleaseDetails>,
    pub credential_prompts: usize,
    pub seen_default_style: Option<ReleaseStyle>,
}

impl ScriptedPrompter {
    pub fn new(details: ReleaseDetails) -> Self {
        Self {
            details: Some(details),
            ..Default::default()
        }
    }

    pub fn with_credential(mut self, key: &str) -> Self {
        self.credentials.push_back(key.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn credential(&mut self) -> Result<Credential> {
        self.credential_prompts += 1;
        self.credentials
            .pop_front()
            .map(Credential::new)
            .ok_or_else(|| anyhow!("no scripted credential left"))
    }

    fn release_details(&mut self, default_style: ReleaseStyle) -> Result<ReleaseDetails> {
        self.seen_default_style = Some(default_style);
        self.details
            .take()
            .ok_or_else(|| anyhow!("release details already consumed"))
    }

    fn confirm_clipboard(&mut self) -> Result<bool> {
        Ok(false)
    }
}

pub fn acme_details() -> ReleaseDetails {
    ReleaseDetails {
        product_name: "Acme".into(),
        version: "1.9.2".into(),
        style: ReleaseStyle::Normal,
        change_description: "Added dark mode".into(),
    }
}
