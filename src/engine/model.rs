//! Contains the core data structures for the application.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::engine::{
    error::{GenerateError, ValidationError},
    validate::{validate_credential, validate_required, validate_version},
};

/// Which of the two instruction templates to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStyle {
    #[default]
    Normal,
    Expanded,
}

impl ReleaseStyle {
    pub const ALL: [ReleaseStyle; 2] = [ReleaseStyle::Normal, ReleaseStyle::Expanded];
}

impl std::fmt::Display for ReleaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseStyle::Normal => write!(f, "Normal"),
            ReleaseStyle::Expanded => write!(f, "Expanded"),
        }
    }
}

/// An API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

/// Everything one generation call needs. Only obtainable through the builder,
/// so a built request has passed validation.
#[derive(Debug, Clone, Builder)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "ValidationError")
)]
pub struct GenerationRequest {
    product_name: String,
    version: String,
    #[builder(default)]
    style: ReleaseStyle,
    change_description: String,
    credential: Credential,
}

impl GenerationRequest {
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn style(&self) -> ReleaseStyle {
        self.style
    }

    pub fn change_description(&self) -> &str {
        &self.change_description
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.product_name {
            validate_required("Product name", name)?;
        }
        if let Some(version) = &self.version {
            validate_version(version)?;
        }
        if let Some(changes) = &self.change_description {
            validate_required("Features/fixes", changes)?;
        }
        if let Some(credential) = &self.credential {
            validate_credential(credential.expose())?;
        }
        Ok(())
    }
}

impl From<derive_builder::UninitializedFieldError> for ValidationError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        ValidationError::Required(e.field_name())
    }
}

// ──────────────────────────────────────────────────────────────
//  Wire format of the chat-completions endpoint
// ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Status and body exactly as they came off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A service answer, reduced to the two shapes the caller cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success { text: String },
    Failure { status: u16, message: String },
}

impl CompletionOutcome {
    /// Classifies a raw response. A success body that does not carry
    /// `choices[0].message.content` is a transport-level failure.
    pub fn classify(raw: &RawResponse) -> Result<Self, GenerateError> {
        if !raw.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw.body)
                .ok()
                .and_then(|env| env.error)
                .and_then(|err| err.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status_text(raw.status));
            return Ok(CompletionOutcome::Failure {
                status: raw.status,
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&raw.body)
            .map_err(|e| GenerateError::Transport(format!("malformed response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|text| CompletionOutcome::Success { text })
            .ok_or_else(|| {
                GenerateError::Transport(
                    "response did not contain choices[0].message.content".into(),
                )
            })
    }

    pub fn into_result(self) -> Result<String, GenerateError> {
        match self {
            CompletionOutcome::Success { text } => Ok(text),
            CompletionOutcome::Failure { status, message } => Err(GenerateError::Service {
                status: Some(status),
                message,
            }),
        }
    }
}

fn status_text(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_owned)
}
