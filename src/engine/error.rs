//! Error types surfaced by the engine.

use std::path::PathBuf;

use thiserror::Error;

/// A user-supplied field failed a local check. Recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must not contain '/' or '\\'")]
    PathSeparator(&'static str),

    #[error("Invalid API key format (should start with {0})")]
    CredentialFormat(&'static str),
}

/// Failure of a single generation round trip.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The completion service answered with a non-success status.
    #[error("Completion service error ({}): {message}", status_label(*status))]
    Service { status: Option<u16>, message: String },

    /// The system instruction could not be rendered. Nothing was sent.
    #[error("Failed to render instructions: {0}")]
    Instructions(String),

    /// The request never completed, or the answer could not be understood.
    #[error("Failed to reach completion service: {0}")]
    Transport(String),
}

impl GenerateError {
    /// True when the service rejected the credential itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GenerateError::Service { status: Some(401 | 403), .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GenerateError::Service { status, .. } => *status,
            GenerateError::Instructions(_) | GenerateError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerateError::Transport(format!("request timed out: {e}"))
        } else {
            GenerateError::Transport(e.to_string())
        }
    }
}

fn status_label(status: Option<u16>) -> String {
    status.map_or_else(|| "unknown status".to_string(), |s| s.to_string())
}

/// The credential file could not be written. Never fatal.
#[derive(Debug, Error)]
#[error("Could not save API key to {}: {source}", path.display())]
pub struct PersistenceWarning {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
