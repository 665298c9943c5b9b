//! The one outbound HTTP call, behind a trait so the generator can be
//! driven without a network.

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::engine::{
    config::GeneratorConfig,
    error::GenerateError,
    model::{ChatRequest, Credential, RawResponse},
};

/// Sends a chat-completions body and hands back the raw answer.
pub trait CompletionTransport {
    fn post(
        &self,
        endpoint: &str,
        credential: &Credential,
        body: &ChatRequest<'_>,
    ) -> Result<RawResponse, GenerateError>;
}

/// Blocking `reqwest` transport used by the binary.
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl CompletionTransport for HttpTransport {
    fn post(
        &self,
        endpoint: &str,
        credential: &Credential,
        body: &ChatRequest<'_>,
    ) -> Result<RawResponse, GenerateError> {
        let response = self
            .http
            .post(endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", credential.expose()))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()?;

        let status = response.status().as_u16();
        log::debug!("completion service answered {status}");
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}
