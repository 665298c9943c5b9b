use crate::engine::{
    config::GeneratorConfig,
    error::GenerateError,
    instructions,
    model::{ChatMessage, ChatRequest, CompletionOutcome, GenerationRequest},
    transport::CompletionTransport,
};

/// Turns a [`GenerationRequest`] into markdown with a single round trip.
pub struct NotesGenerator<T: CompletionTransport> {
    config: GeneratorConfig,
    transport: T,
}

impl<T: CompletionTransport> NotesGenerator<T> {
    pub fn new(config: GeneratorConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let system = instructions::render(request.style(), request.product_name(), request.version())?;
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: request.change_description(),
                },
            ],
            temperature: self.config.temperature,
        };

        log::debug!(
            "requesting {} release notes from {} (model {})",
            request.style(),
            self.config.endpoint,
            self.config.model
        );

        let raw = self
            .transport
            .post(&self.config.endpoint, request.credential(), &body)?;
        CompletionOutcome::classify(&raw)?.into_result()
    }
}
