// src/engine/config.rs

use std::time::Duration;

use derive_builder::Builder;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how the notes generator talks to the completion service.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct GeneratorConfig {
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    pub endpoint: String,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model: String,
    #[builder(default = "DEFAULT_TEMPERATURE")]
    pub temperature: f64,
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
}

impl GeneratorConfigBuilder {
    pub fn build(&self) -> Result<GeneratorConfig, GeneratorConfigBuilderError> {
        self.build_internal()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
