use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::engine::{
    config::{GeneratorConfig, GeneratorConfigBuilder},
    config_file::ConfigFile,
    credential::CredentialStore,
    model::ReleaseStyle,
};
use crate::ui::cli::Cli;

/// Name under which `confy` stores the config file.
pub const APP_NAME: &str = "relnotes";

pub fn load_config_file() -> Result<ConfigFile> {
    confy::load(APP_NAME, None).context("Failed to load config file")
}

pub fn build_generator_config(cfg_file: &ConfigFile) -> Result<GeneratorConfig> {
    let mut b = GeneratorConfigBuilder::default();
    if let Some(endpoint) = &cfg_file.endpoint {
        b.endpoint(endpoint.clone());
    }
    if let Some(model) = &cfg_file.model {
        b.model(model.clone());
    }
    if let Some(temperature) = cfg_file.temperature {
        b.temperature(temperature);
    }
    if let Some(secs) = cfg_file.timeout_secs {
        b.timeout(Duration::from_secs(secs));
    }
    b.build().context("Failed to build generator configuration")
}

/// CLI flag, then config file, then the system temp dir.
pub fn resolve_output_dir(args: &Cli, cfg_file: &ConfigFile) -> PathBuf {
    args.output_dir
        .clone()
        .or_else(|| cfg_file.output_dir.clone())
        .unwrap_or_else(std::env::temp_dir)
}

pub fn credential_store(args: &Cli) -> CredentialStore {
    match &args.credential_file {
        Some(path) => CredentialStore::new(path),
        None => CredentialStore::default_location(),
    }
}

pub fn default_style(cfg_file: &ConfigFile) -> ReleaseStyle {
    cfg_file.default_style.unwrap_or_default()
}
