// src/lib.rs

//! Internal library for relnotes – not published on crates.io

pub mod app_controller;
pub mod common;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{GeneratorConfig, GeneratorConfigBuilder},
    credential::CredentialStore,
    error::{GenerateError, PersistenceWarning, ValidationError},
    generator::NotesGenerator,
    model::{
        Credential, GenerationRequest, GenerationRequestBuilder, RawResponse, ReleaseStyle,
    },
    transport::{CompletionTransport, HttpTransport},
};
