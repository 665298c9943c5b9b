// src/engine/mod.rs
pub mod config;
pub mod config_file;
pub mod credential;
pub mod error;
pub mod generator;
pub mod instructions;
pub mod model;
pub mod transport;
pub mod validate;
