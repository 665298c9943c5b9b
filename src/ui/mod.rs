pub mod cli;
pub mod clipboard;
pub mod config;
pub mod output;
pub mod prompts;
