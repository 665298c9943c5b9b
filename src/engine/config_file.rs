use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::model::ReleaseStyle;

/// Represents the structure of the `relnotes` config file.
/// All fields are optional, so users only need to specify what they want to override.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub default_style: Option<ReleaseStyle>,
}
