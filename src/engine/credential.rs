//! Persists the API key between runs in a small JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{error::PersistenceWarning, model::Credential};

const DIR_NAME: &str = ".relnotes";
const FILE_NAME: &str = "credentials.json";

#[derive(Serialize, Deserialize, Debug, Default)]
struct PersistedCredential {
    #[serde(default)]
    credential: Option<String>,
}

/// One credential slot backed by one file. Holds no state besides the path.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.relnotes/credentials.json`, or the temp dir when there is no home.
    pub fn default_location() -> Self {
        let base = dirs::home_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(DIR_NAME).join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: an absent, unreadable or malformed file all read as `None`.
    pub fn load(&self) -> Option<Credential> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("no cached credential at {}: {e}", self.path.display());
                return None;
            }
        };

        let record: PersistedCredential = match serde_json::from_str(&content) {
            Ok(r) => r,
            Err(e) => {
                log::debug!("ignoring unreadable credential file {}: {e}", self.path.display());
                return None;
            }
        };

        record
            .credential
            .filter(|c| !c.trim().is_empty())
            .map(Credential::from)
    }

    pub fn save(&self, credential: &Credential) -> Result<(), PersistenceWarning> {
        let record = PersistedCredential {
            credential: Some(credential.expose().to_owned()),
        };
        self.write(&record).map_err(|source| PersistenceWarning {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, record: &PersistedCredential) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)?;
        restrict_permissions(&self.path)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
