use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

static NOT_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// "My App!" -> "my-app-"
pub fn sanitize_segment(name: &str) -> String {
    NOT_ALNUM.replace_all(name, "-").to_ascii_lowercase()
}

/// `<sanitized product>-<version>-release-notes.md`
pub fn release_notes_file_name(product_name: &str, version: &str) -> String {
    format!("{}-{version}-release-notes.md", sanitize_segment(product_name))
}

pub fn release_notes_path(dir: &Path, product_name: &str, version: &str) -> PathBuf {
    dir.join(release_notes_file_name(product_name, version))
}
