//! `package.json` dependency extraction
//!
//! Only key presence matters: `dependencies` and `devDependencies` are merged
//! into one set of names. A member that is present but not an object is
//! ignored rather than treated as a malformed manifest. Bytes that are not
//! valid UTF-8 are replaced with U+FFFD before parsing, so a stray Latin-1
//! character in an unrelated field does not hide the dependency list.

use crate::fs::FileSystem;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Dependency manifest consulted by manifest detection
pub const MANIFEST_FILE: &str = "package.json";

const DEPENDENCY_SECTIONS: [&str; 2] = ["dependencies", "devDependencies"];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read package.json: {0:#}")]
    Read(anyhow::Error),

    #[error("malformed package.json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("package.json is not a JSON object")]
    NotAnObject,
}

/// Parses manifest content into the merged set of declared dependency names
pub fn dependency_names(content: &str) -> Result<BTreeSet<String>, ManifestError> {
    let document: Value = serde_json::from_str(content)?;
    let root = document.as_object().ok_or(ManifestError::NotAnObject)?;

    Ok(DEPENDENCY_SECTIONS
        .iter()
        .filter_map(|section| root.get(*section).and_then(Value::as_object))
        .flat_map(Map::keys)
        .cloned()
        .collect())
}

/// Reads and parses the manifest at the project root
pub fn read_dependency_names(
    fs: &dyn FileSystem,
    project_path: &Path,
) -> Result<BTreeSet<String>, ManifestError> {
    let path = fs.join(project_path, MANIFEST_FILE);
    let bytes = fs.read_bytes(&path).map_err(ManifestError::Read)?;
    dependency_names(&String::from_utf8_lossy(&bytes))
}
