use super::{EntryKind, FileSystem};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// `std::fs` backed implementation
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let meta = fs::metadata(path).context(format!("Failed to get metadata for {:?}", path))?;

        Ok(if meta.is_file() {
            EntryKind::File
        } else if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).context(format!("Failed to read file {:?}", path))
    }
}
