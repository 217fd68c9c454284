//! Probe surface the detector needs from a filesystem

use anyhow::Result;
use std::path::{Path, PathBuf};

/// What a path resolves to once symlinks are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, device nodes
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// Read-only view of a project tree
pub trait FileSystem: Send + Sync {
    /// Stats `path`; errors when nothing is there or the stat is refused
    fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Raw file contents, with no encoding assumed
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Join a project-relative path onto a base
    fn join(&self, base: &Path, path: &str) -> PathBuf {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_directory_is_dir() {
        assert!(EntryKind::Directory.is_dir());
        assert!(!EntryKind::File.is_dir());
        assert!(!EntryKind::Other.is_dir());
    }
}
