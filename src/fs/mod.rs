//! FileSystem abstraction for testable project probes

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::{EntryKind, FileSystem};
pub use real::RealFileSystem;
