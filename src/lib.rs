//! basedev-context - framework detection and tooling-server registries
//!
//! This crate backs a development-assistant service. It identifies which
//! framework a project directory uses and tracks the language-tooling and
//! protocol-adapter servers the service could launch.
//!
//! # Core Concepts
//!
//! - **Signals**: weighted filesystem existence checks, grouped per framework
//!   in a [`PatternCatalog`]. A framework's confidence is the sum of its
//!   matched weights.
//! - **Detection**: [`FrameworkDetector`] reports the best framework scoring at
//!   least [`MIN_CONFIDENCE`], or a framework declared in `package.json`.
//!   Failures never reach the caller; they become [`Detection::NoMatch`].
//! - **Registries**: [`LspManager`] and [`McpManager`] are two instantiations
//!   of one thread-safe [`ServerRegistry`] that tracks intended server state.
//!
//! # Example Usage
//!
//! ```no_run
//! use basedev_context::{FrameworkDetector, LspManager};
//! use std::path::Path;
//!
//! let detector = FrameworkDetector::new();
//! if let Some(result) = detector.detect(Path::new("/srv/app")).into_option() {
//!     println!("{} ({:.2})", result.name(), result.confidence);
//! }
//!
//! let lsp = LspManager::new();
//! lsp.register("gopls", "go", "gopls", vec!["serve".to_string()])?;
//! lsp.start("gopls")?;
//! assert!(lsp.get_by_language("go").is_some());
//! # Ok::<(), basedev_context::RegistryError>(())
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod detection;
pub mod fs;
pub mod registry;
pub mod util;

pub use config::{ConfigError, ContextConfig};
pub use context::{classify_project, ContextMode, ProjectContext};
pub use detection::{
    Detection, DetectionReport, DetectionResult, FrameworkDetector, FrameworkId, PatternCatalog,
    MIN_CONFIDENCE,
};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use registry::{
    Language, LspManager, McpManager, RegistryError, ServerDescriptor, ServerRegistry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
