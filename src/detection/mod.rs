//! Framework detection
//!
//! Two independent passes over a project directory:
//! - [`FrameworkDetector::detect`] sums weighted filesystem signals from the
//!   [`PatternCatalog`] and reports the best framework above [`MIN_CONFIDENCE`].
//! - [`FrameworkDetector::detect_from_manifest`] looks for well-known
//!   dependency names in `package.json`.
//!
//! Neither pass ever fails the caller: probe and parse errors become
//! [`Detection::NoMatch`].

pub mod catalog;
pub mod detector;
pub mod framework_id;
mod id_macro;
pub mod manifest;
pub mod types;

pub use catalog::{
    CatalogError, DependencyPattern, FrameworkDefinition, FrameworkSignal, PatternCatalog,
    SignalKind,
};
pub use detector::{FrameworkDetector, MIN_CONFIDENCE};
pub use framework_id::FrameworkId;
pub use manifest::MANIFEST_FILE;
pub use types::{Detection, DetectionReport, DetectionResult};
