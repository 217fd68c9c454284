use super::catalog::{FrameworkDefinition, PatternCatalog, SignalKind};
use super::manifest::{self, MANIFEST_FILE};
use super::types::{Detection, DetectionReport, DetectionResult};
use crate::fs::{FileSystem, RealFileSystem};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Minimum summed confidence for a filesystem match to be reported
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Scores a project directory against an immutable [`PatternCatalog`].
///
/// Holds no mutable state, so a single instance can be shared across threads.
pub struct FrameworkDetector {
    catalog: PatternCatalog,
    fs: Arc<dyn FileSystem>,
}

impl FrameworkDetector {
    /// Built-in catalog over the real filesystem
    pub fn new() -> Self {
        Self::with_catalog(PatternCatalog::builtin())
    }

    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            fs: Arc::new(RealFileSystem::new()),
        }
    }

    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Filesystem-signal detection.
    ///
    /// Every definition is scored; the strictly highest score wins, so on a
    /// tie the earlier catalog entry is kept. The winner is reported only if
    /// its score reaches [`MIN_CONFIDENCE`].
    pub fn detect(&self, project_path: &Path) -> Detection {
        let mut best: Option<DetectionResult> = None;

        for definition in self.catalog.frameworks() {
            let (score, matched_paths) = self.score(project_path, definition);
            debug!(
                framework = %definition.framework,
                score,
                matched = ?matched_paths,
                "Scored framework"
            );

            if score <= 0.0 {
                continue;
            }
            if best.as_ref().map_or(true, |b| score > b.confidence) {
                best = Some(DetectionResult::new(
                    definition.framework.clone(),
                    score,
                    matched_paths,
                ));
            }
        }

        match best {
            Some(result) if result.confidence >= MIN_CONFIDENCE => {
                debug!(path = %project_path.display(), result = %result, "Framework detected");
                Detection::Matched(result)
            }
            Some(result) => {
                debug!(
                    path = %project_path.display(),
                    candidate = %result.framework,
                    confidence = result.confidence,
                    "Best candidate below threshold"
                );
                Detection::NoMatch
            }
            None => Detection::NoMatch,
        }
    }

    /// Dependency-manifest detection.
    ///
    /// A missing or unparsable manifest is reported as `NoMatch`.
    pub fn detect_from_manifest(&self, project_path: &Path) -> Detection {
        let names = match manifest::read_dependency_names(self.fs.as_ref(), project_path) {
            Ok(names) => names,
            Err(e) => {
                debug!(path = %project_path.display(), error = %e, "Manifest unavailable");
                return Detection::NoMatch;
            }
        };

        let matched = self
            .catalog
            .dependency_patterns()
            .iter()
            .find(|pattern| names.contains(&pattern.dependency));

        match matched {
            Some(pattern) => {
                debug!(
                    dependency = %pattern.dependency,
                    framework = %pattern.framework,
                    "Framework declared in manifest"
                );
                Detection::Matched(DetectionResult::new(
                    pattern.framework.clone(),
                    pattern.confidence,
                    vec![MANIFEST_FILE.to_string()],
                ))
            }
            None => Detection::NoMatch,
        }
    }

    /// Runs both detectors and returns both outcomes without reconciling them
    pub fn detect_all(&self, project_path: &Path) -> DetectionReport {
        DetectionReport {
            filesystem: self.detect(project_path),
            manifest: self.detect_from_manifest(project_path),
        }
    }

    fn score(&self, project_path: &Path, definition: &FrameworkDefinition) -> (f64, Vec<String>) {
        let mut score = 0.0;
        let mut matched_paths = Vec::new();

        for signal in &definition.signals {
            let path = self.fs.join(project_path, &signal.path);
            if self.probe(&path, signal.kind) {
                score += signal.weight;
                matched_paths.push(signal.path.clone());
            }
        }

        (score, matched_paths)
    }

    fn probe(&self, path: &Path, kind: SignalKind) -> bool {
        match self.fs.entry_kind(path) {
            Ok(entry) => match kind {
                SignalKind::FileExists => true,
                SignalKind::DirExists => entry.is_dir(),
            },
            Err(e) => {
                trace!(path = %path.display(), error = %e, "Signal probe failed");
                false
            }
        }
    }
}

impl Default for FrameworkDetector {
    fn default() -> Self {
        Self::new()
    }
}
