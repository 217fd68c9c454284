//! Command handlers; each returns the process exit code

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use super::commands::{CatalogArgs, ContextArgs, DetectArgs, DetectionSourceArg};
use super::output::OutputFormatter;
use crate::config::ContextConfig;
use crate::context::classify_project;
use crate::detection::FrameworkDetector;

/// A requested detection pass matched
pub const EXIT_MATCH: i32 = 0;
/// Nothing matched
pub const EXIT_NO_MATCH: i32 = 1;
/// Output could not be produced
pub const EXIT_ERROR: i32 = 2;

fn detector() -> FrameworkDetector {
    FrameworkDetector::new()
}

fn emit(rendered: anyhow::Result<String>) -> bool {
    match rendered {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(e) => {
            error!("{:#}", e);
            false
        }
    }
}

pub fn handle_detect(args: &DetectArgs) -> i32 {
    let project_path = args
        .project_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(path = %project_path.display(), source = ?args.source, "Running detection");

    let detector = detector();
    let formatter = OutputFormatter::new(args.format.into());

    let (matched, rendered) = match args.source {
        DetectionSourceArg::Filesystem => {
            let detection = detector.detect(&project_path);
            (
                detection.is_match(),
                formatter.format_detection("Filesystem", &detection),
            )
        }
        DetectionSourceArg::Manifest => {
            let detection = detector.detect_from_manifest(&project_path);
            (
                detection.is_match(),
                formatter.format_detection("Manifest", &detection),
            )
        }
        DetectionSourceArg::All => {
            let report = detector.detect_all(&project_path);
            (report.any_match(), formatter.format_report(&report))
        }
    };

    if !emit(rendered) {
        return EXIT_ERROR;
    }
    if matched {
        EXIT_MATCH
    } else {
        EXIT_NO_MATCH
    }
}

pub fn handle_context(args: &ContextArgs, config: &ContextConfig) -> i32 {
    let project_path: &Path = args
        .project_path
        .as_deref()
        .unwrap_or(config.scratch_path.as_path());

    let context = classify_project(&detector(), project_path);
    let formatter = OutputFormatter::new(args.format.into());

    if emit(formatter.format_context(&context)) {
        EXIT_MATCH
    } else {
        EXIT_ERROR
    }
}

pub fn handle_catalog(args: &CatalogArgs) -> i32 {
    let formatter = OutputFormatter::new(args.format.into());

    if emit(formatter.format_catalog(detector().catalog())) {
        EXIT_MATCH
    } else {
        EXIT_ERROR
    }
}
