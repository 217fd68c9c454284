//! Output formatting for JSON, YAML and human-readable text

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::context::ProjectContext;
use crate::detection::{Detection, DetectionReport, PatternCatalog, SignalKind};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Renders detector output in the configured format
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single detection pass
    pub fn format_detection(&self, label: &str, detection: &Detection) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(detection),
            OutputFormat::Yaml => to_yaml(detection),
            OutputFormat::Human => Ok(human_detection(label, detection)),
        }
    }

    /// Formats both detection passes
    pub fn format_report(&self, report: &DetectionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(report),
            OutputFormat::Yaml => to_yaml(report),
            OutputFormat::Human => {
                let mut out = human_detection("Filesystem", &report.filesystem);
                out.push('\n');
                out.push_str(&human_detection("Manifest", &report.manifest));
                Ok(out)
            }
        }
    }

    pub fn format_context(&self, context: &ProjectContext) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(context),
            OutputFormat::Yaml => to_yaml(context),
            OutputFormat::Human => Ok(match &context.framework {
                Some(framework) => format!("Mode: {}\nFramework: {}", context.mode, framework),
                None => format!("Mode: {}", context.mode),
            }),
        }
    }

    pub fn format_catalog(&self, catalog: &PatternCatalog) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(catalog),
            OutputFormat::Yaml => to_yaml(catalog),
            OutputFormat::Human => Ok(human_catalog(catalog)),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).context("Failed to serialize output to YAML")
}

fn human_detection(label: &str, detection: &Detection) -> String {
    match detection {
        Detection::Matched(result) => {
            let mut out = format!("{}: {}\n", label, result.framework);
            let _ = writeln!(out, "  Confidence: {:.2}", result.confidence);
            let _ = write!(out, "  Evidence: {}", result.matched_paths.join(", "));
            out
        }
        Detection::NoMatch => format!("{}: no match", label),
    }
}

fn human_catalog(catalog: &PatternCatalog) -> String {
    let mut out = String::from("Framework signals:\n");
    for definition in catalog.frameworks() {
        let _ = writeln!(out, "  {}", definition.framework);
        for signal in &definition.signals {
            let kind = match signal.kind {
                SignalKind::FileExists => "file",
                SignalKind::DirExists => "dir ",
            };
            let _ = writeln!(out, "    {} {:<16} {:.2}", kind, signal.path, signal.weight);
        }
    }

    out.push_str("Manifest dependencies (in priority order):\n");
    for pattern in catalog.dependency_patterns() {
        let _ = writeln!(
            out,
            "  {:<18} -> {} ({:.2})",
            pattern.dependency, pattern.framework, pattern.confidence
        );
    }
    out
}
