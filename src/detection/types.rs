use super::FrameworkId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-scoring framework for a project, with the evidence that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub framework: FrameworkId,
    /// Display name of `framework`, carried for JSON consumers
    pub name: String,
    /// Sum of matched signal weights; not a probability, may exceed 1.0
    pub confidence: f64,
    /// Project-relative paths of the signals that matched, in catalog order
    pub matched_paths: Vec<String>,
}

impl DetectionResult {
    pub fn new(framework: FrameworkId, confidence: f64, matched_paths: Vec<String>) -> Self {
        Self {
            name: framework.name().to_string(),
            framework,
            confidence,
            matched_paths,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (confidence {:.2}, evidence: {})",
            self.framework,
            self.confidence,
            self.matched_paths.join(", ")
        )
    }
}

/// Outcome of a detection pass.
///
/// Probe and parse failures are folded into `NoMatch`; the cause is traced
/// but never surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Detection {
    Matched(DetectionResult),
    NoMatch,
}

impl Detection {
    pub fn is_match(&self) -> bool {
        matches!(self, Detection::Matched(_))
    }

    pub fn as_match(&self) -> Option<&DetectionResult> {
        match self {
            Detection::Matched(result) => Some(result),
            Detection::NoMatch => None,
        }
    }

    pub fn into_option(self) -> Option<DetectionResult> {
        match self {
            Detection::Matched(result) => Some(result),
            Detection::NoMatch => None,
        }
    }
}

impl From<Option<DetectionResult>> for Detection {
    fn from(result: Option<DetectionResult>) -> Self {
        result.map_or(Detection::NoMatch, Detection::Matched)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::Matched(result) => write!(f, "{}", result),
            Detection::NoMatch => write!(f, "no match"),
        }
    }
}

/// Filesystem and manifest outcomes side by side.
///
/// No precedence is applied between the two; reconciling them is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub filesystem: Detection,
    pub manifest: Detection,
}

impl DetectionReport {
    pub fn any_match(&self) -> bool {
        self.filesystem.is_match() || self.manifest.is_match()
    }
}
