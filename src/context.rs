//! Project context classification
//!
//! A directory with a detected framework puts the assistant in code-editor
//! mode; anything else is treated as plain browsing.

use crate::detection::{Detection, FrameworkDetector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    Browser,
    CodeEditor,
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextMode::Browser => write!(f, "browser"),
            ContextMode::CodeEditor => write!(f, "code_editor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub mode: ContextMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl ProjectContext {
    pub fn browser() -> Self {
        Self {
            mode: ContextMode::Browser,
            framework: None,
        }
    }

    pub fn code_editor(framework: impl Into<String>) -> Self {
        Self {
            mode: ContextMode::CodeEditor,
            framework: Some(framework.into()),
        }
    }
}

/// Classifies `project_path` using filesystem detection only
pub fn classify_project(detector: &FrameworkDetector, project_path: &Path) -> ProjectContext {
    let context = match detector.detect(project_path) {
        Detection::Matched(result) => ProjectContext::code_editor(result.name()),
        Detection::NoMatch => ProjectContext::browser(),
    };
    debug!(path = %project_path.display(), mode = %context.mode, "Classified project");
    context
}
