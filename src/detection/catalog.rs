//! Pattern catalog
//!
//! For each known framework, an ordered set of filesystem signals with
//! hand-assigned weights, plus the dependency patterns consulted when a
//! `package.json` manifest is available. Framework-specific config files
//! weigh 0.9 and above; the shared `package.json` manifest only 0.3.

use super::FrameworkId;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Confidence assigned to a dependency-manifest match
pub const MANIFEST_CONFIDENCE: f64 = 0.95;

/// Filesystem check performed by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Any entry exists at the path
    FileExists,
    /// A directory exists at the path
    DirExists,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkSignal {
    pub kind: SignalKind,
    /// Path relative to the project root
    pub path: String,
    pub weight: f64,
}

impl FrameworkSignal {
    pub fn file(path: impl Into<String>, weight: f64) -> Self {
        Self {
            kind: SignalKind::FileExists,
            path: path.into(),
            weight,
        }
    }

    pub fn dir(path: impl Into<String>, weight: f64) -> Self {
        Self {
            kind: SignalKind::DirExists,
            path: path.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkDefinition {
    pub framework: FrameworkId,
    pub signals: Vec<FrameworkSignal>,
}

impl FrameworkDefinition {
    pub fn new(framework: FrameworkId, signals: Vec<FrameworkSignal>) -> Self {
        Self { framework, signals }
    }

    /// Sum of every signal weight, i.e. the score of a project matching all of them
    pub fn max_score(&self) -> f64 {
        self.signals.iter().map(|s| s.weight).sum()
    }
}

/// Dependency name that identifies a framework when declared in the manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyPattern {
    pub dependency: String,
    pub framework: FrameworkId,
    pub confidence: f64,
}

impl DependencyPattern {
    pub fn new(dependency: impl Into<String>, framework: FrameworkId) -> Self {
        Self {
            dependency: dependency.into(),
            framework,
            confidence: MANIFEST_CONFIDENCE,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Framework '{0}' is defined more than once")]
    DuplicateFramework(String),

    #[error("Framework id '{0}' is used by more than one definition")]
    DuplicateId(String),

    #[error("Custom framework id '{0}' collides with a built-in framework")]
    ReservedId(String),

    #[error("Signal '{path}' of framework '{framework}' has weight {weight}; expected (0, 1]")]
    InvalidWeight {
        framework: String,
        path: String,
        weight: f64,
    },
}

/// A `Custom` id equal to a built-in id would deserialize as the built-in variant
fn check_custom_id(framework: &FrameworkId) -> Result<(), CatalogError> {
    match framework {
        FrameworkId::Custom(id) if FrameworkId::all_variants().iter().any(|v| v.id() == id) => {
            Err(CatalogError::ReservedId(id.clone()))
        }
        _ => Ok(()),
    }
}

/// Immutable set of framework definitions, evaluated in order
#[derive(Debug, Clone, Serialize)]
pub struct PatternCatalog {
    frameworks: Vec<FrameworkDefinition>,
    dependency_patterns: Vec<DependencyPattern>,
}

impl PatternCatalog {
    /// Builds a catalog from caller-supplied definitions.
    ///
    /// Framework display names and serialized ids must both be unique, a
    /// `Custom` id may not shadow a built-in one, and every weight must lie in
    /// (0, 1]. Dependency patterns are checked in the order given.
    pub fn new(
        frameworks: Vec<FrameworkDefinition>,
        dependency_patterns: Vec<DependencyPattern>,
    ) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for definition in &frameworks {
            let framework = &definition.framework;
            if !names.insert(framework.name()) {
                return Err(CatalogError::DuplicateFramework(framework.name().to_string()));
            }
            if !ids.insert(framework.id()) {
                return Err(CatalogError::DuplicateId(framework.id().to_string()));
            }
            check_custom_id(framework)?;
            for signal in &definition.signals {
                if !(signal.weight > 0.0 && signal.weight <= 1.0) {
                    return Err(CatalogError::InvalidWeight {
                        framework: definition.framework.name().to_string(),
                        path: signal.path.clone(),
                        weight: signal.weight,
                    });
                }
            }
        }

        for pattern in &dependency_patterns {
            check_custom_id(&pattern.framework)?;
        }

        Ok(Self {
            frameworks,
            dependency_patterns,
        })
    }

    pub fn builtin() -> Self {
        Self {
            frameworks: vec![
                FrameworkDefinition::new(
                    FrameworkId::Nuxt,
                    vec![
                        FrameworkSignal::file("nuxt.config.ts", 0.9),
                        FrameworkSignal::file("nuxt.config.js", 0.9),
                        FrameworkSignal::file("package.json", 0.3),
                    ],
                ),
                FrameworkDefinition::new(
                    FrameworkId::NextJs,
                    vec![
                        FrameworkSignal::file("next.config.js", 0.9),
                        FrameworkSignal::file("next.config.ts", 0.9),
                        FrameworkSignal::file("package.json", 0.3),
                    ],
                ),
                FrameworkDefinition::new(
                    FrameworkId::Go,
                    vec![
                        FrameworkSignal::file("go.mod", 0.95),
                        FrameworkSignal::file("main.go", 0.5),
                    ],
                ),
                FrameworkDefinition::new(
                    FrameworkId::Flutter,
                    vec![
                        FrameworkSignal::file("pubspec.yaml", 0.95),
                        FrameworkSignal::dir("lib", 0.4),
                    ],
                ),
                FrameworkDefinition::new(
                    FrameworkId::BaseFramework,
                    vec![FrameworkSignal::file("base.config.go", 0.98)],
                ),
            ],
            dependency_patterns: vec![
                DependencyPattern::new("nuxt", FrameworkId::Nuxt),
                DependencyPattern::new("next", FrameworkId::NextJs),
            ],
        }
    }

    pub fn frameworks(&self) -> &[FrameworkDefinition] {
        &self.frameworks
    }

    pub fn dependency_patterns(&self) -> &[DependencyPattern] {
        &self.dependency_patterns
    }

    pub fn get(&self, framework: &FrameworkId) -> Option<&FrameworkDefinition> {
        self.frameworks.iter().find(|d| &d.framework == framework)
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
