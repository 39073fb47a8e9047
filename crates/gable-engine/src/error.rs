//! Error types for gable-engine

use thiserror::Error;

/// Result type alias using gable-engine's error type
pub type Result<T> = std::result::Result<T, ProgramError>;

/// Errors raised while assembling, validating, or resolving a program
#[derive(Error, Debug)]
pub enum ProgramError {
    /// A resource name was declared twice
    #[error("Duplicate resource name: {name}")]
    DuplicateResource { name: String },

    /// An export name was registered twice
    #[error("Duplicate export name: {name}")]
    DuplicateExport { name: String },

    /// A specification references a resource that was never declared
    #[error("Resource '{referrer}' references undeclared resource '{name}'")]
    UnknownResource { referrer: String, name: String },

    /// An export references a resource that was never declared
    #[error("Export '{export}' references undeclared resource '{name}'")]
    UnknownExportReference { export: String, name: String },

    /// Circular dependency between resource specifications
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// The stack state holds no value for a referenced attribute
    #[error("Attribute '{attribute}' of resource '{resource}' is not recorded in the stack state")]
    UnresolvedAttribute { resource: String, attribute: String },

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProgramError {
    /// Create a duplicate resource error
    pub fn duplicate_resource(name: impl Into<String>) -> Self {
        Self::DuplicateResource { name: name.into() }
    }

    /// Create a duplicate export error
    pub fn duplicate_export(name: impl Into<String>) -> Self {
        Self::DuplicateExport { name: name.into() }
    }

    /// Create an unknown resource error
    pub fn unknown_resource(referrer: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownResource {
            referrer: referrer.into(),
            name: name.into(),
        }
    }

    /// Create an unknown export reference error
    pub fn unknown_export_reference(export: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownExportReference {
            export: export.into(),
            name: name.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular_dependency(cycle: impl Into<String>) -> Self {
        Self::CircularDependency {
            cycle: cycle.into(),
        }
    }

    /// Create an unresolved attribute error
    pub fn unresolved_attribute(
        resource: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self::UnresolvedAttribute {
            resource: resource.into(),
            attribute: attribute.into(),
        }
    }
}
