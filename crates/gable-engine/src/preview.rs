//! Preview of what the engine would do with a program
//!
//! Computed purely from the declaration, without contacting the engine:
//! which resources would be created, which environment lookups performed,
//! in what order, and which exports would be registered.

use serde::Serialize;

use crate::error::Result;
use crate::program::Program;
use crate::resource::ResourceMode;

/// Action the engine will take for one specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Provision a managed resource
    Create,

    /// Read an existing resource from the environment
    Read,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Read => write!(f, "read"),
        }
    }
}

/// One planned engine action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAction {
    /// What the engine will do
    pub action: ActionType,

    /// Logical name of the specification
    pub resource: String,

    /// Engine type token
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Resources this action waits for
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// One export as it will appear after provisioning
#[derive(Debug, Clone, Serialize)]
pub struct PlannedExport {
    /// Export name
    pub name: String,

    /// Concrete value when known at declaration time; deferred otherwise
    pub value: Option<String>,
}

/// Planned actions in engine execution order, plus exports and advisories
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Stack name
    pub stack: String,

    /// Actions in the order the engine will take them
    pub actions: Vec<PlannedAction>,

    /// Exports the program registers
    pub exports: Vec<PlannedExport>,

    /// Advisories the operator should read before applying
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Preview {
    /// Compute the preview for a program
    pub fn of(program: &Program) -> Result<Self> {
        let actions = program
            .execution_order()?
            .into_iter()
            .map(|spec| PlannedAction {
                action: match spec.mode {
                    ResourceMode::Managed => ActionType::Create,
                    ResourceMode::Lookup => ActionType::Read,
                },
                resource: spec.name.clone(),
                resource_type: spec.resource_type.clone(),
                depends_on: spec.dependency_names(),
            })
            .collect();

        let exports = program
            .exports()
            .iter()
            .map(|e| PlannedExport {
                name: e.name.clone(),
                value: e.value.literal_value(),
            })
            .collect();

        Ok(Self {
            stack: program.name().to_string(),
            actions,
            exports,
            warnings: Vec::new(),
        })
    }

    /// Attach advisories to the preview
    pub fn with_warnings<I>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.warnings.extend(warnings);
        self
    }
}
