//! # gable-engine
//!
//! Declaration-side model of the provisioning engine contract:
//! - Write-once resource specifications with symbolic cross-references
//! - Deferred string values ([`Output`]) resolved only after provisioning
//! - The [`Program`]: ordered specifications plus named exports
//! - Dependency validation and engine execution ordering
//! - Recorded engine state ([`StackState`]) for resolving exports

pub mod error;
pub mod output;
pub mod preview;
pub mod program;
pub mod resource;
pub mod state;

pub use error::{ProgramError, Result};
pub use output::{AttributeRef, Output};
pub use preview::{ActionType, PlannedAction, PlannedExport, Preview};
pub use program::{Export, Program, ResourceHandle};
pub use resource::{ResourceMode, ResourceSpec};
pub use state::{AttributeSource, StackState};
