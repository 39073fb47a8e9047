//! # gable-core
//!
//! Core library for the Gable CLI providing:
//! - Configuration file parsing (gable.yaml)
//! - Typed resolution of the site configuration bundle
//! - Hostname derivation and hosted-zone validation
//! - Shared error types

pub mod config;
pub mod error;
pub mod hostname;

pub use config::{ConfigBundle, GableConfig, SiteConfig};
pub use error::{Error, Result};
