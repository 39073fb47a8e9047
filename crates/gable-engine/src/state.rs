//! Recorded engine state
//!
//! After the provisioning engine has applied a program it records the
//! concrete value of every resource attribute it resolved. That record is
//! what turns deferred [`Output`](crate::Output) expressions back into
//! plain strings, e.g. for showing stack exports.

use std::collections::BTreeMap;
use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Source of resolved resource attribute values
pub trait AttributeSource {
    /// Look up a recorded attribute value
    fn attribute(&self, resource: &str, attribute: &str) -> Option<&str>;
}

/// Attribute values recorded by the engine, keyed by resource logical name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackState {
    /// Resource logical name to attribute name to value
    #[serde(default)]
    pub resources: BTreeMap<String, BTreeMap<String, String>>,
}

impl StackState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attribute value
    pub fn record(
        &mut self,
        resource: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.resources
            .entry(resource.into())
            .or_default()
            .insert(attribute.into(), value.into());
    }

    /// Parse a state document from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a state document from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Load a state document, picking the format from the file extension
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension() {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }
}

impl AttributeSource for StackState {
    fn attribute(&self, resource: &str, attribute: &str) -> Option<&str> {
        self.resources
            .get(resource)
            .and_then(|attrs| attrs.get(attribute))
            .map(String::as_str)
    }
}
