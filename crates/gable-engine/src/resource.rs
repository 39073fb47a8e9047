//! Write-once resource specifications
//!
//! A specification is submitted to the engine exactly once and never
//! mutated afterwards. Its arguments are carried as a serialized document
//! so that deferred [`Output`](crate::Output) expressions survive the trip
//! to the engine in their tagged wire form.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::output::AttributeRef;

/// How the engine treats a specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    /// Created, updated, and destroyed by the engine
    Managed,

    /// Read from the live environment; must already exist
    Lookup,
}

/// A single resource specification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    /// Logical name, unique within the program
    pub name: String,

    /// Engine type token (e.g. "aws:s3:Bucket")
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Managed resource or environment lookup
    pub mode: ResourceMode,

    /// Argument document; deferred values appear as tagged expressions
    pub args: Value,

    /// Explicit ordering edges in addition to those implied by references
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Name of an explicit provider handle, when not using the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl ResourceSpec {
    /// Create a managed resource specification
    pub fn managed(
        name: impl Into<String>,
        resource_type: impl Into<String>,
        args: &impl Serialize,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            resource_type: resource_type.into(),
            mode: ResourceMode::Managed,
            args: serde_json::to_value(args)?,
            depends_on: Vec::new(),
            provider: None,
        })
    }

    /// Create an environment lookup specification
    pub fn lookup(
        name: impl Into<String>,
        resource_type: impl Into<String>,
        args: &impl Serialize,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            resource_type: resource_type.into(),
            mode: ResourceMode::Lookup,
            args: serde_json::to_value(args)?,
            depends_on: Vec::new(),
            provider: None,
        })
    }

    /// Add an explicit dependency on another declared resource
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }

    /// Route this specification through an explicit provider handle
    pub fn with_provider(mut self, name: impl Into<String>) -> Self {
        self.provider = Some(name.into());
        self
    }

    /// Attribute references embedded in the argument document
    pub fn attribute_refs(&self) -> Vec<AttributeRef> {
        let mut refs = Vec::new();
        collect_refs(&self.args, &mut refs);
        refs
    }

    /// Names of every resource this specification depends on: implicit
    /// references, explicit edges, and the provider handle. Deduplicated,
    /// in discovery order.
    pub fn dependency_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .attribute_refs()
            .into_iter()
            .map(|r| r.resource)
            .collect();
        names.extend(self.depends_on.iter().cloned());
        if let Some(provider) = &self.provider {
            names.push(provider.clone());
        }

        let mut seen = Vec::with_capacity(names.len());
        for name in names {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }
}

/// Walk an argument document for tagged attribute references.
///
/// The engine's wire format marks a reference as a single-key object
/// `{"attr": {"resource": ..., "attribute": ...}}`; anything else is
/// descended into.
fn collect_refs(value: &Value, refs: &mut Vec<AttributeRef>) {
    match value {
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(Value::Object(inner)) = map.get("attr") {
                    if let (Some(Value::String(resource)), Some(Value::String(attribute))) =
                        (inner.get("resource"), inner.get("attribute"))
                    {
                        refs.push(AttributeRef {
                            resource: resource.clone(),
                            attribute: attribute.clone(),
                        });
                        return;
                    }
                }
            }
            for nested in map.values() {
                collect_refs(nested, refs);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_refs(item, refs);
            }
        }
        _ => {}
    }
}
