//! Deferred string values resolved by the provisioning engine
//!
//! Most attributes of a declared resource (a bucket's website endpoint, a
//! distribution's domain name) only exist after the engine has provisioned
//! the resource. An [`Output`] stands in for such a value at declaration
//! time: it can be combined with other outputs and literals, embedded in
//! downstream specifications, and exported, but it is never readable as a
//! plain string until resolved against recorded engine state.

use serde::{Deserialize, Serialize};

use crate::error::{ProgramError, Result};
use crate::state::AttributeSource;

/// Symbolic reference to an attribute of a declared resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    /// Logical name of the referenced resource
    pub resource: String,

    /// Attribute name in the engine's vocabulary (e.g. "websiteEndpoint")
    pub attribute: String,
}

/// A string whose value may only become known after provisioning.
///
/// Serialized into the declaration document as an externally tagged
/// expression: `{"literal": ...}`, `{"attr": {...}}` or `{"concat": [...]}`.
/// The engine recognizes the `attr` form and substitutes the provisioned
/// value; it also derives implicit dependency edges from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Output {
    /// Known at declaration time
    Literal(String),

    /// Resolved by the engine once the referenced resource exists
    Attr(AttributeRef),

    /// Concatenation of parts, resolved left to right
    Concat(Vec<Output>),
}

impl Output {
    /// A literal value
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// A reference to an attribute of a declared resource
    pub fn attr(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::Attr(AttributeRef {
            resource: resource.into(),
            attribute: attribute.into(),
        })
    }

    /// Concatenate parts into a single deferred value
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Output>,
    {
        Self::Concat(parts.into_iter().collect())
    }

    /// Prepend a literal prefix, e.g. a URL scheme
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self::concat([Self::literal(prefix), self])
    }

    /// Collapse to a concrete string when no attribute reference is involved
    pub fn literal_value(&self) -> Option<String> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Attr(_) => None,
            Self::Concat(parts) => {
                let mut value = String::new();
                for part in parts {
                    value.push_str(&part.literal_value()?);
                }
                Some(value)
            }
        }
    }

    /// All attribute references contained in this expression
    pub fn references(&self) -> Vec<&AttributeRef> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a AttributeRef>) {
        match self {
            Self::Literal(_) => {}
            Self::Attr(r) => refs.push(r),
            Self::Concat(parts) => {
                for part in parts {
                    part.collect_references(refs);
                }
            }
        }
    }

    /// Resolve this expression against recorded engine state
    pub fn resolve(&self, state: &dyn AttributeSource) -> Result<String> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Attr(r) => state
                .attribute(&r.resource, &r.attribute)
                .map(str::to_string)
                .ok_or_else(|| ProgramError::unresolved_attribute(&r.resource, &r.attribute)),
            Self::Concat(parts) => {
                let mut value = String::new();
                for part in parts {
                    value.push_str(&part.resolve(state)?);
                }
                Ok(value)
            }
        }
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}
