//! The declaration program
//!
//! A program is what gets handed to the provisioning engine: resource
//! specifications in declaration order plus named exports. Specifications
//! are write-once; cross-references use logical names, never provider
//! identifiers.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::Serialize;
use tracing::debug;

use crate::error::{ProgramError, Result};
use crate::output::Output;
use crate::resource::ResourceSpec;

/// Handle to a declared resource, used to form attribute references
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    name: String,
}

impl ResourceHandle {
    /// Logical name of the declared resource
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deferred reference to one of the resource's attributes
    pub fn attr(&self, attribute: impl Into<String>) -> Output {
        Output::attr(self.name.clone(), attribute)
    }
}

/// A named deferred value surfaced to the operator after provisioning
#[derive(Debug, Clone, Serialize)]
pub struct Export {
    /// Export name
    pub name: String,

    /// Exported expression
    pub value: Output,
}

/// Ordered resource specifications plus named exports
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    name: String,
    resources: Vec<ResourceSpec>,
    exports: Vec<Export>,
}

impl Program {
    /// Create an empty program for the named stack
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
            exports: Vec::new(),
        }
    }

    /// Stack name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Specifications in declaration order
    pub fn resources(&self) -> &[ResourceSpec] {
        &self.resources
    }

    /// Registered exports in registration order
    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    /// Look up a specification by logical name
    pub fn get(&self, name: &str) -> Option<&ResourceSpec> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Declare a resource. Names are write-once; a second declaration under
    /// the same name is an error, not an update.
    pub fn add(&mut self, spec: ResourceSpec) -> Result<ResourceHandle> {
        if self.get(&spec.name).is_some() {
            return Err(ProgramError::duplicate_resource(&spec.name));
        }
        debug!("Declared {} '{}'", spec.resource_type, spec.name);
        let handle = ResourceHandle {
            name: spec.name.clone(),
        };
        self.resources.push(spec);
        Ok(handle)
    }

    /// Register a named export
    pub fn export(&mut self, name: impl Into<String>, value: Output) -> Result<()> {
        let name = name.into();
        if self.exports.iter().any(|e| e.name == name) {
            return Err(ProgramError::duplicate_export(name));
        }
        self.exports.push(Export { name, value });
        Ok(())
    }

    /// Validate referential integrity: every reference points at a declared
    /// resource and the dependency graph is acyclic.
    pub fn validate(&self) -> Result<()> {
        let index = self.index_by_name();
        for export in &self.exports {
            for r in export.value.references() {
                if !index.contains_key(r.resource.as_str()) {
                    return Err(ProgramError::unknown_export_reference(
                        &export.name,
                        &r.resource,
                    ));
                }
            }
        }
        self.execution_order()?;
        debug!(
            "Program '{}' validated: {} resources, {} exports",
            self.name,
            self.resources.len(),
            self.exports.len()
        );
        Ok(())
    }

    /// The order the engine will process specifications in: topological
    /// over the dependency graph, declaration order as the tie-break.
    pub fn execution_order(&self) -> Result<Vec<&ResourceSpec>> {
        let graph = self.dependency_graph()?;
        let count = self.resources.len();

        let mut indegree: Vec<usize> = (0..count)
            .map(|i| {
                graph
                    .neighbors_directed(NodeIndex::new(i), Direction::Incoming)
                    .count()
            })
            .collect();
        let mut placed = vec![false; count];
        let mut order = Vec::with_capacity(count);

        while order.len() < count {
            let next = (0..count).find(|&i| !placed[i] && indegree[i] == 0);
            let Some(i) = next else {
                return Err(ProgramError::circular_dependency(
                    self.describe_cycle(&graph),
                ));
            };
            placed[i] = true;
            order.push(&self.resources[i]);
            for neighbor in graph.neighbors_directed(NodeIndex::new(i), Direction::Outgoing) {
                indegree[neighbor.index()] -= 1;
            }
        }

        Ok(order)
    }

    /// Serialize the declaration document to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serialize the declaration document to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn index_by_name(&self) -> HashMap<&str, usize> {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.as_str(), i))
            .collect()
    }

    /// Build the dependency graph; an edge runs from a dependency to its
    /// dependent. References to undeclared names are an error here.
    fn dependency_graph(&self) -> Result<DiGraph<usize, ()>> {
        let index = self.index_by_name();
        let mut graph = DiGraph::with_capacity(self.resources.len(), self.resources.len());
        for i in 0..self.resources.len() {
            graph.add_node(i);
        }

        for (i, spec) in self.resources.iter().enumerate() {
            for dep in spec.dependency_names() {
                let Some(&j) = index.get(dep.as_str()) else {
                    return Err(ProgramError::unknown_resource(&spec.name, dep));
                };
                graph.update_edge(NodeIndex::new(j), NodeIndex::new(i), ());
            }
        }

        Ok(graph)
    }

    fn describe_cycle(&self, graph: &DiGraph<usize, ()>) -> String {
        for scc in tarjan_scc(graph) {
            if scc.len() > 1 {
                let mut names: Vec<&str> = scc
                    .iter()
                    .map(|n| self.resources[n.index()].name.as_str())
                    .collect();
                names.sort_unstable();
                let first = names[0];
                names.push(first);
                return names.join(" -> ");
            }
        }
        for idx in graph.node_indices() {
            if graph.contains_edge(idx, idx) {
                let name = self.resources[idx.index()].name.as_str();
                return format!("{name} -> {name}");
            }
        }
        String::from("(cycle could not be reconstructed)")
    }
}
