use crate::identifiers::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a catalog node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Grouping node; carries no datatype.
    Branch,
    /// Observable signal value.
    Signal,
    /// Configuration property.
    Property,
    /// Static attribute of the entity.
    Attribute,
}

impl NodeKind {
    /// Canonical lowercase name, as written in catalog and export documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Branch => "branch",
            NodeKind::Signal => "signal",
            NodeKind::Property => "property",
            NodeKind::Attribute => "attribute",
        }
    }

    /// Whether nodes of this kind declare a datatype.
    pub fn carries_datatype(&self) -> bool {
        matches!(self, NodeKind::Signal | NodeKind::Property)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the signal catalog tree.
///
/// The identity-relevant fields (name/path, kind, datatype, unit, allowed,
/// min, max) are the hash input for the content-derived identifier scheme and
/// must not be mutated after a node has been hashed within a run. The
/// remaining fields (description, fka, deprecation) are descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node name (one path segment).
    pub name: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Declared datatype; absent for branches.
    pub datatype: Option<String>,
    /// Unit of measurement, if any.
    pub unit: Option<Unit>,
    /// Ordered set of allowed values, if restricted.
    pub allowed: Option<Vec<String>>,
    /// Lower bound, if declared. `Some(0)` is a real bound, not an absence.
    pub min: Option<serde_yaml::Number>,
    /// Upper bound, if declared.
    pub max: Option<serde_yaml::Number>,
    /// Human-readable description.
    pub description: String,
    /// Former qualified names of this node, newest first.
    pub fka: Option<Vec<String>>,
    /// Deprecation note, if the node is deprecated.
    pub deprecation: Option<String>,
    /// Extension attributes that are not part of the core model.
    pub extended_attributes: BTreeMap<String, serde_yaml::Value>,
    /// Identifier stamped by the counter-based exporter within a run.
    pub static_uid: Option<String>,
    /// Child nodes in declared order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a branch node with no attributes beyond name and description.
    pub fn branch(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::leaf(name, NodeKind::Branch, description)
    }

    /// Creates a childless node of the given kind.
    pub fn leaf(
        name: impl Into<String>,
        kind: NodeKind,
        description: impl Into<String>,
    ) -> Self {
        Node {
            name: name.into(),
            kind,
            datatype: None,
            unit: None,
            allowed: None,
            min: None,
            max: None,
            description: description.into(),
            fka: None,
            deprecation: None,
            extended_attributes: BTreeMap::new(),
            static_uid: None,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in the subtree rooted here, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
