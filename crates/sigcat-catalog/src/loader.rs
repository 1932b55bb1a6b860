//! YAML catalog loader.
//!
//! Reads a catalog document of the form
//!
//! ```yaml
//! Vehicle:
//!   type: branch
//!   description: High-level vehicle data.
//!   children:
//!     Speed:
//!       type: signal
//!       datatype: float
//!       unit: km/h
//!       description: Vehicle speed.
//! ```
//!
//! Sibling order follows the document order; the exporter's counter scheme
//! depends on it.

use crate::identifiers::SignalPath;
use crate::node::{Node, NodeKind};
use crate::validation::ValidationError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// Document is not valid YAML or does not match the catalog shape.
    #[error("malformed catalog document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Document does not contain exactly one root node.
    #[error("catalog must contain exactly one root node, found {0}")]
    RootCount(usize),
    /// A node or child key is not a usable name.
    #[error("invalid node name '{name}' under '{parent}'")]
    InvalidName {
        /// Offending key.
        name: String,
        /// Qualified path of the parent ("-" for the document root).
        parent: String,
    },
    /// A name failed pattern validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: NodeKind,
    datatype: Option<String>,
    unit: Option<crate::identifiers::Unit>,
    allowed: Option<Vec<String>>,
    min: Option<serde_yaml::Number>,
    max: Option<serde_yaml::Number>,
    #[serde(default)]
    description: String,
    fka: Option<OneOrMany>,
    deprecation: Option<String>,
    #[serde(default)]
    children: serde_yaml::Mapping,
    #[serde(flatten)]
    extended: BTreeMap<String, serde_yaml::Value>,
}

/// `fka` may be written as a single former name or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(name) => vec![name],
            OneOrMany::Many(names) => names,
        }
    }
}

/// Loads a catalog tree from a YAML file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Node, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    load_catalog_str(&text)
}

/// Loads a catalog tree from YAML text.
pub fn load_catalog_str(text: &str) -> Result<Node, CatalogError> {
    let doc: serde_yaml::Mapping = serde_yaml::from_str(text)?;
    if doc.len() != 1 {
        return Err(CatalogError::RootCount(doc.len()));
    }
    let (key, value) = doc.into_iter().next().expect("len checked above");
    let name = node_name(key, "-")?;
    let raw: RawNode = serde_yaml::from_value(value)?;
    build_node(name, raw, "-")
}

fn node_name(key: serde_yaml::Value, parent: &str) -> Result<String, CatalogError> {
    match key {
        serde_yaml::Value::String(name) => Ok(name),
        other => Err(CatalogError::InvalidName {
            name: format!("{:?}", other),
            parent: parent.to_string(),
        }),
    }
}

fn build_node(name: String, raw: RawNode, parent: &str) -> Result<Node, CatalogError> {
    // Names are single path segments; dots are reserved for qualification.
    if name.contains('.') || SignalPath::parse(name.as_str()).is_err() {
        return Err(CatalogError::InvalidName {
            name,
            parent: parent.to_string(),
        });
    }
    let own_path = if parent == "-" {
        name.clone()
    } else {
        format!("{}.{}", parent, name)
    };

    let mut children = Vec::with_capacity(raw.children.len());
    for (key, value) in raw.children {
        let child_name = node_name(key, &own_path)?;
        let child_raw: RawNode = serde_yaml::from_value(value)?;
        children.push(build_node(child_name, child_raw, &own_path)?);
    }

    Ok(Node {
        name,
        kind: raw.kind,
        datatype: raw.datatype,
        unit: raw.unit,
        allowed: raw.allowed,
        min: raw.min,
        max: raw.max,
        description: raw.description,
        fka: raw.fka.map(OneOrMany::into_vec),
        deprecation: raw.deprecation,
        extended_attributes: raw.extended,
        static_uid: None,
        children,
    })
}
