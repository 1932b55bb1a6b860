//! Ordered export mapping and its YAML persistence.
//!
//! The mapping is keyed by qualified path and keeps entries in tree-walk
//! order, both in memory and in the serialized document. Reference mappings
//! loaded for validation use the same type and are never mutated.

use crate::errors::ReferenceError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sigcat_catalog::{Node, NodeKind, SignalPath, Unit};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// One exported record: the identifier plus the node's descriptive
/// attributes. Field order here is the key order of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdRecord {
    /// Exported identifier: hex digits prefixed `0x`, or plain decimal in
    /// decimal counter mode.
    #[serde(rename = "staticUID")]
    pub static_uid: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Unit of measurement, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// Declared datatype; present only for kinds that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Ordered set of allowed values, if restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    /// Lower bound, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<serde_yaml::Number>,
    /// Upper bound, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_yaml::Number>,
    /// Former qualified names, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fka: Option<Vec<String>>,
    /// Deprecation note, if deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<String>,
}

impl IdRecord {
    /// Builds the record for `node` with an already-packed identifier.
    pub fn from_node(static_uid: String, node: &Node) -> Self {
        IdRecord {
            static_uid,
            description: node.description.clone(),
            kind: node.kind,
            unit: node.unit.clone(),
            datatype: if node.kind.carries_datatype() {
                node.datatype.clone()
            } else {
                None
            },
            allowed: node.allowed.clone(),
            min: node.min.clone(),
            max: node.max.clone(),
            fka: resolve_fka(node),
            deprecation: node.deprecation.clone(),
        }
    }

    /// Whether this record's identifier uses the hex (`0x`-prefixed) form.
    pub fn is_hex_scheme(&self) -> bool {
        self.static_uid.starts_with("0x")
    }
}

/// The explicit `fka` field wins; an `fka` extension attribute is the
/// fallback. The two are never merged.
fn resolve_fka(node: &Node) -> Option<Vec<String>> {
    if node.fka.is_some() {
        return node.fka.clone();
    }
    match node.extended_attributes.get("fka") {
        Some(serde_yaml::Value::String(name)) => Some(vec![name.clone()]),
        Some(serde_yaml::Value::Sequence(names)) => Some(
            names
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

/// Ordered dictionary from qualified path to exported record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportMapping {
    entries: Vec<(SignalPath, IdRecord)>,
    by_path: HashMap<String, usize>,
}

impl ExportMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no records have been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a record. Qualified paths are unique by tree construction.
    pub fn insert(&mut self, path: SignalPath, record: IdRecord) {
        self.by_path
            .insert(path.as_ref().to_string(), self.entries.len());
        self.entries.push((path, record));
    }

    /// Looks up a record by qualified path.
    pub fn get(&self, path: &str) -> Option<&IdRecord> {
        self.by_path.get(path).map(|&idx| &self.entries[idx].1)
    }

    /// Whether a path is present.
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Records in tree-walk order.
    pub fn iter(&self) -> impl Iterator<Item = (&SignalPath, &IdRecord)> {
        self.entries.iter().map(|(path, record)| (path, record))
    }

    /// Serializes the mapping as a YAML document.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Writes the mapping to `path` as YAML.
    pub fn write_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ReferenceError> {
        let text = self.to_yaml()?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Loads a previously exported mapping, e.g. as a validation reference.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&text)?)
    }

    /// Parses a mapping from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

impl Serialize for ExportMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, record) in &self.entries {
            map.serialize_entry(path, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExportMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = ExportMapping;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping from qualified path to id record")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut mapping = ExportMapping::new();
                while let Some((key, record)) = access.next_entry::<String, IdRecord>()? {
                    let path = SignalPath::parse(key).map_err(serde::de::Error::custom)?;
                    mapping.insert(path, record);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
