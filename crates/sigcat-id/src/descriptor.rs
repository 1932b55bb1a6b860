//! Semantic descriptor byte encoding.
//!
//! The descriptor is the hash input for content-derived identifiers: a
//! domain-separated, fixed-order concatenation of a node's identity-relevant
//! fields. The field order and encoding are a versioned contract
//! ([`DESCRIPTOR_DOMAIN`]); any change invalidates every previously
//! generated identifier and must bump the domain version.
//!
//! Contract v1, fields in order, separated by a 0x1F unit separator:
//! 1. qualified path
//! 2. datatype (empty unless the kind carries one)
//! 3. kind (lowercase name)
//! 4. unit (empty if absent)
//! 5. allowed values joined by `,` (empty if absent)
//! 6. min (empty if absent; `0` is a value, not an absence)
//! 7. max (empty if absent)
//!
//! Absent optional fields contribute an empty string at their slot, so every
//! node hashes the same number of fields in the same order.

use crate::mapping::IdRecord;
use sigcat_catalog::{Node, SignalPath};

/// Domain separator and version tag prefixed to every descriptor.
pub const DESCRIPTOR_DOMAIN: &[u8] = b"sigcat:uid:v1\0";

const FIELD_SEPARATOR: u8 = 0x1f;

fn descriptor_bytes(fields: [&str; 7]) -> Vec<u8> {
    let len = DESCRIPTOR_DOMAIN.len()
        + fields.iter().map(|f| f.len() + 1).sum::<usize>();
    let mut buf = Vec::with_capacity(len);
    buf.extend_from_slice(DESCRIPTOR_DOMAIN);
    for field in fields {
        buf.extend_from_slice(field.as_bytes());
        buf.push(FIELD_SEPARATOR);
    }
    buf
}

/// Builds the descriptor for a catalog node at `path`.
pub fn node_descriptor(path: &SignalPath, node: &Node) -> Vec<u8> {
    let datatype = if node.kind.carries_datatype() {
        node.datatype.as_deref().unwrap_or("")
    } else {
        ""
    };
    let allowed = node
        .allowed
        .as_ref()
        .map(|values| values.join(","))
        .unwrap_or_default();
    let min = node.min.as_ref().map(|n| n.to_string()).unwrap_or_default();
    let max = node.max.as_ref().map(|n| n.to_string()).unwrap_or_default();
    descriptor_bytes([
        path.as_ref(),
        datatype,
        node.kind.as_str(),
        node.unit.as_ref().map(AsRef::as_ref).unwrap_or(""),
        &allowed,
        &min,
        &max,
    ])
}

/// Rebuilds the descriptor from a persisted export record.
///
/// Produces byte-identical output to [`node_descriptor`] for the node the
/// record was exported from; the validator relies on this to classify
/// identifier changes without access to the reference catalog source.
pub fn record_descriptor(path: &str, record: &IdRecord) -> Vec<u8> {
    let allowed = record
        .allowed
        .as_ref()
        .map(|values| values.join(","))
        .unwrap_or_default();
    let min = record
        .min
        .as_ref()
        .map(|n| n.to_string())
        .unwrap_or_default();
    let max = record
        .max
        .as_ref()
        .map(|n| n.to_string())
        .unwrap_or_default();
    descriptor_bytes([
        path,
        record.datatype.as_deref().unwrap_or(""),
        record.kind.as_str(),
        record.unit.as_ref().map(AsRef::as_ref).unwrap_or(""),
        &allowed,
        &min,
        &max,
    ])
}
