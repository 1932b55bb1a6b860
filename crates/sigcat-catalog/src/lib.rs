//! Signal catalog tree model for sigcat.
//!
//! A catalog is a strict tree of named, typed nodes (branches, signals,
//! properties, attributes). Every field that participates in identifier
//! hashing lives on [`Node`] in this crate; the identifier scheme itself is
//! implemented in `sigcat-id`.
//!
//! Core invariants:
//! - The qualified dotted path of a node is unique across the whole tree
//! - Children are owned by their parent; there are no back-references
//! - Sibling order is the declared (document) order and is preserved
//!
#![deny(missing_docs)]

/// Validated path and unit newtypes.
pub mod identifiers;
/// YAML catalog loader.
pub mod loader;
/// Node and node-kind types.
pub mod node;
/// Validation helpers used by catalog types.
pub mod validation;

pub use identifiers::{SignalPath, Unit};
pub use loader::{load_catalog, load_catalog_str, CatalogError};
pub use node::{Node, NodeKind};
pub use validation::ValidationError;
