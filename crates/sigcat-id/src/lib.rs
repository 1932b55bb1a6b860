//! Stable identifier generation and cross-version validation for signal
//! catalogs.
//!
//! This crate provides:
//! - Semantic descriptor construction (the fixed-order byte encoding of a
//!   node's identity-relevant fields)
//! - FNV-1 hashing in 32-bit and 24-bit widths
//! - Identifier packing: content hash or incrementing counter, with an
//!   optional namespace layer byte
//! - The tree exporter that assigns one identifier per node, fail-fast on
//!   collisions
//! - The cross-version validator comparing a fresh export against a
//!   previously exported reference mapping
//!
//! Core invariants:
//! - Identifiers are content-derived: `fnv1(descriptor_bytes(node))`
//! - Descriptor field order is a versioned contract; changing it changes
//!   every identifier in the catalog
//! - Within one export run no two nodes share an identifier
//!
#![deny(missing_docs)]

/// Export configuration surface.
pub mod config;
/// Semantic descriptor byte encoding.
pub mod descriptor;
/// Error types for export and reference loading.
pub mod errors;
/// Tree exporter.
pub mod exporter;
/// FNV-1 hash primitives.
pub mod fnv;
/// Ordered export mapping and its YAML persistence.
pub mod mapping;
/// Identifier packing (hash/counter + layer byte).
pub mod packer;
/// Cross-version validation.
pub mod validator;

pub use config::{ExportConfig, IdScheme};
pub use descriptor::{node_descriptor, record_descriptor, DESCRIPTOR_DOMAIN};
pub use errors::{ExportError, ReferenceError};
pub use exporter::export;
pub use fnv::{fnv1_24, fnv1_32};
pub use mapping::{ExportMapping, IdRecord};
pub use validator::{validate, DriftFinding, ValidationReport};
