use serde::{Deserialize, Serialize};

/// How identifiers are derived during an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdScheme {
    /// Content-derived FNV-1 hash of the node's semantic descriptor.
    /// Stable across tree edits that do not touch the node itself.
    #[default]
    ContentHash,
    /// Incrementing counter in tree-walk order. Compact and human-traceable
    /// but unstable: any insertion shifts all subsequent identifiers.
    Counter,
}

/// Configuration surface for one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Identifier derivation scheme.
    pub scheme: IdScheme,
    /// Namespace layer byte for the 3-byte-hash + 1-byte-layer packing.
    /// 0 disables namespacing and uses the full 32-bit hash slot.
    pub layer_offset: u32,
    /// Starting value for counter-based identifiers.
    pub id_start_offset: u32,
    /// Emit decimal identifiers instead of hex (counter scheme only).
    pub use_decimal_output: bool,
    /// Pack without the layer byte even when a layer offset is configured.
    pub omit_layer: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            scheme: IdScheme::ContentHash,
            layer_offset: 0,
            id_start_offset: 1,
            use_decimal_output: false,
            omit_layer: false,
        }
    }
}

impl ExportConfig {
    /// Whether the layer byte participates in packing for this run.
    pub fn layered(&self) -> bool {
        self.layer_offset != 0 && !self.omit_layer
    }
}
