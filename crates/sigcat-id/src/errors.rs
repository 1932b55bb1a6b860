use sigcat_catalog::ValidationError;
use thiserror::Error;

/// Errors raised during an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Two nodes hashed to the same identifier. Fatal: silent collisions
    /// corrupt downstream consumers, so the run aborts without writing.
    #[error(
        "identifier collision: 0x{uid} is assigned to both '{first}' and '{second}'; \
         adjust one of the nodes"
    )]
    Collision {
        /// The colliding identifier (hex digits, no prefix).
        uid: String,
        /// Path that was assigned the identifier first.
        first: String,
        /// Path whose identifier collided.
        second: String,
    },
    /// The root node name is not a valid path segment.
    #[error("invalid root node: {0}")]
    InvalidRoot(#[from] ValidationError),
}

/// Errors raised while loading a reference mapping.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Reference file could not be read.
    #[error("cannot read reference file: {0}")]
    Io(#[from] std::io::Error),
    /// Reference file is not a well-formed export mapping.
    #[error("malformed reference mapping: {0}")]
    Malformed(#[from] serde_yaml::Error),
}
