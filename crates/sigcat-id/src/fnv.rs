//! FNV-1 hash primitives.
//!
//! Identifier hashing uses FNV-1 (multiply first, then xor; not FNV-1a)
//! with the canonical 32-bit parameters. The hash is a pure function of the
//! descriptor bytes: no seed, no platform dependence, no allocation.

/// Canonical 32-bit FNV offset basis.
pub const FNV1_32_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// Canonical 32-bit FNV prime.
pub const FNV1_32_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1 hash of `bytes`.
pub fn fnv1_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV1_32_OFFSET_BASIS, |hash, &byte| {
        hash.wrapping_mul(FNV1_32_PRIME) ^ u32::from(byte)
    })
}

/// Computes the 24-bit FNV-1 hash of `bytes`.
///
/// The lower 24 bits of the 32-bit hash are retained, leaving the top byte
/// of the packed identifier free for the namespace layer.
pub fn fnv1_24(bytes: &[u8]) -> u32 {
    fnv1_32(bytes) & 0x00ff_ffff
}
