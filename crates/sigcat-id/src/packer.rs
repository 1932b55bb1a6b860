//! Identifier packing.
//!
//! Turns a hash or counter value, plus an optional namespace layer byte,
//! into the exported textual identifier. Packing is pure except for the
//! reserved/out-of-range layer warnings, which go through `tracing`.

use crate::config::ExportConfig;

/// Counter identifiers wrap at one million so they fit six digits / 3 bytes.
pub const COUNTER_MODULUS: u32 = 1_000_000;

/// Clamps a configured layer offset to one byte.
///
/// Values 1-63 are accepted but warned about (reserved band); values above
/// 255 are warned about and clamped to 255.
pub fn clamp_layer(layer_offset: u32) -> u8 {
    if (1..=63).contains(&layer_offset) {
        tracing::warn!(layer = layer_offset, "layer values 1-63 are reserved");
    } else if layer_offset > 255 {
        tracing::warn!(
            layer = layer_offset,
            "layer value exceeds one byte, clamping to 255"
        );
    }
    layer_offset.min(255) as u8
}

/// Packs a full 32-bit hash as eight hex digits.
pub fn pack_hash(hash32: u32) -> String {
    format!("{:08X}", hash32)
}

/// Packs a 24-bit hash with the layer byte in the low slot.
pub fn pack_hash_layered(hash24: u32, layer: u8) -> String {
    debug_assert!(hash24 <= 0x00ff_ffff);
    format!("{:08X}", (hash24 << 8) | u32::from(layer))
}

/// Packs the `counter`-th identifier of a counter-scheme run.
///
/// The value is offset by the configured start and wrapped modulo
/// [`COUNTER_MODULUS`]. Decimal output is six zero-filled digits with no
/// layer; hex output is six digits without a layer or eight digits with the
/// layer byte packed low.
pub fn pack_counter(counter: u32, config: &ExportConfig) -> String {
    let node_id = counter.wrapping_add(config.id_start_offset) % COUNTER_MODULUS;
    if config.use_decimal_output {
        format!("{:06}", node_id)
    } else if config.layered() {
        format!("{:08X}", (node_id << 8) | u32::from(clamp_layer(config.layer_offset)))
    } else {
        format!("{:06X}", node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdScheme;

    #[test]
    fn layer_is_clamped_to_one_byte() {
        assert_eq!(clamp_layer(0), 0);
        assert_eq!(clamp_layer(63), 63);
        assert_eq!(clamp_layer(255), 255);
        assert_eq!(clamp_layer(9000), 255);
    }

    #[test]
    fn hash_packing_is_zero_padded_hex() {
        assert_eq!(pack_hash(0x1a), "0000001A");
        assert_eq!(pack_hash(0xdead_beef), "DEADBEEF");
    }

    #[test]
    fn layered_packing_round_trips() {
        for layer in [0u8, 1, 63, 64, 200, 255] {
            let hash24 = 0x00ab_cdef;
            let packed = pack_hash_layered(hash24, layer);
            let value = u32::from_str_radix(&packed, 16).unwrap();
            assert_eq!(value & 0xff, u32::from(layer));
            assert_eq!(value >> 8, hash24);
        }
    }

    #[test]
    fn counter_packing_variants() {
        let mut config = ExportConfig {
            scheme: IdScheme::Counter,
            ..ExportConfig::default()
        };
        assert_eq!(pack_counter(0, &config), "000001");

        config.use_decimal_output = true;
        assert_eq!(pack_counter(41, &config), "000042");

        config.use_decimal_output = false;
        config.layer_offset = 200;
        assert_eq!(pack_counter(0, &config), "000001C8");

        config.omit_layer = true;
        assert_eq!(pack_counter(0x0f, &config), "000010");
    }

    #[test]
    fn counter_wraps_at_one_million() {
        let config = ExportConfig {
            scheme: IdScheme::Counter,
            use_decimal_output: true,
            ..ExportConfig::default()
        };
        assert_eq!(pack_counter(COUNTER_MODULUS - 1, &config), "000000");
    }
}
