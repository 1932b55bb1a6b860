//! Tree exporter.
//!
//! Walks the catalog depth-first, parent before children, siblings in
//! declared order. The walk order is a contract: it fixes counter-based
//! identifier assignment and the order in which the collision check
//! observes prior entries.

use crate::config::{ExportConfig, IdScheme};
use crate::descriptor::node_descriptor;
use crate::errors::ExportError;
use crate::fnv::{fnv1_24, fnv1_32};
use crate::mapping::{ExportMapping, IdRecord};
use crate::packer::{clamp_layer, pack_counter, pack_hash, pack_hash_layered};
use sigcat_catalog::{Node, SignalPath};
use std::collections::HashMap;

/// Exports identifiers for every node of the tree rooted at `root`.
///
/// The counter scheme stamps the packed identifier onto each visited node
/// (`Node::static_uid`) for reuse within the run, hence the mutable root.
/// A hash collision aborts the run with [`ExportError::Collision`] and
/// leaves no partially written output behind.
pub fn export(root: &mut Node, config: &ExportConfig) -> Result<ExportMapping, ExportError> {
    tracing::info!(nodes = root.count(), scheme = ?config.scheme, "assigning static identifiers");
    let root_path = SignalPath::parse(root.name.as_str())?;
    let mut mapping = ExportMapping::new();
    let mut assigned: HashMap<String, SignalPath> = HashMap::new();
    let mut counter: u32 = 0;
    export_node(
        root,
        root_path,
        config,
        &mut counter,
        &mut assigned,
        &mut mapping,
    )?;
    Ok(mapping)
}

fn export_node(
    node: &mut Node,
    path: SignalPath,
    config: &ExportConfig,
    counter: &mut u32,
    assigned: &mut HashMap<String, SignalPath>,
    mapping: &mut ExportMapping,
) -> Result<(), ExportError> {
    let uid = match config.scheme {
        IdScheme::ContentHash => {
            let descriptor = node_descriptor(&path, node);
            let hex = if config.layered() {
                pack_hash_layered(fnv1_24(&descriptor), clamp_layer(config.layer_offset))
            } else {
                pack_hash(fnv1_32(&descriptor))
            };
            // Keyed by identifier value so the first collision is caught on
            // insertion, not by rescanning the mapping.
            if let Some(first) = assigned.insert(hex.clone(), path.clone()) {
                return Err(ExportError::Collision {
                    uid: hex,
                    first: first.to_string(),
                    second: path.to_string(),
                });
            }
            format!("0x{hex}")
        }
        IdScheme::Counter => {
            let packed = pack_counter(*counter, config);
            *counter += 1;
            let uid = if config.use_decimal_output {
                packed
            } else {
                format!("0x{packed}")
            };
            node.static_uid = Some(uid.clone());
            uid
        }
    };

    mapping.insert(path.clone(), IdRecord::from_node(uid, node));

    for child in &mut node.children {
        let child_path = path.join(&child.name);
        export_node(child, child_path, config, counter, assigned, mapping)?;
    }
    Ok(())
}
