//! Cross-version validation.
//!
//! Compares a freshly computed export mapping against a previously exported
//! reference mapping: structural presence, identifier stability, and
//! semantic drift. All findings accumulate into one [`ValidationReport`];
//! the caller decides which categories affect exit status.

use crate::descriptor::record_descriptor;
use crate::mapping::ExportMapping;
use serde::Serialize;
use std::fmt;

/// An identifier that changed although the node's semantic descriptor did
/// not. Typically caused by a change in hashing/packing configuration, not
/// by the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftFinding {
    /// Qualified path of the affected node.
    pub path: String,
    /// Identifier recorded in the reference mapping.
    pub reference_uid: String,
    /// Freshly computed identifier.
    pub current_uid: String,
}

/// Aggregated result of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Paths present only in the current mapping; they received fresh
    /// identifiers.
    pub added: Vec<String>,
    /// Paths present only in the reference mapping.
    pub removed: Vec<String>,
    /// Number of paths whose identifier is unchanged.
    pub stable: usize,
    /// Paths whose identifier changed together with their semantics.
    /// Expected: the new identifier correctly reflects the new meaning.
    pub changed: Vec<String>,
    /// Identifier drift: changed identifier, unchanged semantics.
    pub drifted: Vec<DriftFinding>,
    /// True when identifier comparison was skipped because the two mappings
    /// use incompatible identifier schemes.
    pub uid_comparison_skipped: bool,
}

impl ValidationReport {
    /// Whether the report contains anything an operator should look at.
    /// Expected semantic changes do not count as findings.
    pub fn has_findings(&self) -> bool {
        !self.added.is_empty()
            || !self.removed.is_empty()
            || !self.drifted.is_empty()
            || self.uid_comparison_skipped
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.removed {
            writeln!(f, "removed: {path} (identifier retired)")?;
        }
        for path in &self.added {
            writeln!(f, "added:   {path} (fresh identifier)")?;
        }
        for path in &self.changed {
            writeln!(f, "changed: {path} (new identifier tracks new semantics)")?;
        }
        for drift in &self.drifted {
            writeln!(
                f,
                "DRIFT:   {} {} -> {} with unchanged semantics",
                drift.path, drift.reference_uid, drift.current_uid
            )?;
        }
        if self.uid_comparison_skipped {
            writeln!(
                f,
                "identifier comparison skipped: incompatible identifier schemes"
            )?;
        }
        write!(
            f,
            "{} stable, {} changed, {} drifted, {} added, {} removed",
            self.stable,
            self.changed.len(),
            self.drifted.len(),
            self.added.len(),
            self.removed.len()
        )
    }
}

/// True when every record uses the `0x`-prefixed form, false when none
/// does, `None` for a mixed mapping.
fn hex_scheme(mapping: &ExportMapping) -> Option<bool> {
    let mut records = mapping.iter().map(|(_, record)| record.is_hex_scheme());
    let first = records.next()?;
    records.all(|hex| hex == first).then_some(first)
}

/// Validates `current` against a previously exported `reference`.
pub fn validate(current: &ExportMapping, reference: &ExportMapping) -> ValidationReport {
    let mut report = ValidationReport::default();

    let compare_uids = match (hex_scheme(current), hex_scheme(reference)) {
        (Some(a), Some(b)) if a == b => true,
        (None, _) | (_, None) if current.is_empty() || reference.is_empty() => true,
        _ => false,
    };
    if !compare_uids {
        tracing::warn!(
            "reference mapping uses an incompatible identifier scheme; \
             comparing structure only"
        );
        report.uid_comparison_skipped = true;
    }

    for (path, _) in reference.iter() {
        if !current.contains_path(path.as_ref()) {
            report.removed.push(path.as_ref().to_string());
        }
    }

    for (path, record) in current.iter() {
        let reference_record = match reference.get(path.as_ref()) {
            Some(r) => r,
            None => {
                report.added.push(path.as_ref().to_string());
                continue;
            }
        };
        if report.uid_comparison_skipped {
            continue;
        }
        if record.static_uid == reference_record.static_uid {
            report.stable += 1;
        } else if record_descriptor(path.as_ref(), record)
            == record_descriptor(path.as_ref(), reference_record)
        {
            tracing::warn!(
                path = path.as_ref(),
                reference = %reference_record.static_uid,
                current = %record.static_uid,
                "identifier drift with unchanged semantics"
            );
            report.drifted.push(DriftFinding {
                path: path.as_ref().to_string(),
                reference_uid: reference_record.static_uid.clone(),
                current_uid: record.static_uid.clone(),
            });
        } else {
            report.changed.push(path.as_ref().to_string());
        }
    }

    report
}
