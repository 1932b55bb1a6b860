//! Validate command implementation.

use crate::output;
use sigcat_id::{validate, ExportMapping};

pub fn run(
    current: String,
    reference: String,
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let current_mapping = ExportMapping::from_yaml_file(&current)
        .map_err(|e| format!("failed to load current mapping: {}", e))?;
    let reference_mapping = ExportMapping::from_yaml_file(&reference)
        .map_err(|e| format!("failed to load reference: {}", e))?;

    let report = validate(&current_mapping, &reference_mapping);
    output::print_report(&report, json)?;

    if strict && report.has_findings() {
        std::process::exit(1);
    }
    Ok(())
}
