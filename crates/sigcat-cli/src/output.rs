//! Report formatting utilities.

use sigcat_id::ValidationReport;

/// Prints a validation report, human-readable or JSON.
pub fn print_report(report: &ValidationReport, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
