//! Export command implementation.

use crate::output;
use sigcat_catalog::load_catalog;
use sigcat_id::{export, validate, ExportConfig, ExportMapping, IdScheme};
use std::path::PathBuf;

/// Arguments of the `export` subcommand.
pub struct ExportArgs {
    pub catalog: String,
    pub output: Option<String>,
    pub counter: bool,
    pub layer_offset: u32,
    pub id_offset: u32,
    pub decimal: bool,
    pub no_layer: bool,
    pub validate_with: Option<String>,
    pub validate_only: bool,
    pub json: bool,
    pub strict: bool,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut root =
        load_catalog(&args.catalog).map_err(|e| format!("failed to load catalog: {}", e))?;

    let config = ExportConfig {
        scheme: if args.counter {
            IdScheme::Counter
        } else {
            IdScheme::ContentHash
        },
        layer_offset: args.layer_offset,
        id_start_offset: args.id_offset,
        use_decimal_output: args.decimal,
        omit_layer: args.no_layer,
    };

    // A collision aborts here, before anything touches the output file.
    let mapping = export(&mut root, &config)?;

    let mut findings = false;
    if let Some(reference) = &args.validate_with {
        let reference_path = resolve_reference(reference)?;
        tracing::info!(
            reference = %reference_path.display(),
            "validating identifiers against reference mapping"
        );
        let reference_mapping = ExportMapping::from_yaml_file(&reference_path)
            .map_err(|e| format!("failed to load reference: {}", e))?;
        let report = validate(&mapping, &reference_mapping);
        output::print_report(&report, args.json)?;
        findings = report.has_findings();
    }

    if !args.validate_only {
        let output_path = args
            .output
            .as_deref()
            .ok_or("output file required unless --validate-only is set")?;
        mapping.write_yaml(output_path)?;
        println!("Exported {} identifiers to {}", mapping.len(), output_path);
    }

    if args.strict && findings {
        std::process::exit(1);
    }
    Ok(())
}

/// Relative reference paths resolve against the working directory.
fn resolve_reference(reference: &str) -> Result<PathBuf, std::io::Error> {
    let path = PathBuf::from(reference);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
