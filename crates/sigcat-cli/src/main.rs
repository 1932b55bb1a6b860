//! sigcat CLI - static identifier generation and validation for signal catalogs.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{export, validate};

#[derive(Parser)]
#[command(name = "sigcat")]
#[command(about = "Signal catalog static identifier generation and validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign static identifiers to every node of a catalog
    Export {
        /// Path to the catalog YAML file
        catalog: String,
        /// Output file for the identifier mapping
        #[arg(long, short)]
        output: Option<String>,
        /// Use the incrementing-counter scheme instead of content hashing
        #[arg(long)]
        counter: bool,
        /// Layer byte for 3-byte-hash + 1-byte-namespace packing (0 disables)
        #[arg(long, default_value_t = 0)]
        layer_offset: u32,
        /// Starting value for counter-based identifiers
        #[arg(long, default_value_t = 1)]
        id_offset: u32,
        /// Emit decimal identifiers (counter scheme)
        #[arg(long)]
        decimal: bool,
        /// Pack without the layer byte even when a layer offset is set
        #[arg(long)]
        no_layer: bool,
        /// Previously exported mapping to validate against
        #[arg(long)]
        validate_with: Option<String>,
        /// Validate only; do not write the output file
        #[arg(long)]
        validate_only: bool,
        /// Output the validation report as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error code when validation reports findings
        #[arg(long)]
        strict: bool,
    },
    /// Validate one exported mapping against a reference mapping
    Validate {
        /// Path to the current exported mapping
        current: String,
        /// Path to the reference mapping
        reference: String,
        /// Output the validation report as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error code when validation reports findings
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            catalog,
            output,
            counter,
            layer_offset,
            id_offset,
            decimal,
            no_layer,
            validate_with,
            validate_only,
            json,
            strict,
        } => export::run(export::ExportArgs {
            catalog,
            output,
            counter,
            layer_offset,
            id_offset,
            decimal,
            no_layer,
            validate_with,
            validate_only,
            json,
            strict,
        }),
        Commands::Validate {
            current,
            reference,
            json,
            strict,
        } => validate::run(current, reference, json, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
