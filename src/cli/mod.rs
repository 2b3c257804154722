//! Command-line interface implementation
//!
//! `extract-objects` takes no required arguments: run bare, it projects the
//! bundled tables and prints the descriptor array to stdout. Diagnostics go
//! to stderr only.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, ExtractConfig};
use crate::enumeration::EnumerationTable;
use crate::manifest::build_manifest;
use crate::models::{ParameterTable, SpriteDescriptor};
use crate::output::{render_descriptors, render_manifest, write_document, OutputFormat};
use crate::project::{project_with, IdPolicy, ProjectOptions};
use crate::tables::{
    bundled_enumeration, bundled_parameters, load_enumeration, load_parameters, TableError,
};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Extract strategy board object descriptors as JSON
#[derive(Parser, Debug)]
#[command(name = "extract-objects")]
#[command(
    about = "Join the sprite parameter table with object names and print the descriptors as JSON"
)]
#[command(version)]
pub struct Cli {
    /// Sprite parameter table (JSON5). Defaults to the bundled table
    #[arg(long)]
    pub parameters: Option<PathBuf>,

    /// Object name table (JSON5). Defaults to the bundled table
    #[arg(long)]
    pub enumeration: Option<PathBuf>,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document shape: descriptors (default) or manifest
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fail on keys that are not plain decimal integers
    #[arg(long)]
    pub strict_ids: bool,

    /// Load settings from an extract.toml file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print one line per object to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            parameters: self.parameters.clone(),
            enumeration: self.enumeration.clone(),
            output: self.output.clone(),
            format: self.format,
            strict_ids: self.strict_ids.then_some(true),
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    run_extract(&cli)
}

/// Execute the extraction
fn run_extract(cli: &Cli) -> ExitCode {
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    merge_cli_overrides(&mut config, &cli.overrides());

    let (parameters, enumeration) = match load_tables(&config) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = ProjectOptions {
        ids: if config.identifiers.strict { IdPolicy::Strict } else { IdPolicy::Lenient },
    };
    let projection = match project_with(&parameters, &enumeration, &options) {
        Ok(projection) => projection,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    for warning in &projection.warnings {
        eprintln!("Warning: {}", warning);
    }
    if cli.verbose {
        log_descriptors(&projection.descriptors);
    }

    let (rendered, count) = match config.output.format {
        OutputFormat::Descriptors => {
            (render_descriptors(&projection.descriptors), projection.descriptors.len())
        }
        OutputFormat::Manifest => {
            let manifest = build_manifest(&projection.descriptors, config.output.default_scale);
            for warning in &manifest.warnings {
                eprintln!("Warning: {}", warning);
            }
            (render_manifest(&manifest.entries), manifest.entries.len())
        }
    };
    let document = match rendered {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let destination = config.output.path.as_deref();
    if let Err(e) = write_document(&document, destination) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    if cli.verbose {
        eprintln!("Wrote {} objects to {}", count, describe_destination(destination));
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn load_tables(config: &ExtractConfig) -> Result<(ParameterTable, EnumerationTable), TableError> {
    let parameters = match config.tables.parameters.as_deref() {
        Some(path) => load_parameters(path)?,
        None => bundled_parameters()?,
    };
    let enumeration = match config.tables.enumeration.as_deref() {
        Some(path) => load_enumeration(path)?,
        None => bundled_enumeration()?,
    };
    Ok((parameters, enumeration))
}

fn log_descriptors(descriptors: &[SpriteDescriptor]) {
    for descriptor in descriptors {
        let id = descriptor.id().map(|v| v.to_string()).unwrap_or_default();
        eprintln!("Process object {} ({})", id, descriptor.name().unwrap_or_default());
    }
}

fn describe_destination(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "stdout".to_string(),
    }
}
