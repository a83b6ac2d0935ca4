#![deny(missing_docs)]

//! # Convert Command
//!
//! Insomnia workspace ➜ OpenAPI document.

use crate::project::ProjectArgs;
use rpcdoc_core::{convert_file, AppResult, ConverterConfig};
use std::path::PathBuf;

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,

    /// Converter configuration (`.json`, `.yaml` or `.yml`).
    /// Overrides the built-in title, servers and namespace descriptions.
    #[clap(long, env = "RPCDOC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Executes the conversion.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => ConverterConfig::from_file(&args.project.root.join(path))?,
        None => ConverterConfig::default(),
    };

    let input = args.project.input_path();
    let output = args.project.output_path();
    println!("Converting {:?}...", input);

    let summary = convert_file(&input, &output, &config)?;

    for name in &summary.malformed_bodies {
        println!("Warning: request body of '{}' is not valid JSON, using {{}}", name);
    }
    println!("Converted {} endpoints to OpenAPI spec", summary.endpoints);
    println!("Created {} namespace tags", summary.tags);
    println!("Written to: {:?}", summary.output);

    Ok(())
}
