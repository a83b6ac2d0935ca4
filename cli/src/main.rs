#![deny(missing_docs)]

//! # rpcdoc CLI
//!
//! Command Line Interface for the JSON-RPC documentation toolchain.
//!
//! Supported Commands:
//! - `convert` (default): Insomnia workspace -> OpenAPI document.
//! - `validate`: Checks the OpenAPI document is in sync with the workspace.

use clap::{Parser, Subcommand};
use rpcdoc_core::AppResult;

mod convert;
mod project;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "JSON-RPC API reference generator")]
#[clap(args_conflicts_with_subcommands = true)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(flatten)]
    convert: convert::ConvertArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the Insomnia workspace into an OpenAPI document.
    Convert(convert::ConvertArgs),
    /// Check that the OpenAPI document matches the Insomnia workspace.
    Validate(validate::ValidateArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Convert(args)) => convert::execute(args)?,
        Some(Commands::Validate(args)) => validate::execute(args)?,
        None => convert::execute(&cli.convert)?,
    }

    Ok(())
}
