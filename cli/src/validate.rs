#![deny(missing_docs)]

//! # Validate Command
//!
//! Reports whether the generated OpenAPI document still matches the
//! workspace. Fails (non-zero exit) on any mismatch; never rewrites files.

use crate::project::ProjectArgs;
use rpcdoc_core::{check_sync_files, AppResult};

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,
}

/// Executes the sync check.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ValidateArgs) -> AppResult<()> {
    let report = check_sync_files(&args.project.input_path(), &args.project.output_path())?;
    println!("{}", report);
    if !report.is_in_sync() {
        println!("   Run: rpcdoc convert");
    }
    report.into_result().map(|_| ())
}
