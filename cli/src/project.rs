#![deny(missing_docs)]

//! # Project Paths
//!
//! Both commands work on the same pair of files, located relative to a
//! project root.

use std::path::PathBuf;

/// Input/output locations shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root that relative paths are resolved against.
    #[clap(long, env = "RPCDOC_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Insomnia workspace export.
    #[clap(long, default_value = "insomnia_workspace.json")]
    pub input: PathBuf,

    /// Generated OpenAPI document. `.yaml`/`.yml` selects YAML output.
    #[clap(long, default_value = "docs/api/openapi.json")]
    pub output: PathBuf,
}

impl ProjectArgs {
    /// Absolute or root-relative path of the workspace export.
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input)
    }

    /// Absolute or root-relative path of the OpenAPI document.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}
