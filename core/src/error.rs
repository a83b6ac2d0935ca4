#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON (de)serialization failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML (de)serialization failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A required input document does not exist on disk.
    #[from(ignore)]
    #[display("Input document not found: {_0:?}")]
    MissingInput(PathBuf),

    /// The workspace document has no usable top-level `resources` list.
    #[from(ignore)]
    #[display("Malformed workspace document: {_0}")]
    MalformedInput(String),

    /// The generated OpenAPI document no longer matches the workspace.
    #[from(ignore)]
    #[display(
        "OpenAPI spec is out of sync: {missing} missing, {extra} extra, expected {expected} paths, found {found}"
    )]
    SyncMismatch {
        /// Request names with no emitted path.
        missing: usize,
        /// Emitted paths with no matching request.
        extra: usize,
        /// Number of request resources in the workspace.
        expected: usize,
        /// Number of paths in the OpenAPI document.
        found: usize,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
