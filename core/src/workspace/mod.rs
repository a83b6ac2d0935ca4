#![deny(missing_docs)]

//! # Workspace Module
//!
//! - **models**: In-memory view of an Insomnia workspace export.
//! - **loader**: Reading exports from disk or from strings (JSON / YAML).

pub mod loader;
pub mod models;

pub use loader::{load_workspace, parse_workspace, parse_workspace_value, InputFormat};
pub use models::{RequestBody, Resource, ResourceKind, Workspace};
