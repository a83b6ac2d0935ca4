#![deny(missing_docs)]

//! # Workspace Loader
//!
//! Reads an Insomnia export into a [`Workspace`]. Only a missing or non-list
//! `resources` field is fatal; individual resources are read leniently.

use crate::error::{AppError, AppResult};
use crate::workspace::models::{Resource, Workspace};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON (the default Insomnia export format).
    Json,
    /// YAML.
    Yaml,
}

impl InputFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Loads a workspace export from disk.
///
/// Returns [`AppError::MissingInput`] if the file does not exist.
pub fn load_workspace(path: &Path) -> AppResult<Workspace> {
    if !path.exists() {
        return Err(AppError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_workspace(&content, InputFormat::from_path(path))
}

/// Parses a workspace export from a string.
pub fn parse_workspace(content: &str, format: InputFormat) -> AppResult<Workspace> {
    let raw: Value = match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| {
            AppError::MalformedInput(format!("Failed to parse workspace JSON: {}", e))
        })?,
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            AppError::MalformedInput(format!("Failed to parse workspace YAML: {}", e))
        })?,
    };
    parse_workspace_value(&raw)
}

/// Builds a workspace from an already-parsed document.
pub fn parse_workspace_value(raw: &Value) -> AppResult<Workspace> {
    let resources = raw
        .get("resources")
        .ok_or_else(|| AppError::MalformedInput("missing top-level 'resources' list".into()))?
        .as_array()
        .ok_or_else(|| AppError::MalformedInput("'resources' must be a list".into()))?;

    Ok(Workspace::new(
        resources.iter().map(Resource::from_json).collect(),
    ))
}
