#![deny(missing_docs)]

//! # Document Assembler
//!
//! Collects synthesized operations into the final OpenAPI document. Paths are
//! emitted in code-point order; tags keep the order they were registered in.

use crate::error::AppResult;
use crate::namespace::NamespaceTag;
use crate::openapi::components::components;
use crate::openapi::config::ConverterConfig;
use crate::openapi::operation::Operation;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialization format for the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// `.yaml`/`.yml` select YAML, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

/// The generated OpenAPI document, fully in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    /// Fixed metadata.
    pub config: ConverterConfig,
    /// One operation per path. Iteration order is the emission order.
    pub paths: BTreeMap<String, Operation>,
    /// Namespace tags in first-seen order.
    pub tags: Vec<NamespaceTag>,
}

/// Builds the document from operations in traversal order.
///
/// When two operations share a path the later one replaces the earlier.
pub fn assemble(
    operations: impl IntoIterator<Item = Operation>,
    tags: Vec<NamespaceTag>,
    config: &ConverterConfig,
) -> ApiDocument {
    let mut paths = BTreeMap::new();
    for op in operations {
        paths.insert(op.path.clone(), op);
    }
    ApiDocument {
        config: config.clone(),
        paths,
        tags,
    }
}

impl ApiDocument {
    /// Number of distinct paths.
    pub fn endpoint_count(&self) -> usize {
        self.paths.len()
    }

    /// Builds the JSON representation.
    pub fn to_value(&self) -> Value {
        let config = &self.config;

        let mut info = Map::new();
        info.insert("title".to_string(), json!(config.title));
        info.insert("description".to_string(), json!(config.description));
        info.insert("version".to_string(), json!(config.version));
        if let Some(contact) = &config.contact {
            info.insert(
                "contact".to_string(),
                json!({ "name": contact.name, "url": contact.url }),
            );
        }
        if let Some(license) = &config.license {
            info.insert(
                "license".to_string(),
                json!({ "name": license.name, "url": license.url }),
            );
        }

        let servers: Vec<Value> = config
            .servers
            .iter()
            .map(|s| json!({ "url": s.url, "description": s.description }))
            .collect();

        let mut paths = Map::new();
        for (path, op) in &self.paths {
            paths.insert(path.clone(), json!({ "post": op.to_value() }));
        }

        let tags: Vec<Value> = self
            .tags
            .iter()
            .map(|t| json!({ "name": t.name, "description": t.description }))
            .collect();

        let mut doc = Map::new();
        doc.insert("openapi".to_string(), json!(config.openapi_version));
        doc.insert("info".to_string(), Value::Object(info));
        doc.insert("servers".to_string(), Value::Array(servers));
        doc.insert("paths".to_string(), Value::Object(paths));
        doc.insert("components".to_string(), components());
        doc.insert("tags".to_string(), Value::Array(tags));
        Value::Object(doc)
    }

    /// Serializes the document in the requested format.
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        let value = self.to_value();
        let mut out = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&value)?,
            OutputFormat::Yaml => serde_yaml::to_string(&value)?,
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    /// Writes the document to `path`, creating parent directories.
    ///
    /// The format follows the file extension.
    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        let rendered = self.render(OutputFormat::from_path(path))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, rendered)?;
        Ok(())
    }
}
