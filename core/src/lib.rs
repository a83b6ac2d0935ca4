#![deny(missing_docs)]

//! # rpcdoc Core
//!
//! Converts an Insomnia workspace export (nested folders of JSON-RPC requests)
//! into a flat OpenAPI document with one path per method and one tag per
//! top-level namespace, and checks the two stay in sync.

/// Shared error types.
pub mod error;

/// Workspace export loading.
pub mod workspace;

/// Namespace resolution and tag collection.
pub mod namespace;

/// OpenAPI document model and assembly.
pub mod openapi;

/// End-to-end conversion.
pub mod convert;

/// Workspace / OpenAPI consistency checks.
pub mod sync;

pub use convert::{convert_file, convert_workspace, traversal_order, ConversionSummary};
pub use error::{AppError, AppResult};
pub use namespace::{GroupIndex, NamespaceRegistry, NamespaceTag, FALLBACK_NAMESPACE};
pub use openapi::{assemble, synthesize, ApiDocument, ConverterConfig, Operation, OutputFormat};
pub use sync::{check_sync, check_sync_files, SyncReport};
pub use workspace::{load_workspace, parse_workspace, InputFormat, Resource, Workspace};
