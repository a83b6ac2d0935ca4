#![deny(missing_docs)]

//! # OpenAPI Output Module
//!
//! - **config**: Fixed document metadata and namespace descriptions.
//! - **components**: Fixed JSON-RPC schemas and response shapes.
//! - **operation**: One operation per workspace request.
//! - **document**: Path map assembly and serialization.

pub mod components;
pub mod config;
pub mod document;
pub mod operation;

pub use config::{ApiContact, ApiLicense, ApiServer, ConverterConfig};
pub use document::{assemble, ApiDocument, OutputFormat};
pub use operation::{synthesize, Operation};
