#![deny(missing_docs)]

//! # Namespace Module
//!
//! - **resolver**: Finds the top-most group above a request.
//! - **registry**: Collects namespace tags in first-seen order.

pub mod registry;
pub mod resolver;

pub use registry::{NamespaceRegistry, NamespaceTag};
pub use resolver::{GroupIndex, FALLBACK_NAMESPACE};
