#![deny(missing_docs)]

//! # Conversion Pipeline
//!
//! Workspace ➜ OpenAPI in a single synchronous pass:
//!
//! 1. Index groups by id.
//! 2. Bucket requests by their immediate parent. Buckets follow group
//!    declaration order, then any other parent ids in first-seen order.
//! 3. For each request: resolve its namespace, register the namespace tag,
//!    synthesize the operation.
//! 4. Assemble the document.
//!
//! Tag order and path collisions both follow the bucket traversal order.

use crate::error::AppResult;
use crate::namespace::{GroupIndex, NamespaceRegistry};
use crate::openapi::config::ConverterConfig;
use crate::openapi::document::{assemble, ApiDocument};
use crate::openapi::operation::{synthesize, Operation};
use crate::workspace::loader::load_workspace;
use crate::workspace::models::{Resource, Workspace};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Outcome of a conversion, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of paths written.
    pub endpoints: usize,
    /// Number of namespace tags written.
    pub tags: usize,
    /// Emitted operations whose body was not valid JSON and was replaced by `{}`.
    pub malformed_bodies: Vec<String>,
    /// Where the document was written.
    pub output: PathBuf,
}

/// Requests in traversal order.
pub fn traversal_order(workspace: &Workspace) -> Vec<&Resource> {
    let mut buckets: IndexMap<Option<&str>, Vec<&Resource>> = IndexMap::new();
    for group in workspace.groups() {
        buckets.entry(Some(group.id.as_str())).or_default();
    }
    for request in workspace.requests() {
        buckets
            .entry(request.parent_id.as_deref())
            .or_default()
            .push(request);
    }
    buckets.into_values().flatten().collect()
}

/// Converts a loaded workspace into an OpenAPI document.
pub fn convert_workspace(workspace: &Workspace, config: &ConverterConfig) -> ApiDocument {
    let groups = GroupIndex::from_workspace(workspace);
    let mut registry = NamespaceRegistry::new(config.namespace_descriptions.clone());

    let operations: Vec<Operation> = traversal_order(workspace)
        .into_iter()
        .map(|request| {
            let namespace = groups.resolve_namespace(request.parent_id.as_deref());
            registry.register(namespace);
            synthesize(request, namespace)
        })
        .collect();

    assemble(operations, registry.into_tags(), config)
}

/// Reads `input`, converts it and writes the document to `output`.
///
/// Nothing is written if the input is missing or malformed.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConverterConfig,
) -> AppResult<ConversionSummary> {
    let workspace = load_workspace(input)?;
    let document = convert_workspace(&workspace, config);
    document.write_to(output)?;

    let malformed_bodies = document
        .paths
        .values()
        .filter(|op| op.body_parse_failed)
        .map(|op| op.summary.clone())
        .collect();

    Ok(ConversionSummary {
        endpoints: document.endpoint_count(),
        tags: document.tags.len(),
        malformed_bodies,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::loader::{parse_workspace, InputFormat};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn workspace(json: serde_json::Value) -> Workspace {
        parse_workspace(&json.to_string(), InputFormat::Json).unwrap()
    }

    fn names<'a>(requests: &[&'a Resource]) -> Vec<&'a str> {
        requests.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_traversal_buckets_by_parent() {
        let ws = workspace(json!({ "resources": [
            { "_id": "req_orphan", "_type": "request", "parentId": null, "name": "orphan" },
            { "_id": "req_net", "_type": "request", "parentId": "fld_net", "name": "net_version" },
            { "_id": "fld_eth", "_type": "request_group", "parentId": null, "name": "ETH" },
            { "_id": "fld_net", "_type": "request_group", "parentId": null, "name": "NET" },
            { "_id": "req_eth", "_type": "request", "parentId": "fld_eth", "name": "eth_chainId" },
            { "_id": "req_lost", "_type": "request", "parentId": "fld_gone", "name": "lost" }
        ]}));
        assert_eq!(
            names(&traversal_order(&ws)),
            vec!["eth_chainId", "net_version", "orphan", "lost"]
        );
    }

    #[test]
    fn test_tags_follow_traversal() {
        let ws = workspace(json!({ "resources": [
            { "_id": "req_orphan", "_type": "request", "parentId": null, "name": "orphan" },
            { "_id": "fld_web3", "_type": "request_group", "parentId": null, "name": "WEB3" },
            { "_id": "fld_eth", "_type": "request_group", "parentId": null, "name": "ETH" },
            { "_id": "req_eth", "_type": "request", "parentId": "fld_eth", "name": "eth_chainId" },
            { "_id": "req_web3", "_type": "request", "parentId": "fld_web3", "name": "web3_sha3" }
        ]}));
        let doc = convert_workspace(&ws, &ConverterConfig::default());
        let tags: Vec<&str> = doc.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tags, vec!["WEB3", "ETH", "Other"]);
    }

    #[test]
    fn test_non_request_types_ignored() {
        let ws = workspace(json!({ "resources": [
            { "_id": "wrk_1", "_type": "workspace", "parentId": null, "name": "Fukuii" },
            { "_id": "env_1", "_type": "environment", "parentId": "wrk_1", "name": "Base" },
            { "_id": "jar_1", "_type": "cookie_jar", "parentId": "wrk_1", "name": "Jar" }
        ]}));
        let doc = convert_workspace(&ws, &ConverterConfig::default());
        assert_eq!(doc.endpoint_count(), 0);
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_unused_groups_produce_no_tags() {
        let ws = workspace(json!({ "resources": [
            { "_id": "fld_empty", "_type": "request_group", "parentId": null, "name": "EMPTY" }
        ]}));
        let doc = convert_workspace(&ws, &ConverterConfig::default());
        assert!(doc.tags.is_empty());
    }
}
