#![deny(missing_docs)]

//! # Parent-Chain Resolver
//!
//! Requests are filed under nested folders (`ETH` → `Blocks` → `eth_getBlockByHash`).
//! The namespace of a request is the name of the top-most folder above it.
//! The walk tolerates dangling parent ids and cyclic folder chains.

use crate::workspace::models::Workspace;
use std::collections::{HashMap, HashSet};

/// Namespace assigned to requests whose parent is not a known group.
pub const FALLBACK_NAMESPACE: &str = "Other";

#[derive(Debug, Clone)]
struct GroupEntry {
    name: String,
    parent_id: Option<String>,
}

/// Lookup of every `request_group` in a workspace by id.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    groups: HashMap<String, GroupEntry>,
}

impl GroupIndex {
    /// Indexes the groups of a workspace. On duplicate ids the first group wins.
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let mut groups = HashMap::new();
        for group in workspace.groups() {
            groups
                .entry(group.id.clone())
                .or_insert_with(|| GroupEntry {
                    name: group.name.clone(),
                    parent_id: group.parent_id.clone(),
                });
        }
        Self { groups }
    }

    /// Resolves the namespace for a request given its immediate parent id.
    ///
    /// Returns the name of the top-most group reachable by following parent
    /// links, or [`FALLBACK_NAMESPACE`] if `parent_id` is not a group. A
    /// revisited group id ends the walk at the last name found.
    pub fn resolve_namespace(&self, parent_id: Option<&str>) -> &str {
        let Some(start) = parent_id else {
            return FALLBACK_NAMESPACE;
        };
        let Some(mut entry) = self.groups.get(start) else {
            return FALLBACK_NAMESPACE;
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        while let Some(parent) = entry.parent_id.as_deref() {
            let Some(ancestor) = self.groups.get(parent) else {
                break;
            };
            if !visited.insert(parent) {
                break;
            }
            entry = ancestor;
        }
        &entry.name
    }
}
