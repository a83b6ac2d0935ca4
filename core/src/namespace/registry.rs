#![deny(missing_docs)]

//! # Namespace Registry
//!
//! Deduplicates namespaces and records one tag per namespace, in the order the
//! namespaces are first seen. That order becomes the sidebar order of the
//! rendered docs.

use indexmap::IndexMap;
use serde::Serialize;

/// A documentation tag for one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceTag {
    /// Namespace name, e.g. `ETH`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl NamespaceTag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// First-seen ordered set of namespace tags.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    descriptions: IndexMap<String, String>,
    tags: IndexMap<String, NamespaceTag>,
}

impl NamespaceRegistry {
    /// Creates a registry backed by a table of known namespace descriptions.
    pub fn new(descriptions: IndexMap<String, String>) -> Self {
        Self {
            descriptions,
            tags: IndexMap::new(),
        }
    }

    /// Records `namespace`. Returns `true` if this is the first sighting.
    ///
    /// Unknown namespaces are described as `"<name> namespace methods"`.
    pub fn register(&mut self, namespace: &str) -> bool {
        if self.tags.contains_key(namespace) {
            return false;
        }
        let description = self
            .descriptions
            .get(namespace)
            .cloned()
            .unwrap_or_else(|| format!("{} namespace methods", namespace));
        self.tags.insert(
            namespace.to_string(),
            NamespaceTag::new(namespace, description),
        );
        true
    }

    /// Tags in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &NamespaceTag> {
        self.tags.values()
    }

    /// Consumes the registry, yielding tags in first-seen order.
    pub fn into_tags(self) -> Vec<NamespaceTag> {
        self.tags.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> NamespaceRegistry {
        let mut descriptions = IndexMap::new();
        descriptions.insert(
            "NET".to_string(),
            "Network status and peer connection information".to_string(),
        );
        NamespaceRegistry::new(descriptions)
    }

    #[test]
    fn test_known_description() {
        let mut reg = registry();
        assert!(reg.register("NET"));
        assert_eq!(
            reg.into_tags(),
            vec![NamespaceTag::new(
                "NET",
                "Network status and peer connection information"
            )]
        );
    }

    #[test]
    fn test_generated_description() {
        let mut reg = registry();
        reg.register("Other");
        let tag = reg.tags().next().unwrap();
        assert_eq!(tag.description, "Other namespace methods");
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut reg = registry();
        assert!(reg.register("ETH"));
        assert!(!reg.register("ETH"));
        assert!(!reg.register("ETH"));
        assert_eq!(reg.tags().count(), 1);
    }

    #[test]
    fn test_first_seen_order() {
        let mut reg = registry();
        for ns in ["WEB3", "ETH", "WEB3", "NET", "ETH", "Other"] {
            reg.register(ns);
        }
        let names: Vec<&str> = reg.tags().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["WEB3", "ETH", "NET", "Other"]);
    }
}
