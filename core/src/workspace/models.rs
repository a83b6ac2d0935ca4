#![deny(missing_docs)]

//! # Workspace Models
//!
//! Insomnia exports are loosely typed: every resource carries `_id`, `_type` and
//! `parentId`, and the remaining fields depend on the type. Resources are read
//! leniently so that one odd record never aborts a whole conversion.

use serde_json::Value;

/// Fallback request name used when a request has no `name`.
pub const UNNAMED_REQUEST: &str = "unknown";

/// Body text assumed when a request carries no body.
pub const EMPTY_BODY_TEXT: &str = "{}";

/// The `_type` of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    /// `request_group`: a folder of requests and other groups.
    Group,
    /// `request`: a single documented call.
    Request,
    /// Any other type (workspace, environment, cookie jar, ...). Ignored.
    Other(String),
}

impl ResourceKind {
    /// Maps the raw `_type` string onto a kind.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "request_group" => ResourceKind::Group,
            "request" => ResourceKind::Request,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

/// Body attached to a request resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestBody {
    /// Raw body text, expected to hold JSON.
    pub text: Option<String>,
}

/// A single node of the workspace tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Unique resource id (`_id`).
    pub id: String,
    /// Resource type (`_type`).
    pub kind: ResourceKind,
    /// Id of the containing resource; `None` at the root.
    pub parent_id: Option<String>,
    /// Display name. Groups name namespaces, requests name methods.
    pub name: String,
    /// Free-form description, empty strings normalised to `None`.
    pub description: Option<String>,
    /// Example payload, requests only.
    pub body: Option<RequestBody>,
}

impl Resource {
    /// Builds a resource from a raw JSON record.
    ///
    /// Fields with an unexpected JSON type are treated as absent.
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let kind = value
            .get("_type")
            .and_then(Value::as_str)
            .map(ResourceKind::from_type_name)
            .unwrap_or_else(|| ResourceKind::Other(String::new()));

        let body = value
            .get("body")
            .and_then(Value::as_object)
            .map(|body| RequestBody {
                text: body.get("text").and_then(Value::as_str).map(str::to_string),
            });

        Resource {
            id: text("_id").unwrap_or_default(),
            kind,
            parent_id: text("parentId"),
            name: text("name").unwrap_or_else(|| UNNAMED_REQUEST.to_string()),
            description: text("description").filter(|d| !d.is_empty()),
            body,
        }
    }

    /// True for `request_group` resources.
    pub fn is_group(&self) -> bool {
        self.kind == ResourceKind::Group
    }

    /// True for `request` resources.
    pub fn is_request(&self) -> bool {
        self.kind == ResourceKind::Request
    }

    /// The example body text, defaulting to an empty JSON object.
    pub fn body_text(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.text.as_deref())
            .unwrap_or(EMPTY_BODY_TEXT)
    }
}

/// A loaded workspace export: the flat list of resources in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workspace {
    /// All resources, in the order they appear in the export.
    pub resources: Vec<Resource>,
}

impl Workspace {
    /// Wraps an already-built resource list.
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Iterates over `request_group` resources in document order.
    pub fn groups(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.is_group())
    }

    /// Iterates over `request` resources in document order.
    pub fn requests(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.is_request())
    }
}
