#![deny(missing_docs)]

//! # Operation Synthesizer
//!
//! Turns one `request` resource into one documented POST operation. The
//! request schema is fixed apart from the pinned method name and the example
//! parameters taken from the request's body.

use crate::openapi::components::{request_schema, responses};
use crate::workspace::models::Resource;
use serde_json::{json, Map, Value};

/// A documented operation, keyed by [`Operation::path`] in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Path key: `/` followed by the request name, unescaped.
    pub path: String,
    /// Namespace tag the operation is listed under.
    pub namespace: String,
    /// Short summary (the method name).
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Operation id: method name with `-` replaced by `_`.
    pub operation_id: String,
    /// Request body schema.
    pub request_schema: Value,
    /// Parsed example body, `{}` if the body text was not valid JSON.
    pub example_body: Value,
    /// Set when the body text failed to parse and `{}` was substituted.
    pub body_parse_failed: bool,
}

impl Operation {
    /// Example parameters shown in the request schema.
    pub fn params_example(&self) -> &Value {
        &self.request_schema["properties"]["params"]["example"]
    }

    /// Serializes the operation as an OpenAPI Operation Object.
    pub fn to_value(&self) -> Value {
        let mut op = Map::new();
        op.insert("tags".to_string(), json!([self.namespace]));
        op.insert("summary".to_string(), json!(self.summary));
        op.insert("description".to_string(), json!(self.description));
        op.insert("operationId".to_string(), json!(self.operation_id));
        op.insert(
            "requestBody".to_string(),
            json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": self.request_schema,
                        "example": self.example_body
                    }
                }
            }),
        );
        op.insert("responses".to_string(), responses());
        Value::Object(op)
    }
}

/// Parses a request body, substituting `{}` when the text is not JSON.
///
/// The flag is `true` when the substitution happened.
pub fn parse_body(text: &str) -> (Value, bool) {
    match serde_json::from_str(text) {
        Ok(value) => (value, false),
        Err(_) => (Value::Object(Map::new()), true),
    }
}

/// Builds the operation for a request resolved to `namespace`.
pub fn synthesize(resource: &Resource, namespace: &str) -> Operation {
    let name = resource.name.as_str();
    let (example_body, body_parse_failed) = parse_body(resource.body_text());

    let params_example = example_body
        .as_object()
        .and_then(|body| body.get("params"))
        .cloned()
        .unwrap_or_else(|| json!([]));

    let description = match resource.description.as_deref() {
        Some(desc) if !desc.is_empty() => desc.to_string(),
        _ => format!("Execute {} method", name),
    };

    Operation {
        path: format!("/{}", name),
        namespace: namespace.to_string(),
        summary: name.to_string(),
        description,
        operation_id: name.replace('-', "_"),
        request_schema: request_schema(name, params_example),
        example_body,
        body_parse_failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::models::{RequestBody, ResourceKind};
    use pretty_assertions::assert_eq;

    fn request(name: &str, body: Option<&str>, description: Option<&str>) -> Resource {
        Resource {
            id: format!("req_{}", name),
            kind: ResourceKind::Request,
            parent_id: Some("fld_eth".into()),
            name: name.into(),
            description: description.map(str::to_string),
            body: body.map(|text| RequestBody {
                text: Some(text.into()),
            }),
        }
    }

    #[test]
    fn test_block_number() {
        let res = request(
            "eth_blockNumber",
            Some(r#"{"jsonrpc":"2.0","method":"eth_blockNumber","params":[],"id":1}"#),
            None,
        );
        let op = synthesize(&res, "ETH");
        assert_eq!(op.path, "/eth_blockNumber");
        assert_eq!(op.summary, "eth_blockNumber");
        assert_eq!(op.description, "Execute eth_blockNumber method");
        assert_eq!(op.params_example(), &json!([]));
        assert_eq!(
            op.request_schema["properties"]["method"]["enum"],
            json!(["eth_blockNumber"])
        );
        assert_eq!(op.example_body["id"], json!(1));
        assert!(!op.body_parse_failed);

        let value = op.to_value();
        assert_eq!(value["tags"], json!(["ETH"]));
        assert_eq!(value["operationId"], json!("eth_blockNumber"));
        assert_eq!(value["requestBody"]["required"], json!(true));
    }

    #[test]
    fn test_params_copied_verbatim() {
        let res = request(
            "eth_getBalance",
            Some(r#"{"params":["0x407d73d8a49eeb85d32cf465507dd71d507100c1","latest"]}"#),
            Some("Returns the balance of the account"),
        );
        let op = synthesize(&res, "ETH");
        assert_eq!(
            op.params_example(),
            &json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"])
        );
        assert_eq!(op.description, "Returns the balance of the account");
    }

    #[test]
    fn test_malformed_body_recovers() {
        let res = request("eth_call", Some("{not json"), None);
        let op = synthesize(&res, "ETH");
        assert!(op.body_parse_failed);
        assert_eq!(op.example_body, json!({}));
        assert_eq!(op.params_example(), &json!([]));
    }

    #[test]
    fn test_missing_body() {
        let op = synthesize(&request("net_version", None, None), "NET");
        assert!(!op.body_parse_failed);
        assert_eq!(op.example_body, json!({}));
        assert_eq!(op.params_example(), &json!([]));
    }

    #[test]
    fn test_non_object_body_keeps_example() {
        let op = synthesize(&request("batch", Some("[1, 2]"), None), "Other");
        assert_eq!(op.example_body, json!([1, 2]));
        assert_eq!(op.params_example(), &json!([]));
    }

    #[test]
    fn test_name_used_verbatim() {
        let op = synthesize(&request("qa-mine blocks/fast", None, None), "QA");
        assert_eq!(op.path, "/qa-mine blocks/fast");
        assert_eq!(op.operation_id, "qa_mine blocks/fast");
    }
}
