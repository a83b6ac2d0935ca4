#![deny(missing_docs)]

//! # JSON-RPC Schemas
//!
//! Fixed schema fragments shared by every generated operation. None of these
//! depend on example data.

use serde_json::{json, Map, Value};

/// `$ref` target of the success response body.
pub const RESPONSE_SCHEMA_REF: &str = "#/components/schemas/JSONRPCResponse";

/// JSON-RPC protocol version pinned in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// The `components` object: request, response and error envelopes.
pub fn components() -> Value {
    let mut schemas = Map::new();
    schemas.insert("JSONRPCRequest".to_string(), request_envelope());
    schemas.insert("JSONRPCResponse".to_string(), response_envelope());
    schemas.insert("JSONRPCError".to_string(), error_envelope());
    json!({ "schemas": schemas })
}

fn id_schema() -> Value {
    json!({
        "oneOf": [
            { "type": "string" },
            { "type": "integer" }
        ]
    })
}

fn annotated_id_schema(key: &str, value: Value) -> Value {
    let mut id = id_schema();
    if let Some(obj) = id.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
    id
}

fn request_envelope() -> Value {
    json!({
        "type": "object",
        "required": ["jsonrpc", "method", "params", "id"],
        "properties": {
            "jsonrpc": {
                "type": "string",
                "enum": [JSONRPC_VERSION],
                "description": "JSON-RPC version"
            },
            "method": {
                "type": "string",
                "description": "Method name"
            },
            "params": {
                "type": "array",
                "description": "Method parameters"
            },
            "id": annotated_id_schema("description", json!("Request identifier"))
        }
    })
}

fn response_envelope() -> Value {
    json!({
        "type": "object",
        "required": ["jsonrpc", "id"],
        "properties": {
            "jsonrpc": {
                "type": "string",
                "enum": [JSONRPC_VERSION]
            },
            "result": {
                "description": "Result of the method call"
            },
            "error": {
                "$ref": "#/components/schemas/JSONRPCError"
            },
            "id": id_schema()
        }
    })
}

fn error_envelope() -> Value {
    json!({
        "type": "object",
        "required": ["code", "message"],
        "properties": {
            "code": {
                "type": "integer",
                "description": "Error code"
            },
            "message": {
                "type": "string",
                "description": "Error message"
            },
            "data": {
                "description": "Additional error data"
            }
        }
    })
}

/// Request body schema for one method.
///
/// `method` is pinned to `method_name`; `params_example` is shown as the
/// example parameter list.
pub fn request_schema(method_name: &str, params_example: Value) -> Value {
    let id = annotated_id_schema("example", json!(1));
    json!({
        "type": "object",
        "required": ["jsonrpc", "method", "params", "id"],
        "properties": {
            "jsonrpc": {
                "type": "string",
                "enum": [JSONRPC_VERSION],
                "example": JSONRPC_VERSION
            },
            "method": {
                "type": "string",
                "enum": [method_name],
                "example": method_name
            },
            "params": {
                "type": "array",
                "items": {},
                "example": params_example
            },
            "id": id
        }
    })
}

/// The fixed `responses` object attached to every operation.
pub fn responses() -> Value {
    json!({
        "200": {
            "description": "Successful response",
            "content": {
                "application/json": {
                    "schema": { "$ref": RESPONSE_SCHEMA_REF }
                }
            }
        },
        "400": {
            "description": "Bad request - Invalid JSON-RPC request"
        },
        "500": {
            "description": "Internal server error"
        }
    })
}
