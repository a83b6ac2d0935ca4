#![deny(missing_docs)]

//! # Converter Configuration
//!
//! Everything in the generated document that is not derived from the
//! workspace: the OpenAPI version, `info`, `servers` and the namespace
//! description table. All fields default to the Fukuii JSON-RPC values, so
//! a config file only needs to list what it overrides.

use crate::error::{AppError, AppResult};
use crate::workspace::InputFormat;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_DESCRIPTION: &str = r#"
# Fukuii JSON-RPC API Reference

Complete reference for all JSON-RPC endpoints in the Fukuii Ethereum Classic client.

## Quick Start

All JSON-RPC methods are called via HTTP POST to the RPC endpoint (default: http://localhost:8546).

Example request:
```bash
curl -X POST http://localhost:8546 \
  -H "Content-Type: application/json" \
  -d '{
    "jsonrpc": "2.0",
    "id": 1,
    "method": "eth_blockNumber",
    "params": []
  }'
```

## Namespaces

Fukuii organizes methods into namespaces:

- **ETH**: Core blockchain operations (blocks, transactions, state)
- **WEB3**: Utility methods (hashing, version)
- **NET**: Network and peer information
- **PERSONAL**: Account management (dev/test only)
- **DEBUG**: Debugging and diagnostics
- **QA**: Testing utilities (test networks only)
- **CHECKPOINTING**: ETC checkpointing system
- **FUKUII**: Custom Fukuii extensions
- **TEST**: Test harness methods (test networks only)
- **IELE**: IELE VM support (if enabled)
- **RPC**: RPC metadata

## Security

⚠️ **Important**: Only expose `eth`, `web3`, and `net` namespaces in production.
Never expose `personal`, `debug`, `test`, or `qa` namespaces on public networks.

## Configuration

Enable/disable namespaces in your configuration:
```hocon
fukuii.network.rpc {
  http {
    enabled = true
    interface = "127.0.0.1"
    port = 8546
    apis = "eth,web3,net"  # Comma-separated list
  }
}
```
"#;

const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    (
        "ETH",
        "Core Ethereum blockchain operations including blocks, transactions, accounts, and smart contracts",
    ),
    ("WEB3", "Utility methods for hashing and client information"),
    ("NET", "Network status and peer connection information"),
    ("PERSONAL", "Account management methods (⚠️ Development/test only)"),
    ("DEBUG", "Debugging and diagnostic methods (⚠️ Use with caution)"),
    (
        "QA",
        "Quality assurance and testing utilities (❌ Test networks only)",
    ),
    ("CHECKPOINTING", "ETC checkpointing system for finality"),
    ("FUKUII", "Custom Fukuii-specific extensions"),
    ("TEST", "Test harness methods (❌ Test networks only)"),
    ("IELE", "IELE VM support (if enabled)"),
    ("RPC", "RPC metadata and module information"),
];

/// Contact block of `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiContact {
    /// Contact name.
    pub name: String,
    /// Contact URL.
    pub url: String,
}

/// License block of `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLicense {
    /// License name.
    pub name: String,
    /// License URL.
    pub url: String,
}

/// One entry of the top-level `servers` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiServer {
    /// Server URL.
    pub url: String,
    /// Short description shown by the renderer.
    pub description: String,
}

impl ApiServer {
    /// Creates a server entry.
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Static metadata attached to every generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Value of the top-level `openapi` field.
    pub openapi_version: String,
    /// `info.title`.
    pub title: String,
    /// `info.description` (Markdown).
    pub description: String,
    /// `info.version`.
    pub version: String,
    /// `info.contact`.
    pub contact: Option<ApiContact>,
    /// `info.license`.
    pub license: Option<ApiLicense>,
    /// Top-level `servers`.
    pub servers: Vec<ApiServer>,
    /// Descriptions for well-known namespaces, keyed by namespace name.
    ///
    /// Entries read from a config file are merged over the built-in table.
    #[serde(deserialize_with = "merge_namespace_descriptions")]
    pub namespace_descriptions: IndexMap<String, String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            openapi_version: "3.0.3".to_string(),
            title: "Fukuii JSON-RPC API".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: "1.0.0".to_string(),
            contact: Some(ApiContact {
                name: "Chippr Robotics LLC".to_string(),
                url: "https://github.com/chippr-robotics/fukuii".to_string(),
            }),
            license: Some(ApiLicense {
                name: "Apache 2.0".to_string(),
                url: "https://www.apache.org/licenses/LICENSE-2.0.html".to_string(),
            }),
            servers: vec![
                ApiServer::new("http://localhost:8546", "Local development node"),
                ApiServer::new("http://localhost:8545", "Alternative local port"),
            ],
            namespace_descriptions: default_namespace_descriptions(),
        }
    }
}

fn default_namespace_descriptions() -> IndexMap<String, String> {
    DEFAULT_NAMESPACES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn merge_namespace_descriptions<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = IndexMap::<String, String>::deserialize(deserializer)?;
    let mut merged = default_namespace_descriptions();
    merged.extend(overrides);
    Ok(merged)
}

impl ConverterConfig {
    /// Loads a configuration file (`.json`, `.yaml` or `.yml`).
    ///
    /// Fields absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = match InputFormat::from_path(path) {
            InputFormat::Yaml => serde_yaml::from_str(&content)?,
            InputFormat::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }
}
