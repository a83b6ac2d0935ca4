#![deny(missing_docs)]

//! # Sync Validation
//!
//! Checks that a generated OpenAPI document still matches its workspace:
//! same number of requests and paths, and the same set of method names. The
//! check only reports; it never touches either document.

use crate::error::{AppError, AppResult};
use crate::workspace::loader::{load_workspace, InputFormat};
use crate::workspace::models::Workspace;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Names listed per category before the report is truncated.
pub const REPORT_LIMIT: usize = 5;

/// Result of comparing a workspace against an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Number of `request` resources in the workspace.
    pub request_count: usize,
    /// Number of path keys in the document.
    pub path_count: usize,
    /// Request names with no matching path.
    pub missing: BTreeSet<String>,
    /// Path names (leading `/` stripped) with no matching request.
    pub extra: BTreeSet<String>,
}

impl SyncReport {
    /// True when counts and name sets agree.
    pub fn is_in_sync(&self) -> bool {
        self.request_count == self.path_count && self.missing.is_empty() && self.extra.is_empty()
    }

    /// Converts an out-of-sync report into [`AppError::SyncMismatch`].
    pub fn into_result(self) -> AppResult<Self> {
        if self.is_in_sync() {
            Ok(self)
        } else {
            Err(AppError::SyncMismatch {
                missing: self.missing.len(),
                extra: self.extra.len(),
                expected: self.request_count,
                found: self.path_count,
            })
        }
    }
}

fn write_category(
    f: &mut std::fmt::Formatter<'_>,
    title: &str,
    names: &BTreeSet<String>,
) -> std::fmt::Result {
    if names.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{} ({}):", title, names.len())?;
    for name in names.iter().take(REPORT_LIMIT) {
        writeln!(f, "   - {}", name)?;
    }
    if names.len() > REPORT_LIMIT {
        writeln!(f, "   ... and {} more", names.len() - REPORT_LIMIT)?;
    }
    Ok(())
}

impl Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Validation Results ===")?;
        writeln!(f, "Insomnia requests: {}", self.request_count)?;
        writeln!(f, "OpenAPI paths: {}", self.path_count)?;
        write_category(f, "Missing in OpenAPI", &self.missing)?;
        write_category(f, "Extra in OpenAPI", &self.extra)?;
        if self.is_in_sync() {
            write!(f, "OpenAPI spec is in sync with Insomnia workspace")
        } else {
            writeln!(f)?;
            write!(f, "OpenAPI spec is OUT OF SYNC with Insomnia workspace")?;
            if self.request_count != self.path_count {
                write!(
                    f,
                    "\n   Count mismatch: Expected {} paths, found {}",
                    self.request_count, self.path_count
                )?;
            }
            Ok(())
        }
    }
}

/// Compares a workspace against a parsed OpenAPI document.
///
/// A document without a `paths` object is treated as having no paths.
pub fn check_sync(workspace: &Workspace, document: &Value) -> SyncReport {
    let requests: Vec<&str> = workspace.requests().map(|r| r.name.as_str()).collect();
    let paths: Vec<&str> = document
        .get("paths")
        .and_then(Value::as_object)
        .map(|paths| paths.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let request_names: BTreeSet<&str> = requests.iter().copied().collect();
    let path_names: BTreeSet<&str> = paths
        .iter()
        .map(|p| p.trim_start_matches('/'))
        .collect();

    SyncReport {
        request_count: requests.len(),
        path_count: paths.len(),
        missing: request_names
            .difference(&path_names)
            .map(|s| s.to_string())
            .collect(),
        extra: path_names
            .difference(&request_names)
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Loads both documents from disk and compares them.
pub fn check_sync_files(workspace_path: &Path, openapi_path: &Path) -> AppResult<SyncReport> {
    let workspace = load_workspace(workspace_path)?;
    if !openapi_path.exists() {
        return Err(AppError::MissingInput(openapi_path.to_path_buf()));
    }
    let content = fs::read_to_string(openapi_path)?;
    let document: Value = match InputFormat::from_path(openapi_path) {
        InputFormat::Yaml => serde_yaml::from_str(&content)?,
        InputFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(check_sync(&workspace, &document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::models::{Resource, ResourceKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ws(names: &[&str]) -> Workspace {
        Workspace::new(
            names
                .iter()
                .map(|n| Resource {
                    id: format!("req_{}", n),
                    kind: ResourceKind::Request,
                    parent_id: None,
                    name: n.to_string(),
                    description: None,
                    body: None,
                })
                .collect(),
        )
    }

    fn doc(paths: &[&str]) -> Value {
        let mut map = serde_json::Map::new();
        for p in paths {
            map.insert(p.to_string(), json!({ "post": {} }));
        }
        json!({ "paths": map })
    }

    #[test]
    fn test_in_sync() {
        let report = check_sync(
            &ws(&["eth_chainId", "net_version"]),
            &doc(&["/eth_chainId", "/net_version"]),
        );
        assert!(report.is_in_sync());
        assert!(report.clone().into_result().is_ok());
        assert!(report.to_string().ends_with("in sync with Insomnia workspace"));
    }

    #[test]
    fn test_missing_and_extra() {
        let report = check_sync(
            &ws(&["eth_chainId", "net_version"]),
            &doc(&["/eth_chainId", "/web3_sha3"]),
        );
        assert_eq!(
            report.missing,
            BTreeSet::from(["net_version".to_string()])
        );
        assert_eq!(report.extra, BTreeSet::from(["web3_sha3".to_string()]));
        assert!(!report.is_in_sync());
        match report.into_result() {
            Err(AppError::SyncMismatch {
                missing, extra, ..
            }) => {
                assert_eq!((missing, extra), (1, 1));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_count_mismatch() {
        let report = check_sync(&ws(&["eth_call", "eth_call"]), &doc(&["/eth_call"]));
        assert!(report.missing.is_empty());
        assert!(report.extra.is_empty());
        assert!(!report.is_in_sync());
        assert!(report
            .to_string()
            .contains("Count mismatch: Expected 2 paths, found 1"));
    }

    #[test]
    fn test_report_truncates() {
        let names: Vec<String> = (0..8).map(|i| format!("m{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let report = check_sync(&ws(&refs), &doc(&[]));
        let text = report.to_string();
        assert!(text.contains("Missing in OpenAPI (8):"));
        assert!(text.contains("   - m4"));
        assert!(!text.contains("   - m5"));
        assert!(text.contains("... and 3 more"));
    }

    #[test]
    fn test_document_without_paths() {
        let report = check_sync(&ws(&[]), &json!({ "openapi": "3.0.3" }));
        assert_eq!(report.path_count, 0);
        assert!(report.is_in_sync());
    }

    #[test]
    fn test_missing_openapi_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("insomnia_workspace.json");
        fs::write(&input, r#"{ "resources": [] }"#).unwrap();
        let err = check_sync_files(&input, &dir.path().join("openapi.json")).unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }
}
