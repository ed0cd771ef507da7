//! Bundled OpenAPI document wrapper.

use otb_core::Result;
use serde_json::Value;
use tracing::debug;

/// A fully bundled and dereferenced OpenAPI document, together with the
/// provenance metadata the tool bridge reports back to its callers.
///
/// Bundling/dereferencing is an external concern. Constructors here only
/// load an already-resolved document tree; any `$ref` node that survived in
/// a request-body position is caught later, by the mapper, as a contract
/// violation.
#[derive(Debug, Clone)]
pub struct BundledSpec {
    /// The document's `info.title`, if declared.
    pub title: Option<String>,
    /// The document's `info.version`, if declared.
    pub version: Option<String>,
    /// The dereferenced document tree.
    pub document: Value,
}

impl BundledSpec {
    /// Wrap an already-parsed document tree.
    pub fn from_value(document: Value) -> Self {
        let info = document.get("info");
        let field = |name: &str| {
            info.and_then(|i| i.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let title = field("title");
        let version = field("version");
        debug!(?title, ?version, "loaded bundled OpenAPI document");
        Self {
            title,
            version,
            document,
        }
    }

    /// Parse a bundled document from a string.
    ///
    /// Automatically detects JSON or YAML format (JSON is tried first).
    pub fn from_str(content: &str) -> Result<Self> {
        let document: Value =
            serde_json::from_str(content).or_else(|_| serde_yaml::from_str(content))?;
        Ok(Self::from_value(document))
    }

    /// Load a bundled document from a file.
    ///
    /// Supports both JSON and YAML formats.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let document: Value = if path.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(Self::from_value(document))
    }
}
