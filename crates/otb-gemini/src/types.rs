//! Output types in the Gemini function-calling wire shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One capability set presented to the model: the ordered function
/// declarations generated from a single OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "functionDeclarations")]
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// A callable-tool descriptor for one API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// The operation ID, explicit or derived.
    pub name: String,
    /// Natural-language description shown to the model.
    pub description: String,
    /// Flattened parameter schema. Absent when the operation takes neither
    /// parameters nor a request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<FunctionSchema>,
}

/// The parameter schema of a function declaration, merged from path-level
/// parameters, operation-level parameters, and the request-body schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// Declared schema type. Taken from the body schema when present,
    /// otherwise `object`. Kept as the document's own string so unusual
    /// declared types pass through unmodified.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub description: String,
    /// Property name to property schema, in first-introduction order.
    pub properties: Map<String, Value>,
    /// Names of required properties, in merge order.
    pub required: Vec<String>,
}
