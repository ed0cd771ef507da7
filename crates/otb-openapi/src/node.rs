//! Recognition predicates for untyped OpenAPI document nodes.
//!
//! The mapper walks a pre-bundled document as a plain JSON tree, so
//! distinguishing reference objects from parameter or request-body objects
//! is a structural capability check rather than schema validation. Each
//! predicate returns a definite answer and is composed before any field
//! access, so code never reads fields that only exist on the other variant.

use serde_json::Value;

/// The eight HTTP methods a path item can map to an operation object.
pub const OPERATION_TYPE_NAMES: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// A node is a reference object iff it structurally carries a `$ref` field.
pub fn is_reference_object(node: &Value) -> bool {
    node.as_object().is_some_and(|obj| obj.contains_key("$ref"))
}

/// A node is a request-body object iff it is an object carrying a `content`
/// content-type mapping.
pub fn is_request_body_object(node: &Value) -> bool {
    node.as_object()
        .is_some_and(|obj| obj.contains_key("content"))
}

/// A node in a `parameters` array is a parameter object iff it is an object
/// that is not a reference object.
pub fn is_parameter_object(node: &Value) -> bool {
    node.is_object() && !is_reference_object(node)
}

/// A `(key, value)` entry of a path item describes an operation iff the key
/// is one of the recognized HTTP verbs and the value is an object. Other
/// path-item members (`parameters`, `summary`, ...) fail this check and are
/// consulted separately.
pub fn is_method_operation_pair(method: &str, value: &Value) -> bool {
    OPERATION_TYPE_NAMES.contains(&method) && value.is_object()
}
