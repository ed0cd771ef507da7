//! Deterministic operation-ID derivation.
//!
//! The OpenAPI specification makes `operationId` optional, but the model
//! side requires every function declaration to carry a name. For operations
//! without an explicit ID this module derives one from the path template and
//! HTTP method, matching the `nickname` naming convention of the common
//! OpenAPI code generators so that generated tool names line up with
//! generated client method names.

use otb_core::{Error, Result};

/// Derive a stable camelCase operation ID from a path template and method.
///
/// `/todos/{id}` + `get` becomes `todosIdGet`. The derivation is pure:
/// the same input always yields the same identifier, and the output only
/// contains alphanumeric characters.
///
/// An empty path or method is a contract violation and produces an error
/// rather than a silently empty identifier.
pub fn guess_operation_id(path: &str, method: &str) -> Result<String> {
    if path.is_empty() {
        return Err(Error::invalid_input(
            "guess_operation_id: path is required but was empty",
        ));
    }
    if method.is_empty() {
        return Err(Error::invalid_input(
            "guess_operation_id: method is required but was empty",
        ));
    }

    let mut id_parts: Vec<String> = path
        .split('/')
        .map(clean_segment)
        .filter(|part| !part.is_empty())
        .collect();

    id_parts.push(method.to_string());

    Ok(snake_to_camel(&id_parts.join("_")))
}

/// Strip a path segment down to word-like tokens: every run of characters
/// outside `[A-Za-z0-9_]` collapses to a single space, then the edges are
/// trimmed. `{id}` becomes `id`, an empty or all-punctuation segment
/// becomes the empty string.
fn clean_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_run = false;
    for c in segment.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }
    out.trim().to_string()
}

/// Convert a `snake_case` (or kebab-case) string to `camelCase`.
///
/// A `_` or `-` immediately followed by a lowercase ASCII letter is replaced
/// by the upper-cased letter with the separator removed. Any other
/// non-alphanumeric character is dropped, so only alphanumeric characters
/// are left in the final output.
pub fn snake_to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            if let Some(&next) = chars.peek()
                && next.is_ascii_lowercase()
            {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            continue;
        }
        if c.is_ascii_alphanumeric() {
            out.push(c);
        }
    }

    out
}
