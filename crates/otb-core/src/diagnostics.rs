//! Structured diagnostics for the mapping pipeline.
//!
//! Data-quality gaps in real-world specifications (a document without paths,
//! a request body without content types, ...) are expected and must not
//! abort a multi-document batch. Instead of logging free-form warnings, the
//! mapper emits typed events through a [`DiagnosticSink`] so that a host
//! application can surface, aggregate, or drop them. Control flow never
//! depends on what the sink does with an event.

use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;

/// The closed set of non-fatal conditions the mapper can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Document has no `paths` object; the whole document is skipped.
    SpecWithoutPaths,
    /// A `paths` entry was not an object; the path is skipped.
    PathItemNotAnObject,
    /// Request body carries no `content` map; parameter-only fallback used.
    BodyWithoutContent,
    /// Request body `content` map is empty; the operation is skipped.
    BodyWithoutContentTypes,
    /// First content-type entry is missing; the operation is skipped.
    ContentEntryMissing,
    /// First content-type entry has no schema; the operation is skipped.
    ContentWithoutSchema,
    /// Body schema declared no type; `object` was assumed.
    SchemaTypeDefaulted,
}

/// A single skip/fallback event with its source context.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub context: Value,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, context: Value) -> Self {
        Self { code, context }
    }
}

/// Receiver for mapper diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Sink that forwards every diagnostic to `tracing` as a warning.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            code = ?diagnostic.code,
            context = %diagnostic.context,
            "mapping diagnostic"
        );
    }
}

/// Sink that drops every diagnostic.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Sink that buffers diagnostics for later inspection. Mainly used in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    inner: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all diagnostics collected so far, clearing the buffer.
    pub fn drain(&self) -> Vec<Diagnostic> {
        let mut guard = self.inner.lock().expect("diagnostic buffer poisoned");
        std::mem::take(&mut *guard)
    }

    pub fn codes(&self) -> Vec<DiagnosticCode> {
        let guard = self.inner.lock().expect("diagnostic buffer poisoned");
        guard.iter().map(|d| d.code).collect()
    }

    pub fn is_empty(&self) -> bool {
        let guard = self.inner.lock().expect("diagnostic buffer poisoned");
        guard.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        let mut guard = self.inner.lock().expect("diagnostic buffer poisoned");
        guard.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collecting_sink_buffers_and_drains() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.emit(Diagnostic::new(
            DiagnosticCode::SpecWithoutPaths,
            json!({"title": "Empty API"}),
        ));
        sink.emit(Diagnostic::new(
            DiagnosticCode::SchemaTypeDefaulted,
            json!({"operation_id": "createTodoV1"}),
        ));

        assert_eq!(
            sink.codes(),
            vec![
                DiagnosticCode::SpecWithoutPaths,
                DiagnosticCode::SchemaTypeDefaulted
            ]
        );

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn diagnostic_serializes_with_snake_case_code() {
        let diagnostic = Diagnostic::new(DiagnosticCode::BodyWithoutContent, json!({"path": "/x"}));
        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(value["code"], "body_without_content");
        assert_eq!(value["context"]["path"], "/x");
    }
}
