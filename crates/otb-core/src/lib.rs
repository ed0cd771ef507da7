//! Core types for OTB
//!
//! This crate provides the shared foundation for the OpenAPI tool bridge:
//! the error type, the model-facing function-call record types, and the
//! structured diagnostics channel used by the mapper.

pub mod content;
pub mod diagnostics;
pub mod error;

// Re-exports
pub use content::{FunctionCall, FunctionResponse};
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticCode, DiagnosticSink, NullSink, TracingSink,
};
pub use error::{Error, Result};
