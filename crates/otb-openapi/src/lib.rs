//! # OTB OpenAPI
//!
//! OpenAPI-side building blocks for the tool bridge:
//!
//! - [`BundledSpec`]: a fully dereferenced OpenAPI document plus its
//!   provenance metadata (info title/version)
//! - Recognition predicates over untyped document nodes
//!   ([`is_reference_object`] and friends)
//! - The operation-ID resolver ([`guess_operation_id`]) for operations
//!   whose author did not provide an explicit `operationId`
//!
//! Bundling and `$ref` resolution are deliberately not performed here; the
//! input documents are required to already be reference-free. See the
//! mapper in `otb-gemini` for how violations of that contract are handled.

mod bundled;
mod node;
mod operation_id;

pub use bundled::BundledSpec;
pub use node::{
    OPERATION_TYPE_NAMES, is_method_operation_pair, is_parameter_object, is_reference_object,
    is_request_body_object,
};
pub use operation_id::{guess_operation_id, snake_to_camel};
