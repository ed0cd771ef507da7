//! # OTB Gemini
//!
//! Gemini-facing surface of the OpenAPI tool bridge:
//!
//! - Output types in the shape the function-calling API expects
//!   ([`Tool`], [`FunctionDeclaration`])
//! - The spec-to-tool mapper ([`map_specs_to_tools`]) that turns bundled
//!   OpenAPI documents into those types
//! - The one-shot dispatch [`Runner`] that forwards a model-emitted
//!   function call onto an API client
//!
//! ## Example
//!
//! ```no_run
//! use otb_core::TracingSink;
//! use otb_gemini::map_specs_to_tools;
//! use otb_openapi::BundledSpec;
//!
//! # fn main() -> otb_core::Result<()> {
//! let spec = BundledSpec::from_file("./api/openapi.json")?;
//! let specs = [spec];
//! let result = map_specs_to_tools(&specs, &TracingSink)?;
//! println!("Generated {} tools", result.tools.len());
//! # Ok(())
//! # }
//! ```

mod mapper;
mod runner;
mod schema_type;
mod types;

pub use mapper::{MappingResult, PARAMETER_NAME_MISSING, SpecContext, map_specs_to_tools};
pub use runner::{ApiClient, Runner};
pub use schema_type::SchemaType;
pub use types::{FunctionDeclaration, FunctionSchema, Tool};
