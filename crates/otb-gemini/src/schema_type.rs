use serde::{Deserialize, Serialize};

/// The OpenAPI data types a generated parameter schema can declare.
///
/// Defined locally so that the Gemini SDK is not a runtime dependency just
/// for a handful of string literals; its `SchemaType` constants mimic the
/// OpenAPI data types anyway.
///
/// See <https://swagger.io/docs/specification/v3_0/data-models/data-types/>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
