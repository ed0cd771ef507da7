use serde::{Deserialize, Serialize};

/// A function call emitted by the model. The `name` is expected to match a
/// function declaration that was previously handed to the model as part of
/// a tool, and `args` is the argument object the model filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            args,
            id: None,
        }
    }
}

/// The result of executing a function call, in the shape the model expects
/// it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
