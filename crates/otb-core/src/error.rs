use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A `$ref`-shaped node survived into a request body or its schema.
    /// This means the caller skipped the bundling/dereferencing step, so the
    /// whole mapping call is aborted rather than the single operation.
    #[error(
        "Reference objects are not supported ({0}). Have you forgotten to bundle \
         and dereference your specification before handing it over?"
    )]
    UnsupportedReference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dispatch of function '{function}' failed: {source}")]
    DispatchFailed {
        function: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Helper for flagging an undereferenced reference object, with a short
    /// description of where it was found.
    ///
    /// # Example
    /// ```
    /// use otb_core::Error;
    /// let err = Error::unsupported_reference("request body of 'createTodoV1'");
    /// ```
    pub fn unsupported_reference(context: impl Into<String>) -> Self {
        Error::UnsupportedReference(context.into())
    }

    /// Helper for creating invalid-input errors
    ///
    /// # Example
    /// ```
    /// use otb_core::Error;
    /// let err = Error::invalid_input("path must not be empty");
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
