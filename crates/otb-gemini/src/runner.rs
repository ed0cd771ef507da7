//! One-shot dispatch of a model-emitted function call.

use async_trait::async_trait;
use otb_core::{Error, FunctionCall, Result};
use serde_json::Value;
use tracing::debug;

/// The late-bound surface of a generated API client: invoke a named member
/// with the argument object the model produced.
///
/// A generated client typically adapts its methods behind this trait by
/// matching on `name`. There is no separate existence check; an unknown
/// name surfaces as an invocation failure from the implementation.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn invoke(&self, name: &str, args: &Value) -> anyhow::Result<Value>;
}

/// Binds one [`FunctionCall`] to a client and performs the call exactly
/// once. No retries, no timeout, no queuing; cancellation, if needed, is
/// the caller's responsibility through whatever mechanism the client
/// exposes.
pub struct Runner<'a> {
    client: &'a dyn ApiClient,
    call: FunctionCall,
}

impl<'a> Runner<'a> {
    pub fn new(client: &'a dyn ApiClient, call: FunctionCall) -> Self {
        Self { client, call }
    }

    pub fn call(&self) -> &FunctionCall {
        &self.call
    }

    /// Invoke the client member named by the call, forwarding the call's
    /// args as the sole argument.
    pub async fn run(&self) -> Result<Value> {
        debug!(function = %self.call.name, "dispatching function call");
        self.client
            .invoke(&self.call.name, &self.call.args)
            .await
            .map_err(|source| Error::DispatchFailed {
                function: self.call.name.clone(),
                source,
            })
    }
}
