//! Integration test for dispatching a model-emitted function call onto a
//! client, using tool names generated from the Todo fixture.

use async_trait::async_trait;
use otb_core::{Error, FunctionCall, NullSink};
use otb_gemini::{ApiClient, Runner, map_specs_to_tools};
use otb_openapi::BundledSpec;
use serde_json::{Value, json};

const TODO_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/openapi-todo.json"
);

/// Stand-in for a generated Todo API client.
struct TodoApiClient;

#[async_trait]
impl ApiClient for TodoApiClient {
    async fn invoke(&self, name: &str, args: &Value) -> anyhow::Result<Value> {
        match name {
            "getTodosV1" => Ok(json!([])),
            "createTodoV1" => Ok(json!({
                "id": 42,
                "title": args["title"],
                "completed": false
            })),
            other => Err(anyhow::anyhow!("client has no member named '{other}'")),
        }
    }
}

#[tokio::test]
async fn dispatches_a_generated_tool_name() {
    let spec = BundledSpec::from_file(TODO_FIXTURE).unwrap();
    let specs = [spec];
    let result = map_specs_to_tools(&specs, &NullSink).unwrap();

    // the model picks one of the declared functions by name
    let declared = result.tools[0]
        .function_declarations
        .iter()
        .find(|fd| fd.name == "createTodoV1")
        .unwrap();

    let call = FunctionCall::new(
        declared.name.clone(),
        json!({"title": "Submit the funding request"}),
    );
    let client = TodoApiClient;
    let response = Runner::new(&client, call).run().await.unwrap();

    assert_eq!(response["id"], 42);
    assert_eq!(response["title"], "Submit the funding request");
}

#[tokio::test]
async fn unknown_function_name_fails_generically() {
    let client = TodoApiClient;
    let call = FunctionCall::new("purgeTodosV9", json!({}));
    let err = Runner::new(&client, call).run().await.unwrap_err();

    match err {
        Error::DispatchFailed { function, .. } => assert_eq!(function, "purgeTodosV9"),
        other => panic!("unexpected error variant: {other}"),
    }
}
