//! Spec-to-tool mapping engine.
//!
//! Walks bundled, fully dereferenced OpenAPI documents and produces one
//! [`Tool`] per document: an ordered list of function declarations, each
//! carrying a name, a description, and a parameter schema merged from
//! path-level parameters, operation-level parameters, and the request-body
//! schema.
//!
//! Reference objects leaking into a request body or its schema abort the
//! whole mapping call. They signal that the caller skipped the external
//! bundling step, which deserves a stronger signal than a warning that
//! might get ignored. Everything else that is missing or malformed in a
//! document is a data-quality gap: reported through the diagnostic sink,
//! then skipped or worked around.

use crate::schema_type::SchemaType;
use crate::types::{FunctionDeclaration, FunctionSchema, Tool};
use otb_core::{Diagnostic, DiagnosticCode, DiagnosticSink, Error, Result};
use otb_openapi::{
    BundledSpec, guess_operation_id, is_method_operation_pair, is_parameter_object,
    is_reference_object, is_request_body_object,
};
use serde_json::{Map, Value, json};

/// Placeholder emitted into a `required` list when a required parameter
/// carries no name.
pub const PARAMETER_NAME_MISSING: &str = "WARNING_OPEN_API_PARAMETER_HAD_NO_NAME";

const NO_OPERATION_DESCRIPTION: &str = "This operation does not have a description.";
const NO_SUMMARY_NOR_DESCRIPTION: &str = "No summary nor description.";

/// Originating-document context for one generated tool.
#[derive(Debug, Clone, Copy)]
pub struct SpecContext<'a> {
    /// The document's `info.title`, if declared.
    pub title: Option<&'a str>,
    /// The bundled document the tool was generated from.
    pub spec: &'a BundledSpec,
}

/// The outcome of one mapping call: tools in input-document order, plus the
/// association back to each tool's originating document.
///
/// `tools[i]` was generated from `contexts[i]`. Documents without a `paths`
/// object are skipped entirely, so both lists can be shorter than the input.
#[derive(Debug)]
pub struct MappingResult<'a> {
    pub tools: Vec<Tool>,
    pub contexts: Vec<SpecContext<'a>>,
}

impl<'a> MappingResult<'a> {
    /// Look up the originating document of `tools[tool_index]`.
    pub fn context_for(&self, tool_index: usize) -> Option<&SpecContext<'a>> {
        self.contexts.get(tool_index)
    }
}

/// Transform bundled OpenAPI documents into the tool shape expected by the
/// Gemini function-calling API.
///
/// Documents are processed strictly in input order. A document without a
/// `paths` object is skipped (the output is shorter than the input); an
/// undereferenced reference object in a request-body position fails the
/// whole call.
pub fn map_specs_to_tools<'a>(
    specs: &'a [BundledSpec],
    sink: &dyn DiagnosticSink,
) -> Result<MappingResult<'a>> {
    let mut tools = Vec::new();
    let mut contexts = Vec::new();

    for spec in specs {
        let Some(paths) = spec.document.get("paths").and_then(Value::as_object) else {
            sink.emit(Diagnostic::new(
                DiagnosticCode::SpecWithoutPaths,
                json!({"title": spec.title, "version": spec.version}),
            ));
            continue;
        };

        let tool = map_paths_to_tool(spec, paths, sink)?;
        tools.push(tool);
        contexts.push(SpecContext {
            title: spec.title.as_deref(),
            spec,
        });
    }

    Ok(MappingResult { tools, contexts })
}

fn map_paths_to_tool(
    spec: &BundledSpec,
    paths: &Map<String, Value>,
    sink: &dyn DiagnosticSink,
) -> Result<Tool> {
    let mut function_declarations = Vec::new();

    for (path, path_item) in paths {
        let Some(item) = path_item.as_object() else {
            sink.emit(Diagnostic::new(
                DiagnosticCode::PathItemNotAnObject,
                json!({"title": spec.title, "path": path}),
            ));
            continue;
        };
        map_path_item(path, item, sink, &mut function_declarations)?;
    }

    Ok(Tool {
        function_declarations,
    })
}

fn map_path_item(
    path: &str,
    item: &Map<String, Value>,
    sink: &dyn DiagnosticSink,
    out: &mut Vec<FunctionDeclaration>,
) -> Result<()> {
    for (method, operation_value) in item
        .iter()
        .filter(|(key, value)| is_method_operation_pair(key.as_str(), value))
    {
        let Some(operation) = operation_value.as_object() else {
            continue;
        };

        let operation_id = match non_empty_str(operation.get("operationId")) {
            Some(id) => id.to_string(),
            None => guess_operation_id(path, method)?,
        };

        // Path-item parameters are the default set; operation-level entries
        // with the same name override them, as the OpenAPI specification
        // mandates for path-item vs operation parameters.
        let mut merged = Map::new();
        for parameter in parameter_objects(item.get("parameters"))
            .into_iter()
            .chain(parameter_objects(operation.get("parameters")))
        {
            let (key, descriptor) = merged_parameter(parameter);
            merged.insert(key, descriptor);
        }

        let request_body = operation.get("requestBody");
        if let Some(body) = request_body
            && is_reference_object(body)
        {
            return Err(Error::unsupported_reference(format!(
                "request body of '{operation_id}' ({method} {path})"
            )));
        }

        let op_summary = non_empty_str(operation.get("summary"));
        let op_description = non_empty_str(operation.get("description"));

        let Some(body) = request_body
            .filter(|body| is_request_body_object(body))
            .and_then(Value::as_object)
        else {
            // No request body: the schema is built from merged parameters
            // alone, and omitted entirely when there are none.
            let mut declaration = FunctionDeclaration {
                name: operation_id,
                description: op_summary
                    .or(op_description)
                    .unwrap_or(NO_OPERATION_DESCRIPTION)
                    .to_string(),
                parameters: None,
            };
            if !merged.is_empty() {
                declaration.parameters = Some(FunctionSchema {
                    schema_type: SchemaType::Object.as_str().to_string(),
                    description: format!(
                        "{} {}",
                        op_summary.unwrap_or_default(),
                        op_description.unwrap_or_default()
                    ),
                    required: required_parameter_names(&merged),
                    properties: merged,
                });
            }
            out.push(declaration);
            continue;
        };

        let body_description = non_empty_str(body.get("description"));

        let Some(content) = body.get("content").and_then(Value::as_object) else {
            sink.emit(Diagnostic::new(
                DiagnosticCode::BodyWithoutContent,
                json!({"path": path, "method": method, "operation_id": operation_id}),
            ));
            out.push(FunctionDeclaration {
                name: operation_id,
                description: op_summary
                    .or(body_description)
                    .unwrap_or(NO_SUMMARY_NOR_DESCRIPTION)
                    .to_string(),
                parameters: Some(FunctionSchema {
                    schema_type: SchemaType::Object.as_str().to_string(),
                    description: body_description
                        .or(op_summary)
                        .or(op_description)
                        .unwrap_or(NO_SUMMARY_NOR_DESCRIPTION)
                        .to_string(),
                    required: required_parameter_names(&merged),
                    properties: merged,
                }),
            });
            continue;
        };

        // First content-type entry in the document's own order wins;
        // application/json gets no special treatment.
        let Some((content_type, media)) = content.iter().next() else {
            sink.emit(Diagnostic::new(
                DiagnosticCode::BodyWithoutContentTypes,
                json!({"path": path, "method": method, "operation_id": operation_id}),
            ));
            continue;
        };
        if media.is_null() {
            sink.emit(Diagnostic::new(
                DiagnosticCode::ContentEntryMissing,
                json!({"path": path, "method": method, "content_type": content_type}),
            ));
            continue;
        }

        let Some(schema) = media.get("schema").filter(|schema| !schema.is_null()) else {
            sink.emit(Diagnostic::new(
                DiagnosticCode::ContentWithoutSchema,
                json!({"path": path, "method": method, "content_type": content_type}),
            ));
            continue;
        };

        if is_reference_object(schema) {
            return Err(Error::unsupported_reference(format!(
                "request body schema of '{operation_id}' ({method} {path})"
            )));
        }

        let schema_properties = schema.get("properties").and_then(Value::as_object);

        // Required names are the union of required merged parameters and
        // body-schema properties flagged required. The flag is read per
        // property, not from a schema-level `required` array.
        let mut required = required_parameter_names(&merged);
        if let Some(props) = schema_properties {
            for (key, prop) in props {
                if prop.get("required") == Some(&Value::Bool(true)) {
                    let name = non_empty_str(prop.get("name")).unwrap_or(key);
                    required.push(name.to_string());
                }
            }
        }

        // Body-schema properties overlay the merged parameters on name
        // collision; untouched names keep their first-introduction order.
        let mut properties = merged;
        if let Some(props) = schema_properties {
            for (key, prop) in props {
                properties.insert(key.clone(), prop.clone());
            }
        }

        let schema_type = match non_empty_str(schema.get("type")) {
            Some(declared) => declared.to_string(),
            None => {
                sink.emit(Diagnostic::new(
                    DiagnosticCode::SchemaTypeDefaulted,
                    json!({"path": path, "method": method, "operation_id": operation_id}),
                ));
                SchemaType::Object.as_str().to_string()
            }
        };

        out.push(FunctionDeclaration {
            name: operation_id,
            description: op_summary
                .or(body_description)
                .or(op_description)
                .unwrap_or(NO_SUMMARY_NOR_DESCRIPTION)
                .to_string(),
            parameters: Some(FunctionSchema {
                schema_type,
                description: body_description
                    .or(op_summary)
                    .or(op_description)
                    .unwrap_or(NO_SUMMARY_NOR_DESCRIPTION)
                    .to_string(),
                properties,
                required,
            }),
        });
    }

    Ok(())
}

/// Parameter objects of a `parameters` array node. Reference-shaped entries
/// are filtered out rather than rejected; the caller is expected to have
/// dereferenced, and parameters are lower risk than request bodies.
fn parameter_objects(node: Option<&Value>) -> Vec<&Value> {
    node.and_then(Value::as_array)
        .map(|parameters| {
            parameters
                .iter()
                .filter(|parameter| is_parameter_object(parameter))
                .collect()
        })
        .unwrap_or_default()
}

/// Reduce one parameter object to its merge key and property descriptor
/// `{name, type, description, required}`.
fn merged_parameter(parameter: &Value) -> (String, Value) {
    let key = non_empty_str(parameter.get("name"))
        .unwrap_or(PARAMETER_NAME_MISSING)
        .to_string();

    let description = non_empty_str(parameter.get("description"))
        .map(str::to_string)
        .unwrap_or_else(|| key.clone());

    let mut descriptor = Map::new();
    descriptor.insert("name".to_string(), Value::String(key.clone()));
    if let Some(schema_type) = parameter.get("schema").and_then(|schema| schema.get("type")) {
        descriptor.insert("type".to_string(), schema_type.clone());
    }
    descriptor.insert("description".to_string(), Value::String(description));
    if let Some(flag) = parameter.get("required") {
        descriptor.insert("required".to_string(), flag.clone());
    }

    (key, Value::Object(descriptor))
}

fn required_parameter_names(merged: &Map<String, Value>) -> Vec<String> {
    merged
        .values()
        .filter(|descriptor| descriptor.get("required") == Some(&Value::Bool(true)))
        .filter_map(|descriptor| descriptor.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

fn non_empty_str(node: Option<&Value>) -> Option<&str> {
    node.and_then(Value::as_str).filter(|s| !s.is_empty())
}
