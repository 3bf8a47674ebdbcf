use crate::apis::tools::ToolSpec;
use crate::errors::TransformError;
use log::{debug, trace, warn};
use serde_json::{Map, Value};

pub const TOOLS_FIELD: &str = "tools";

/// Rewrite a unified chat completions request into the shape Clewdr accepts.
///
/// Only a non-empty `tools` array is touched. Every other top-level field is
/// copied over as-is, and anything that is not a JSON object comes back as
/// an unchanged copy.
pub fn hoist_function_tools(request: &Value) -> Value {
    let Some(object) = request.as_object() else {
        return request.clone();
    };
    let tools = match object.get(TOOLS_FIELD) {
        Some(Value::Array(tools)) if !tools.is_empty() => tools,
        _ => return request.clone(),
    };

    let mapped: Map<String, Value> = object
        .iter()
        .map(|(key, value)| {
            let value = if key == TOOLS_FIELD {
                Value::Array(map_tools(tools))
            } else {
                value.clone()
            };
            (key.clone(), value)
        })
        .collect();

    Value::Object(mapped)
}

fn map_tools(tools: &[Value]) -> Vec<Value> {
    let mut hoisted = 0usize;
    let mapped: Vec<Value> = tools
        .iter()
        .map(ToolSpec::from)
        .map(|spec| {
            if spec.is_function() {
                hoisted += 1;
                trace!("TOOLS_HOIST: function='{}'", spec.name().unwrap_or("<unnamed>"));
            }
            spec.into_backend()
        })
        .collect();

    debug!(
        "TOOLS_HOIST: hoisted={} passthrough={}",
        hoisted,
        tools.len() - hoisted
    );
    mapped
}

/// Byte-level variant of [`hoist_function_tools`] for hosts that hold the
/// serialized body.
pub fn hoist_function_tools_in_body(body: &[u8]) -> Result<Vec<u8>, TransformError> {
    map_request_body(body, hoist_function_tools)
}

/// Parse `body`, apply `map` and serialize the result.
///
/// Numbers keep their exact textual form, so integers wider than 64 bits in
/// untouched fields come out as they went in. Bodies nested deeper than
/// serde_json's recursion limit (128) fail with
/// [`TransformError::Deserialization`] even though they are valid JSON.
pub fn map_request_body<F>(body: &[u8], map: F) -> Result<Vec<u8>, TransformError>
where
    F: FnOnce(&Value) -> Value,
{
    let request: Value = serde_json::from_slice(body).map_err(|err| {
        warn!("request body is not valid JSON, cannot map tools: {}", err);
        TransformError::Deserialization(err)
    })?;

    serde_json::to_vec(&map(&request)).map_err(TransformError::Serialization)
}
