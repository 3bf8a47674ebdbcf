//! Tool definitions in OpenAI chat completions requests.
//!
//! The unified format nests the callable under a `function` record:
//!
//! ```json
//! { "type": "function", "function": { "name": "get_weather", "parameters": {} } }
//! ```
//!
//! Clewdr wants the same fields at the top level of the tool entry:
//!
//! ```json
//! { "type": "function", "name": "get_weather", "parameters": {} }
//! ```

use serde_json::{Map, Value};

pub const FUNCTION_TOOL_TYPE: &str = "function";
pub const FUNCTION_FIELD: &str = "function";
pub const TYPE_FIELD: &str = "type";

const NAME_FIELD: &str = "name";
const DESCRIPTION_FIELD: &str = "description";
const PARAMETERS_FIELD: &str = "parameters";

/// A single entry of a request's `tools` array.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSpec {
    /// `type == "function"` with a nested `function` object.
    Function(FunctionTool),
    /// Anything else. Forwarded to the backend untouched.
    Opaque(Value),
}

/// A function tool split into the parts that get flattened for Clewdr.
///
/// `name`, `description` and `parameters` keep their raw JSON values so
/// that a client sending e.g. `"description": null` gets exactly that
/// forwarded. A field missing from the source stays missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionTool {
    /// Fields of the tool entry itself, without `function`.
    pub rest: Map<String, Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub parameters: Option<Value>,
    /// Fields of the nested `function` record other than the three above.
    pub extra: Map<String, Value>,
}

fn is_function_tool(tool: &Map<String, Value>) -> bool {
    tool.get(TYPE_FIELD).and_then(Value::as_str) == Some(FUNCTION_TOOL_TYPE)
        && tool.get(FUNCTION_FIELD).is_some_and(Value::is_object)
}

impl From<Value> for ToolSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(tool) if is_function_tool(&tool) => {
                ToolSpec::Function(FunctionTool::from_entry(tool))
            }
            other => ToolSpec::Opaque(other),
        }
    }
}

impl From<&Value> for ToolSpec {
    fn from(value: &Value) -> Self {
        ToolSpec::from(value.clone())
    }
}

impl ToolSpec {
    pub fn is_function(&self) -> bool {
        matches!(self, ToolSpec::Function(_))
    }

    /// Function name, when the tool is a function tool with a string name.
    pub fn name(&self) -> Option<&str> {
        match self {
            ToolSpec::Function(tool) => tool.name.as_ref().and_then(Value::as_str),
            ToolSpec::Opaque(_) => None,
        }
    }

    /// Produce the entry in the shape Clewdr accepts.
    pub fn into_backend(self) -> Value {
        match self {
            ToolSpec::Function(tool) => Value::Object(tool.into_backend()),
            ToolSpec::Opaque(value) => value,
        }
    }
}

impl From<ToolSpec> for Value {
    fn from(spec: ToolSpec) -> Self {
        spec.into_backend()
    }
}

impl FunctionTool {
    /// Caller guarantees `function` is present and is an object.
    fn from_entry(entry: Map<String, Value>) -> Self {
        let mut rest = Map::new();
        let mut function = Map::new();
        for (key, value) in entry {
            if key == FUNCTION_FIELD {
                if let Value::Object(inner) = value {
                    function = inner;
                }
            } else {
                rest.insert(key, value);
            }
        }

        let mut tool = FunctionTool {
            rest,
            ..Default::default()
        };
        for (key, value) in function {
            match key.as_str() {
                NAME_FIELD => tool.name = Some(value),
                DESCRIPTION_FIELD => tool.description = Some(value),
                PARAMETERS_FIELD => tool.parameters = Some(value),
                _ => {
                    tool.extra.insert(key, value);
                }
            }
        }
        tool
    }

    /// Flatten into a single record: sibling fields, then `name`,
    /// `description`, `parameters`, then the remaining function fields.
    ///
    /// Later fields win on key collisions. A sibling sharing the name of a
    /// hoisted field that the function record lacks is dropped, so the
    /// output never carries a stale `name` the client did not put on the
    /// function.
    pub fn into_backend(self) -> Map<String, Value> {
        let FunctionTool {
            rest,
            name,
            description,
            parameters,
            extra,
        } = self;
        let hoisted = [
            (NAME_FIELD, name),
            (DESCRIPTION_FIELD, description),
            (PARAMETERS_FIELD, parameters),
        ];

        let mut flattened = Map::with_capacity(rest.len() + hoisted.len() + extra.len());
        for (key, value) in rest {
            let shadowed_by_missing = hoisted
                .iter()
                .any(|(field, hoisted_value)| *field == key && hoisted_value.is_none());
            if !shadowed_by_missing {
                flattened.insert(key, value);
            }
        }
        for (field, value) in hoisted {
            if let Some(value) = value {
                flattened.insert(field.to_string(), value);
            }
        }
        for (key, value) in extra {
            flattened.insert(key, value);
        }
        flattened
    }
}
