pub mod tools;

pub use tools::{FunctionTool, ToolSpec, FUNCTION_TOOL_TYPE};
