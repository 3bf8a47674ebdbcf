//! clewdr_adapter: request/response shape adapter between an OpenAI-style
//! gateway and a Clewdr chat completions backend.
//!
//! Clewdr's `/v1/chat/completions` matches the OpenAI format except for tool
//! definitions, which it expects flattened. The adapter rewrites tools on the
//! way in, forwards responses untouched and adds a default bearer token.

pub mod apis;
pub mod clients;
pub mod configuration;
pub mod errors;
pub mod transforms;

// Re-export important types and traits
pub use apis::{FunctionTool, ToolSpec};
pub use clients::{ClewdrTransformer, Transformer};
pub use configuration::{ClewdrProvider, Configuration};
pub use errors::{ConfigurationError, TransformError};
pub use transforms::HeaderSet;

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const CLEWDR_TRANSFORMER_NAME: &str = "clewdr";

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Response, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_full_request_cycle() {
        let config = Configuration::from_yaml(
            r#"
version: v0.1
model_providers:
  - name: clewdr
    access_key: sk-clewdr-123
    endpoint: http://127.0.0.1:8484
"#,
        )
        .unwrap();
        let provider = config.default_provider().unwrap();
        let transformer = ClewdrTransformer::new();

        let headers = transformer.transform_headers(
            &HeaderSet::from([("content-type".to_string(), "application/json".to_string())]),
            provider.access_key.as_deref(),
        );
        assert_eq!(headers["Authorization"], "Bearer sk-clewdr-123");
        assert_eq!(
            provider.chat_completions_url().as_deref(),
            Some("http://127.0.0.1:8484/v1/chat/completions")
        );

        let body = transformer.transform_request_in(&json!({
            "model": "claude-sonnet-4",
            "messages": [{"role": "user", "content": "hi"}],
            "tools": [
                {"type": "function", "function": {"name": "get_weather", "parameters": {"type": "object"}}},
                {"type": "retrieval"}
            ]
        }));
        assert_eq!(
            body["tools"],
            json!([
                {"type": "function", "name": "get_weather", "parameters": {"type": "object"}},
                {"type": "retrieval"}
            ])
        );

        let upstream = Response::builder()
            .status(StatusCode::OK)
            .body(r#"{"id":"chatcmpl-1","object":"chat.completion","choices":[]}"#)
            .unwrap();
        let response = transformer.transform_response_out(upstream).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *response.body(),
            r#"{"id":"chatcmpl-1","object":"chat.completion","choices":[]}"#
        );
    }

    #[test]
    fn test_function_tool_built_by_host() {
        let tool = FunctionTool {
            rest: serde_json::Map::from_iter([("type".to_string(), json!("function"))]),
            name: Some(json!("search")),
            parameters: Some(json!({"type": "object"})),
            ..Default::default()
        };

        let spec = ToolSpec::Function(tool);
        assert_eq!(spec.name(), Some("search"));
        assert_eq!(
            serde_json::Value::from(spec),
            json!({"type": "function", "name": "search", "parameters": {"type": "object"}})
        );
    }
}
