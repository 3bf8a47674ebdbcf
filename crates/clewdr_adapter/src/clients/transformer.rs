use async_trait::async_trait;
use http::Response;
use serde_json::Value;

use crate::errors::TransformError;
use crate::transforms::{
    hoist_function_tools, map_request_body, passthrough_response, with_default_authorization,
    HeaderSet,
};
use crate::{CHAT_COMPLETIONS_PATH, CLEWDR_TRANSFORMER_NAME};

/// Hooks a gateway pipeline calls around one upstream chat completions call:
/// headers and body on the way out, the response on the way back.
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Name used to select this transformer in provider configuration
    fn name(&self) -> &str;

    /// Upstream path requests are sent to
    fn endpoint(&self) -> &str {
        CHAT_COMPLETIONS_PATH
    }

    /// Convert a unified request into the upstream's request shape
    fn transform_request_in(&self, request: &Value) -> Value;

    /// Convert the upstream response back into the unified format
    async fn transform_response_out<B: Send + 'static>(&self, response: Response<B>)
        -> Response<B>;

    /// Produce the outbound headers for the request
    fn transform_headers(&self, headers: &HeaderSet, api_key: Option<&str>) -> HeaderSet;

    /// Same as [`Transformer::transform_request_in`] for an already serialized body
    fn transform_request_body(&self, body: &[u8]) -> Result<Vec<u8>, TransformError> {
        map_request_body(body, |request| self.transform_request_in(request))
    }
}

/// Transformer for Clewdr's OpenAI-compatible chat completions endpoint.
///
/// Clewdr rejects tools in the nested OpenAI layout, so function tools are
/// flattened on the way in. Everything else is forwarded unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClewdrTransformer;

impl ClewdrTransformer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transformer for ClewdrTransformer {
    fn name(&self) -> &str {
        CLEWDR_TRANSFORMER_NAME
    }

    fn transform_request_in(&self, request: &Value) -> Value {
        hoist_function_tools(request)
    }

    async fn transform_response_out<B: Send + 'static>(
        &self,
        response: Response<B>,
    ) -> Response<B> {
        passthrough_response(response).await
    }

    fn transform_headers(&self, headers: &HeaderSet, api_key: Option<&str>) -> HeaderSet {
        with_default_authorization(headers, api_key)
    }
}
