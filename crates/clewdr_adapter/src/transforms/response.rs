use http::Response;
use log::trace;

/// Clewdr already answers in the OpenAI chat completions format, which is
/// also the unified format, so the response is handed back as received.
/// The body is never polled.
pub async fn passthrough_response<B>(response: Response<B>) -> Response<B> {
    trace!(
        "RESPONSE_PASSTHROUGH: status={} content_type={:?}",
        response.status(),
        response.headers().get(http::header::CONTENT_TYPE)
    );
    response
}
