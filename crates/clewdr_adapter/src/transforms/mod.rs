//! Request, response and header transformations applied around a Clewdr call.
//!
//! Clewdr's `/v1/chat/completions` speaks the OpenAI wire format with one
//! exception, the nesting of tool definitions, so only the request side
//! rewrites anything. Responses and headers are forwarded as-is apart from
//! the default bearer token.

pub mod headers;
pub mod request;
pub mod response;

pub use headers::*;
pub use request::*;
pub use response::*;
