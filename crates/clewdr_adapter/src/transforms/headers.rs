use log::trace;
use std::collections::HashMap;

/// Outbound headers as the host pipeline hands them over. Keys are kept in
/// the casing the host used.
pub type HeaderSet = HashMap<String, String>;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
const AUTHORIZATION_HEADER_LOWERCASE: &str = "authorization";

pub fn has_authorization(headers: &HeaderSet) -> bool {
    headers.contains_key(AUTHORIZATION_HEADER)
        || headers.contains_key(AUTHORIZATION_HEADER_LOWERCASE)
}

pub fn bearer_token(api_key: &str) -> String {
    format!("Bearer {}", api_key)
}

/// Copy `headers`, adding `Authorization: Bearer <api_key>` when a key is
/// configured and the caller did not already authorize the request.
pub fn with_default_authorization(headers: &HeaderSet, api_key: Option<&str>) -> HeaderSet {
    let mut composed = headers.clone();

    match api_key {
        Some(api_key) if !api_key.is_empty() => {
            if has_authorization(headers) {
                trace!("AUTH_HEADER: keeping client supplied authorization");
            } else {
                composed.insert(AUTHORIZATION_HEADER.to_string(), bearer_token(api_key));
                trace!("AUTH_HEADER: injected bearer token");
            }
        }
        _ => trace!("AUTH_HEADER: no access key configured, skipping"),
    }

    composed
}
