//! Header extraction helpers shared by the middleware gates

use actix_web::http::header::{self, HeaderMap};

/// Extract the raw Authorization header value, if present and readable
pub fn authorization_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
