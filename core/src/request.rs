//! Request construction for reads and writes.
//!
//! Reads are bodiless GETs. Writes share one path for create and delete:
//! the method varies and the body is attached only when there is one.

use url::form_urlencoded;

use crate::http::{HttpMethod, HttpRequest};

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn get(url: impl Into<String>) -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, url)
}

/// Build a POST or DELETE request, attaching `body` as JSON when present.
pub fn write(method: HttpMethod, url: impl Into<String>, body: Option<String>) -> HttpRequest {
    let mut request = HttpRequest::new(method, url);
    if let Some(body) = body {
        request.set_header("content-type", CONTENT_TYPE_JSON);
        request.body = Some(body);
    }
    request
}

/// Append form-encoded query pairs to `url`, keeping any existing query and
/// fragment in place. An empty `pairs` returns `url` unchanged.
pub fn with_query(url: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }
    let (base, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().copied())
        .finish();
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{encoded}{fragment}")
}
