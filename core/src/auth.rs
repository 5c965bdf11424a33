//! Authorization hook applied to every outgoing request.
//!
//! The client calls [`Authorize::authorize`] exactly once per request, after
//! the request is built and before it is handed to the transport.
//! Implementations only edit the request; they must not do I/O.

use crate::http::HttpRequest;

pub trait Authorize: Send + Sync {
    fn authorize(&self, _request: &mut HttpRequest) {}
}

/// Leaves requests untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authorize for NoAuth {}

/// Sends `authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken").field("token", &"<redacted>").finish()
    }
}

impl Authorize for BearerToken {
    fn authorize(&self, request: &mut HttpRequest) {
        request.set_header("authorization", format!("Bearer {}", self.token));
    }
}

/// Sends a static key in a named header, e.g. `x-api-key`.
#[derive(Clone)]
pub struct ApiKey {
    header: String,
    key: String,
}

impl ApiKey {
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("header", &self.header)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Authorize for ApiKey {
    fn authorize(&self, request: &mut HttpRequest) {
        request.set_header(self.header.as_str(), self.key.as_str());
    }
}

impl<F> Authorize for F
where
    F: Fn(&mut HttpRequest) + Send + Sync,
{
    fn authorize(&self, request: &mut HttpRequest) {
        self(request)
    }
}
