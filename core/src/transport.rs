//! The seam between the client and the network.
//!
//! # Design
//! A transport sends one [`HttpRequest`] and hands back a response whose body
//! has not been read yet. The client decides from the status code whether
//! the body is read at all, so a 202/204 response is dropped unread.
//!
//! [`ReqwestTransport`] builds a fresh `reqwest::Client` for every call with
//! the caller's timeout. Nothing is shared between calls except what reqwest
//! itself keeps process-wide.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// A received response whose body may still be unread.
#[async_trait]
pub trait TransportResponse: Send {
    fn status(&self) -> u16;

    /// Read the whole body as text, consuming the response.
    async fn text(self) -> Result<String, TransportError>;
}

#[async_trait]
pub trait Transport: Send + Sync {
    type Response: TransportResponse;

    /// Send `request`, failing with [`TransportError::Timeout`] if no response
    /// arrives within `timeout`.
    async fn send(&self, request: HttpRequest, timeout: Duration) -> Result<Self::Response, TransportError>;
}

#[async_trait]
impl TransportResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String, TransportError> {
        Ok(self.body)
    }
}

#[async_trait]
impl TransportResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn text(self) -> Result<String, TransportError> {
        reqwest::Response::text(self).await.map_err(TransportError::from)
    }
}

/// Default transport backed by `reqwest` with rustls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    fn map_error(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Http(err)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn send(&self, request: HttpRequest, timeout: Duration) -> Result<Self::Response, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", request.url)))?;
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let mut builder = client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        builder.send().await.map_err(|e| Self::map_error(e, timeout))
    }
}
