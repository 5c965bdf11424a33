//! Typed CRUD client for a single REST collection.
//!
//! # Design
//! `ResourceClient` is generic over three payload shapes fixed per instance:
//! the model `M` (fetched and created), the collection `C` (returned by
//! list reads) and the creation result `R`. It holds only read-only
//! configuration plus a transport and an authorization hook, so concurrent
//! calls on one instance need no locking.
//!
//! As in the host-does-IO design, each operation is split into a `build_*`
//! step producing an [`HttpRequest`] and a read step consuming the response.
//! The async operations compose them: build, authorize, send, classify.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::debug;

use crate::auth::{Authorize, NoAuth};
use crate::codec;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::request;
use crate::response::read_response;
use crate::transport::{ReqwestTransport, Transport, TransportResponse};

pub struct ResourceClient<M, C, R, T = ReqwestTransport, A = NoAuth> {
    config: ClientConfig,
    transport: T,
    auth: A,
    _payloads: PhantomData<fn() -> (M, C, R)>,
}

impl<M, C, R> ResourceClient<M, C, R> {
    /// Client using [`ReqwestTransport`] and no authorization.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: ReqwestTransport,
            auth: NoAuth,
            _payloads: PhantomData,
        }
    }
}

impl<M, C, R, T, A> ResourceClient<M, C, R, T, A> {
    pub fn with_transport<T2: Transport>(self, transport: T2) -> ResourceClient<M, C, R, T2, A> {
        ResourceClient {
            config: self.config,
            transport,
            auth: self.auth,
            _payloads: PhantomData,
        }
    }

    pub fn with_auth<A2: Authorize>(self, auth: A2) -> ResourceClient<M, C, R, T, A2> {
        ResourceClient {
            config: self.config,
            transport: self.transport,
            auth,
            _payloads: PhantomData,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fully resolved collection URL, see [`ClientConfig::endpoint`].
    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.endpoint())
    }

    fn create_url(&self, action: Option<&str>) -> String {
        match action {
            Some(action) if !action.is_empty() => format!("{}/{action}", self.endpoint()),
            _ => self.endpoint(),
        }
    }

    pub fn build_get(&self, item_id: &str) -> HttpRequest {
        request::get(self.item_url(item_id))
    }

    pub fn build_list(&self, query: &[(&str, &str)]) -> HttpRequest {
        request::get(request::with_query(&self.endpoint(), query))
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        request::write(HttpMethod::Delete, self.item_url(id), None)
    }

    fn build_write<P: Serialize>(&self, method: HttpMethod, url: String, entity: Option<&P>) -> Result<HttpRequest> {
        let body = entity.map(codec::encode).transpose()?;
        Ok(request::write(method, url, body))
    }
}

impl<M: Serialize, C, R, T, A> ResourceClient<M, C, R, T, A> {
    pub fn build_create(&self, resource: &M, action: Option<&str>) -> Result<HttpRequest> {
        self.build_write(HttpMethod::Post, self.create_url(action), Some(resource))
    }
}

impl<M, C, R, T, A> ResourceClient<M, C, R, T, A>
where
    M: Serialize + DeserializeOwned,
    C: DeserializeOwned,
    R: DeserializeOwned,
    T: Transport,
    A: Authorize,
{
    /// GET `url`, with `query` form-encoded onto it when non-empty, and
    /// decode the body as `U`.
    pub async fn get_resource<U: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<Option<U>> {
        self.execute(request::get(request::with_query(url, query))).await
    }

    /// Fetch one resource from `{endpoint}/{item_id}`.
    ///
    /// `Ok(None)` when the server answers 202/204 or with an empty body.
    pub async fn get(&self, item_id: &str) -> Result<Option<M>> {
        self.get_resource(&self.item_url(item_id), &[]).await
    }

    /// Read the collection at `{endpoint}`.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<Option<C>> {
        self.get_resource(&self.endpoint(), query).await
    }

    /// POST `resource` to `{endpoint}` or `{endpoint}/{action}`.
    ///
    /// `Ok(None)` when the server accepts without a body (202/204).
    pub async fn create(&self, resource: &M, action: Option<&str>) -> Result<Option<R>> {
        self.write_resource(HttpMethod::Post, self.create_url(action), Some(resource))
            .await
    }

    /// DELETE `{endpoint}/{id}`. Any success body is discarded.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.write_resource::<M, IgnoredAny>(HttpMethod::Delete, self.item_url(id), None)
            .await?;
        Ok(())
    }

    async fn write_resource<P, U>(&self, method: HttpMethod, url: String, entity: Option<&P>) -> Result<Option<U>>
    where
        P: Serialize,
        U: DeserializeOwned,
    {
        let request = self.build_write(method, url, entity)?;
        self.execute(request).await
    }

    async fn execute<U: DeserializeOwned>(&self, mut request: HttpRequest) -> Result<Option<U>> {
        self.auth.authorize(&mut request);
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.send(request, self.config.timeout).await?;
        debug!(status = response.status(), "received response");

        read_response(response).await
    }
}

impl<M, C, R, T: Clone, A: Clone> Clone for ResourceClient<M, C, R, T, A> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            auth: self.auth.clone(),
            _payloads: PhantomData,
        }
    }
}

impl<M, C, R, T, A> fmt::Debug for ResourceClient<M, C, R, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
