//! Generic async client for one REST collection with JSON payloads.
//!
//! # Overview
//! [`ResourceClient`] offers fetch-by-id, list, create and delete against
//! `{base_url}{api_endpoint}`, typed over the model, collection and
//! creation-result shapes. Status codes map onto three outcomes: 200/201
//! decode the body, 202/204 yield `None`, anything else is an [`ApiError`]
//! carrying the raw body.
//!
//! # Design
//! - Requests and responses are plain data ([`HttpRequest`], [`HttpResponse`]);
//!   `build_*` methods and [`parse_response`] work without any I/O.
//! - The network sits behind [`Transport`]; [`ReqwestTransport`] is the default.
//! - Credentials are attached by an [`Authorize`] hook, a no-op by default.
//! - Wire conventions (camelCase, enum names, UTC timestamps) live in [`codec`].
//!
//! ```rust,no_run
//! use resource_client::{ClientConfig, ResourceClient};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! enum Color { Red, Green }
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Widget { id: String, color: Color }
//!
//! #[derive(Deserialize)]
//! struct Widgets { items: Vec<Widget> }
//!
//! #[derive(Deserialize)]
//! struct Created { id: String }
//!
//! # async fn run() -> resource_client::Result<()> {
//! let config = ClientConfig::builder("https://api.x.com/v1")
//!     .api_endpoint("/widgets")
//!     .build();
//! let client: ResourceClient<Widget, Widgets, Created> = ResourceClient::new(config);
//!
//! let widget = client.get("42").await?;
//! let created = client
//!     .create(&Widget { id: "43".into(), color: Color::Red }, None)
//!     .await?;
//! client.delete("42").await?;
//! # let _ = (widget, created);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{ApiKey, Authorize, BearerToken, NoAuth};
pub use client::ResourceClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, Error, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::{classify, parse_response, Outcome};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
