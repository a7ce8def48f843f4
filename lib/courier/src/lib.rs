//! Typed HTTP request/response pipeline.
//!
//! Describe a call as an [`Endpoint`], hand it to a [`Client`], and get back
//! either a strongly-typed value or one variant of a closed [`Error`]
//! taxonomy. No raw status codes, no raw bytes, no ad-hoc error strings.
//!
//! # Example
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct ApiError {
//!     message: String,
//! }
//!
//! let client = Client::new(HyperTransport::new());
//! let endpoint = Endpoint::builder(Method::Get, "https://api.example.com")
//!     .path("/users/1")
//!     .header("Accept", "application/json")
//!     .build();
//!
//! let user: User = client.request::<User, ApiError>(&endpoint).await?;
//! ```
//!
//! The pipeline itself lives in `courier-core` and is I/O-free; this crate
//! adds the production [`HyperTransport`] (hyper-util, connection pooling,
//! rustls TLS, request timeout). Any [`Transport`] implementation can be
//! injected instead, which is how the core is tested without a network.

mod config;
mod connector;
pub mod prelude;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;

// Re-export core types
pub use courier_core::{
    Client, DecodeError, Decoder, Endpoint, EndpointBuilder, Error, JsonDecoder, Method, Request,
    Response, Result, StatusClass, Transport, TransportError,
};

// Re-export url for endpoint construction helpers
pub use url;
