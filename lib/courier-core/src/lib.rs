//! Core types and pipeline for the courier typed HTTP client.
//!
//! This crate provides the full request-execution pipeline, free of any I/O:
//! - [`Endpoint`] and [`EndpointBuilder`] - declarative call descriptions
//! - [`Request`] and [`Response`] - wire-level value types
//! - [`Method`] - HTTP method enum
//! - [`StatusClass`] - status-code range classification
//! - [`Error`] and [`Result`] - the closed error taxonomy
//! - [`Transport`] - pluggable execution capability
//! - [`Decoder`] and [`JsonDecoder`] - typed body decoding
//! - [`Client`] - the orchestrating entry point
//!
//! The production hyper-based transport lives in the `courier` crate.

mod client;
mod decode;
mod endpoint;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;
mod status;
mod transport;

pub use client::Client;
pub use decode::{DecodeError, Decoder, JsonDecoder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{Error, Result};
pub use method::Method;
pub use request::Request;
pub use response::Response;
pub use status::StatusClass;
pub use transport::{Transport, TransportError};
