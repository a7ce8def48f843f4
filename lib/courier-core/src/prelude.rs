//! Prelude module for convenient imports.
//!
//! ```ignore
//! use courier_core::prelude::*;
//! ```

pub use crate::{
    Client, DecodeError, Decoder, Endpoint, EndpointBuilder, Error, JsonDecoder, Method, Request,
    Response, Result, StatusClass, Transport, TransportError,
};
