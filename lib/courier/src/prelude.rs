//! Prelude module for convenient imports.
//!
//! ```ignore
//! use courier::prelude::*;
//! ```

pub use crate::{
    Client, DecodeError, Decoder, Endpoint, EndpointBuilder, Error, HyperTransport, JsonDecoder,
    Method, Request, Response, Result, StatusClass, Transport, TransportConfig, TransportError,
};
pub use serde::{Deserialize, Serialize};
