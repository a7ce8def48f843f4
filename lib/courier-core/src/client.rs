//! Request pipeline orchestration.
//!
//! [`Client`] is the single public entry point: it materializes an
//! [`Endpoint`] into a [`Request`], executes it through the injected
//! [`Transport`], classifies the status code, and decodes the body through
//! the injected [`Decoder`]. Every outcome is a value of the closed
//! [`Error`] taxonomy; callers never see raw status codes or bytes without
//! structure.
//!
//! The client holds no per-call state. After construction its only fields
//! are the injected transport, decoder, and the server-error strictness
//! flag, so one instance can serve any number of concurrent calls without
//! locking. There is no shared singleton: construct one client per
//! transport/decoder configuration and pass it where needed.
//!
//! # Example
//!
//! ```ignore
//! use courier_core::{Client, Endpoint, Method};
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct User { id: u64, name: String }
//!
//! #[derive(Debug, serde::Deserialize)]
//! struct ApiError { message: String }
//!
//! let client = Client::new(transport);
//! let endpoint = Endpoint::builder(Method::Get, "https://api.example.com")
//!     .path("/users/1")
//!     .build();
//! let user: User = client.request::<User, ApiError>(&endpoint).await?;
//! ```

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    Decoder, Endpoint, Error, JsonDecoder, Result, StatusClass, Transport, TransportError,
};

/// The request pipeline: transport + decoder + dispatch logic.
#[derive(Debug, Clone)]
pub struct Client<T, D = JsonDecoder> {
    transport: T,
    decoder: D,
    strict_server_errors: bool,
}

impl<T: Transport> Client<T> {
    /// Create a client over `transport` with the default [`JsonDecoder`].
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_decoder(transport, JsonDecoder)
    }
}

impl<T: Transport, D: Decoder> Client<T, D> {
    /// Create a client with an explicit decoder.
    #[must_use]
    pub const fn with_decoder(transport: T, decoder: D) -> Self {
        Self {
            transport,
            decoder,
            strict_server_errors: false,
        }
    }

    /// Escalate a failed diagnostic decode of a 5xx body to
    /// [`Error::Decoding`] instead of degrading to a generic message.
    ///
    /// Off by default: a server that returns garbage alongside its 500
    /// should still surface as a server error, not a decode error.
    #[must_use]
    pub const fn strict_server_errors(mut self, strict: bool) -> Self {
        self.strict_server_errors = strict;
        self
    }

    /// Access the injected transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute one call described by `endpoint`.
    ///
    /// The success body is decoded as `Out`. On a 5xx response the body is
    /// additionally decoded as `ServerErr`, purely to enrich the error
    /// message; that decode never fails the call on its own (unless
    /// [`Self::strict_server_errors`] is set).
    ///
    /// # Errors
    ///
    /// One variant of the closed [`Error`] taxonomy:
    /// - [`Error::InvalidUrl`] when the endpoint cannot form an absolute URL
    /// - [`Error::NoData`] when the transport yields no response
    /// - [`Error::Unknown`] for any other transport failure
    /// - a status-class error for every non-2xx response
    /// - [`Error::Decoding`] when the success body does not satisfy `Out`
    pub async fn request<Out, ServerErr>(&self, endpoint: &Endpoint) -> Result<Out>
    where
        Out: DeserializeOwned,
        ServerErr: DeserializeOwned + fmt::Debug,
    {
        let request = endpoint.to_request()?;
        debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|cause| match cause {
                TransportError::NoResponse => Error::NoData,
                other => Error::Unknown(other),
            })?;

        let (status, _headers, body) = response.into_parts();
        let class = StatusClass::of(status);
        if !class.is_success() {
            debug!(status, %class, "request failed");
        }

        match class {
            StatusClass::Success => self.decoder.decode(&body).map_err(Error::Decoding),
            StatusClass::Informational => Err(Error::informational(status, body)),
            StatusClass::Redirection => Err(Error::redirection(status, body)),
            StatusClass::ClientError => Err(Error::client_error(status, body)),
            StatusClass::ServerError => Err(self.server_error::<ServerErr>(status, body)),
            StatusClass::Unexpected => Err(Error::unexpected_status(status, body)),
        }
    }

    /// Build the enriched 5xx error. Only strict mode can make this yield
    /// a non-[`Error::ServerError`] variant.
    fn server_error<ServerErr>(&self, status: u16, body: Bytes) -> Error
    where
        ServerErr: DeserializeOwned + fmt::Debug,
    {
        match self.decoder.decode::<ServerErr>(&body) {
            Ok(decoded) => Error::server_error(status, body, format!("{decoded:?}")),
            Err(cause) if self.strict_server_errors => Error::Decoding(cause),
            Err(_) => Error::server_error(status, body, "an unknown server error occurred"),
        }
    }
}
