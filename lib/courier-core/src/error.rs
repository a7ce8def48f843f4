//! Error types for courier.
//!
//! [`Error`] is a closed taxonomy: every way a call through the pipeline can
//! fail is one of these variants, each terminal (nothing is retried or
//! swallowed internally). Variants that originate from a real HTTP response
//! keep the raw body bytes so callers can log the upstream payload even
//! without a typed model for it.

use bytes::Bytes;
use derive_more::{Display, Error, From};

use crate::decode::DecodeError;
use crate::transport::TransportError;

/// Main error type for courier operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The endpoint could not be materialized into a valid absolute URL.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The transport produced no interpretable response.
    #[display("no data received from the server")]
    #[from(skip)]
    NoData,

    /// Informational (1xx) response.
    #[display("informational response {status}: {}", render_body(body))]
    #[from(skip)]
    Informational {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// Redirection (3xx) response.
    #[display("redirection {status}: {}", render_body(body))]
    #[from(skip)]
    Redirection {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// Client error (4xx) response.
    #[display("client error {status}: {}", render_body(body))]
    #[from(skip)]
    ClientError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// Server error (5xx) response, with a best-effort decoded message.
    #[display("server error {status}: {message}")]
    #[from(skip)]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
        /// Message decoded from the body, or a generic fallback.
        message: String,
    },

    /// Status code outside 100-599.
    #[display("unexpected status code {status}: {}", render_body(body))]
    #[from(skip)]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// Typed decoding of a response body failed.
    #[display("decoding error: {_0}")]
    #[from]
    Decoding(DecodeError),

    /// Uncategorized transport failure.
    #[display("unknown error: {_0}")]
    #[from]
    Unknown(TransportError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

fn render_body(body: &Bytes) -> String {
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(_) => "<no readable data>".to_string(),
    }
}

impl Error {
    /// Create an informational (1xx) error.
    #[must_use]
    pub const fn informational(status: u16, body: Bytes) -> Self {
        Self::Informational { status, body }
    }

    /// Create a redirection (3xx) error.
    #[must_use]
    pub const fn redirection(status: u16, body: Bytes) -> Self {
        Self::Redirection { status, body }
    }

    /// Create a client error (4xx).
    #[must_use]
    pub const fn client_error(status: u16, body: Bytes) -> Self {
        Self::ClientError { status, body }
    }

    /// Create a server error (5xx) with a message.
    #[must_use]
    pub fn server_error(status: u16, body: Bytes, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            body,
            message: message.into(),
        }
    }

    /// Create an unexpected-status error.
    #[must_use]
    pub const fn unexpected_status(status: u16, body: Bytes) -> Self {
        Self::UnexpectedStatus { status, body }
    }

    /// Returns the HTTP status code if this error originates from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Informational { status, .. }
            | Self::Redirection { status, .. }
            | Self::ClientError { status, .. }
            | Self::ServerError { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error originates from a response.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Informational { body, .. }
            | Self::Redirection { body, .. }
            | Self::ClientError { body, .. }
            | Self::ServerError { body, .. }
            | Self::UnexpectedStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::ClientError { .. })
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { .. })
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a decoding error.
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }
}
