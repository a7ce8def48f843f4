//! Transport capability.
//!
//! The pipeline never performs I/O itself; it hands a [`Request`] to a
//! [`Transport`] and gets back a [`Response`] or a [`TransportError`].
//! The production implementation lives in the `courier` crate; tests inject
//! stubs.

use std::future::Future;

use derive_more::Display;

use crate::{Request, Response};

/// A transport-level failure, opaque to the pipeline.
///
/// This is not part of the public error taxonomy: the pipeline maps
/// [`TransportError::NoResponse`] to [`crate::Error::NoData`] and wraps
/// everything else in [`crate::Error::Unknown`], preserving the cause.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum TransportError {
    /// Connection-level failure (DNS, refused, reset).
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),

    /// TLS/SSL failure.
    #[display("TLS error: {_0}")]
    Tls(#[error(not(source))] String),

    /// The transport's own deadline elapsed.
    #[display("request timeout")]
    Timeout,

    /// The transport produced no interpretable response at all.
    #[display("no response")]
    NoResponse,

    /// Anything else the transport cannot attribute.
    #[display("{_0}")]
    Other(#[error(not(source))] String),
}

impl TransportError {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an unattributed error.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Returns `true` if this is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Capability to execute a wire request.
///
/// Implementations must be safe to invoke concurrently: no shared mutable
/// state across calls. Timeouts and cancellation are the transport's own
/// business; the pipeline defines neither.
pub trait Transport: Send + Sync {
    /// Execute an HTTP request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request could not be carried
    /// out: connection failures, TLS failures, timeouts, or a response the
    /// transport cannot interpret.
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}
