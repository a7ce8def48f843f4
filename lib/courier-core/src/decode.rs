//! Body decoding.
//!
//! The pipeline never interprets bytes itself; it hands them to a [`Decoder`].
//! [`JsonDecoder`] is the default implementation, with path-aware error
//! messages so a structural failure names the exact field that broke.

use derive_more::{Display, Error};
use serde::de::DeserializeOwned;

/// A failed typed decode, with the structural cause.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("at '{path}': {message}")]
pub struct DecodeError {
    /// Path to the value that failed (e.g. "user.address.city").
    /// Empty for syntax-level failures.
    pub path: String,
    /// Underlying decoder message.
    pub message: String,
}

impl DecodeError {
    /// Create a new decode error.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Capability to decode raw body bytes into a typed value.
pub trait Decoder: Send + Sync {
    /// Decode `body` into a `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] carrying the structural cause when the bytes
    /// do not satisfy `T`.
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, DecodeError>;
}

/// JSON decoder backed by `serde_json`, the default for [`crate::Client`].
///
/// Decoding goes through `serde_path_to_error` so failures report the JSON
/// path to the offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| DecodeError::new(e.path().to_string(), e.inner().to_string()))
    }
}
