//! Status code classification.
//!
//! Every response status is bucketed into one of six closed ranges before the
//! pipeline decides what to do with the body. [`StatusClass::Unexpected`]
//! catches anything a server should never legally send (below 100 or above
//! 599), so the caller is never handed an unclassified code.

use derive_more::Display;

/// Classification of an HTTP status code by numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusClass {
    /// 100-199.
    #[display("informational")]
    Informational,
    /// 200-299.
    #[display("success")]
    Success,
    /// 300-399.
    #[display("redirection")]
    Redirection,
    /// 400-499.
    #[display("client error")]
    ClientError,
    /// 500-599.
    #[display("server error")]
    ServerError,
    /// Anything outside 100-599.
    #[display("unexpected status")]
    Unexpected,
}

impl StatusClass {
    /// Classify a status code into its range.
    #[must_use]
    pub const fn of(status: u16) -> Self {
        match status {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unexpected,
        }
    }

    /// Returns `true` for the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
