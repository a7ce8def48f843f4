//! Endpoint descriptors.
//!
//! An [`Endpoint`] is the declarative, immutable description of one HTTP
//! call: where it goes, how, and with what. It carries no identity beyond
//! its field values and is materialized into a wire [`Request`] with
//! [`Endpoint::to_request`].
//!
//! # Example
//!
//! ```
//! use courier_core::{Endpoint, Method};
//!
//! let endpoint = Endpoint::builder(Method::Get, "https://example.com")
//!     .path("/mock/testing")
//!     .header("accept", "application/json")
//!     .query("language", "tr-TR")
//!     .build();
//!
//! let request = endpoint.to_request().expect("valid URL");
//! assert!(request.url().as_str().contains("https://example.com/mock/testing"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Method, Request, Result};

/// Immutable description of one HTTP call, prior to materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_address: String,
    path: String,
    method: Method,
    headers: Option<HashMap<String, String>>,
    query: Option<Vec<(String, String)>>,
    body: Option<Bytes>,
}

impl Endpoint {
    /// Creates a new [`EndpointBuilder`].
    #[must_use]
    pub fn builder(method: Method, base_address: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder::new(method, base_address)
    }

    /// Base address the path is resolved against.
    #[must_use]
    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Path appended to the base address, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request headers, if any were declared.
    #[must_use]
    pub const fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Query parameters in declaration order, if any were declared.
    #[must_use]
    pub fn query(&self) -> Option<&[(String, String)]> {
        self.query.as_deref()
    }

    /// Request body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Materialize this endpoint into a wire [`Request`].
    ///
    /// The URL is the base address joined with the path (exactly one `/`
    /// between them) and the query parameters appended, percent-encoded, in
    /// declaration order. Deterministic: the same endpoint always yields the
    /// same request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] when the joined string does not
    /// parse as an absolute URL. This is the only failure mode.
    pub fn to_request(&self) -> Result<Request> {
        let mut url = if self.path.is_empty() {
            url::Url::parse(&self.base_address)?
        } else {
            let base = self.base_address.trim_end_matches('/');
            let path = self.path.trim_start_matches('/');
            url::Url::parse(&format!("{base}/{path}"))?
        };

        // An empty mapping behaves exactly like an absent one: no `?` suffix.
        if let Some(query) = self.query.as_deref().filter(|pairs| !pairs.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        let headers = self.headers.clone().unwrap_or_default();
        Ok(Request::new(self.method, url, headers, self.body.clone()))
    }
}

/// Builder for [`Endpoint`] instances.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    base_address: String,
    path: String,
    method: Method,
    headers: Option<HashMap<String, String>>,
    query: Option<Vec<(String, String)>>,
    body: Option<Bytes>,
}

impl EndpointBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, base_address: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            path: String::new(),
            method,
            headers: None,
            query: None,
            body: None,
        }
    }

    /// Sets the path appended to the base address.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Appends a query parameter. Values are anything stringable; encoding
    /// happens during materialization.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.to_string()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`Endpoint`].
    #[must_use]
    pub fn build(self) -> Endpoint {
        Endpoint {
            base_address: self.base_address,
            path: self.path,
            method: self.method,
            headers: self.headers,
            query: self.query,
            body: self.body,
        }
    }
}
