//! Request Descriptor
//!
//! The bundle of method, path, query, body, headers, and retry-state
//! for one outbound call. Descriptors are created per call and thrown
//! away once the call resolves; the retry flag is the only mutable
//! field and transitions false -> true exactly once, when the refresh
//! protocol replays the request.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// One outbound request, self-contained so a replay re-sends the
/// identical call
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Option<Value>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
    retried: bool,
}

impl RequestDescriptor {
    /// Create a descriptor for an arbitrary method
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            headers: Vec::new(),
            retried: false,
        }
    }

    /// `GET` descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` descriptor
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `PATCH` descriptor
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// `DELETE` descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach query parameters, serialized once so replays carry the
    /// identical pairs. `None` fields of `query` are omitted.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> ClientResult<Self> {
        self.query = Some(serde_json::to_value(query).map_err(ClientError::Encode)?);
        Ok(self)
    }

    /// Attach a JSON body, serialized once at build time
    pub fn with_body<B: Serialize>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ClientError::Encode)?);
        Ok(self)
    }

    /// Append an extra header. Headers are applied after the
    /// transport's own settings and cannot override origin or
    /// credential policy.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Whether this descriptor has already been replayed once
    pub fn retried(&self) -> bool {
        self.retried
    }

    /// Flag the descriptor before replay. One-way; there is no unset.
    pub(crate) fn mark_retried(&mut self) {
        self.retried = true;
    }
}
