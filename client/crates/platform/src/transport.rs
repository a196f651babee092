//! Transport Capability
//!
//! The raw HTTP send, as a capability the client core depends on.
//! Implementations may carry ambient credentials: the production
//! transport owns a cookie store the application never reads or
//! parses. Tests substitute a scripted transport to drive the refresh
//! protocol deterministically.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::origin;
use crate::request::RequestDescriptor;

/// Response at the wire level: status plus raw body bytes
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as diagnostic text, truncated to keep logs readable
    pub fn detail(&self) -> String {
        const MAX_CHARS: usize = 256;
        let text = String::from_utf8_lossy(&self.body);
        let trimmed = text.trim();
        let truncated: String = trimmed.chars().take(MAX_CHARS).collect();
        if truncated.len() < trimmed.len() {
            format!("{truncated}...")
        } else {
            truncated
        }
    }
}

/// Raw send capability
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Send one request descriptor and return the wire-level outcome.
    /// Network-level failures are errors; any HTTP status is an Ok
    /// response for the caller to classify.
    async fn dispatch(&self, request: &RequestDescriptor) -> ClientResult<WireResponse>;
}

/// Production transport over `reqwest` with an opaque cookie store
pub struct HttpTransport {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Build the transport. The cookie store is always on so the
    /// session credential flows with every request; application code
    /// never sees a token value.
    pub fn new(config: Arc<ClientConfig>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { http, config })
    }

    fn resolve_url(&self, request: &RequestDescriptor) -> ClientResult<reqwest::Url> {
        let origin = origin::select_origin(&self.config, request.path());
        origin
            .join(request.path())
            .map_err(|e| ClientError::InvalidPath {
                path: request.path().to_string(),
                detail: e.to_string(),
            })
    }
}

impl Transport for HttpTransport {
    async fn dispatch(&self, request: &RequestDescriptor) -> ClientResult<WireResponse> {
        let url = self.resolve_url(request)?;
        let mut builder = self.http.request(request.method().clone(), url);
        if let Some(query) = request.query() {
            builder = builder.query(&query_pairs(query));
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(WireResponse { status, body })
    }
}

/// Flatten a serialized query object into key/value pairs. Absent and
/// empty values are dropped, matching what the services expect for
/// unset filters.
fn query_pairs(query: &Value) -> Vec<(String, String)> {
    match query {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) if s.is_empty() => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect(),
        _ => Vec::new(),
    }
}
