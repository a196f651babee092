//! Session-Aware API Client
//!
//! The single access point for portal HTTP traffic. Callers use the
//! typed verbs and never see origin selection, credential attachment,
//! or session refresh:
//!
//! - **Origin routing**: each path is dispatched to the directory or
//!   knowledge service by prefix ([`crate::origin`]).
//! - **Credential attachment**: the production transport carries the
//!   session cookie on every call; no token is visible at this layer.
//! - **Session refresh**: a 401 on a fresh request triggers exactly one
//!   refresh `POST` and one replay of the original descriptor. A 401 on
//!   the refresh path, or on an already-replayed request, is delivered
//!   as-is. A failed refresh fires the login-redirect hook once and
//!   rejects the caller with the refresh failure.
//!
//! Concurrent calls share no per-request state, so N concurrent 401s
//! trigger N independent refresh calls. Known inefficiency: coalescing
//! them into one shared refresh would change observable call counts and
//! is deliberately not done here.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::redirect::{SessionRedirect, TracingRedirect};
use crate::request::RequestDescriptor;
use crate::transport::{HttpTransport, Transport, WireResponse};

/// Disposition of a dispatched response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Deliver to the caller as-is: success or a non-recoverable failure
    Deliver,
    /// 401 eligible for one refresh and one replay
    RefreshAndReplay,
}

/// The refresh decision as a plain function: a 401 is recoverable only
/// on a fresh descriptor that is not itself the refresh call.
pub(crate) fn classify(
    status: StatusCode,
    request: &RequestDescriptor,
    refresh_path: &str,
) -> Outcome {
    if status == StatusCode::UNAUTHORIZED && !request.retried() && request.path() != refresh_path {
        Outcome::RefreshAndReplay
    } else {
        Outcome::Deliver
    }
}

/// Session-aware client over a transport capability
///
/// Constructed once at startup with immutable configuration; consumers
/// hold it behind an `Arc` and issue verbs concurrently.
pub struct ApiClient<T>
where
    T: Transport + Send + Sync + 'static,
{
    transport: Arc<T>,
    config: Arc<ClientConfig>,
    redirect: Arc<dyn SessionRedirect>,
}

/// Production client type over the cookie-carrying HTTP transport
pub type PortalClient = ApiClient<HttpTransport>;

impl PortalClient {
    /// Build the production client for the given configuration
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let config = Arc::new(config);
        let transport = Arc::new(HttpTransport::new(Arc::clone(&config))?);
        Ok(Self::with_transport(transport, config))
    }
}

impl<T> ApiClient<T>
where
    T: Transport + Send + Sync + 'static,
{
    /// Build a client over an explicit transport (tests inject a
    /// scripted one here)
    pub fn with_transport(transport: Arc<T>, config: Arc<ClientConfig>) -> Self {
        Self {
            transport,
            config,
            redirect: Arc::new(TracingRedirect),
        }
    }

    /// Replace the login-redirect hook
    pub fn with_redirect(mut self, redirect: Arc<dyn SessionRedirect>) -> Self {
        self.redirect = redirect;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Verbs
    // ========================================================================

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.execute_json(RequestDescriptor::get(path)).await
    }

    pub async fn get_with<Q, R>(&self, path: &str, query: &Q) -> ClientResult<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        self.execute_json(RequestDescriptor::get(path).with_query(query)?)
            .await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.execute_json(RequestDescriptor::post(path).with_body(body)?)
            .await
    }

    /// `POST` without a body (the refresh endpoint takes none)
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.execute_json(RequestDescriptor::post(path)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.execute_json(RequestDescriptor::put(path).with_body(body)?)
            .await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.execute_json(RequestDescriptor::patch(path).with_body(body)?)
            .await
    }

    /// `DELETE`; the portal's delete endpoints answer 204 with no body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute_unit(RequestDescriptor::delete(path)).await
    }

    // ========================================================================
    // State machine
    // ========================================================================

    /// Run one descriptor through the refresh-and-replay protocol and
    /// return the wire-level outcome. The typed verbs cover the common
    /// cases; callers needing extra headers build their own descriptor.
    pub async fn execute(&self, mut request: RequestDescriptor) -> ClientResult<WireResponse> {
        let response = self.transport.dispatch(&request).await?;

        match classify(response.status, &request, &self.config.refresh_path) {
            Outcome::Deliver => Ok(response),
            Outcome::RefreshAndReplay => {
                request.mark_retried();
                tracing::debug!(path = %request.path(), "Session rejected, attempting refresh");
                match self.refresh_session().await {
                    Ok(()) => {
                        tracing::debug!(path = %request.path(), "Session refreshed, replaying request");
                        // The descriptor is flagged, so a second 401
                        // passes straight through to the caller.
                        self.transport.dispatch(&request).await
                    }
                    Err(refresh_err) => {
                        self.redirect.redirect_to_login(&self.config.login_path);
                        Err(ClientError::SessionExpired {
                            source: Box::new(refresh_err),
                        })
                    }
                }
            }
        }
    }

    /// One refresh `POST`; 2xx renews the session cookie inside the
    /// transport, anything else fails the session
    async fn refresh_session(&self) -> ClientResult<()> {
        let refresh = RequestDescriptor::post(self.config.refresh_path.clone());
        let response = self.transport.dispatch(&refresh).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(status_error(&response))
        }
    }

    async fn execute_json<R: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> ClientResult<R> {
        let response = self.execute(request).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        serde_json::from_slice(&response.body).map_err(ClientError::Decode)
    }

    async fn execute_unit(&self, request: RequestDescriptor) -> ClientResult<()> {
        let response = self.execute(request).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        Ok(())
    }
}

fn status_error(response: &WireResponse) -> ClientError {
    ClientError::Status {
        status: response.status.as_u16(),
        detail: response.detail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFRESH: &str = "/api/auth/refresh";

    fn fresh(path: &str) -> RequestDescriptor {
        RequestDescriptor::get(path)
    }

    fn replayed(path: &str) -> RequestDescriptor {
        let mut request = RequestDescriptor::get(path);
        request.mark_retried();
        request
    }

    #[test]
    fn test_classify_success_delivers() {
        for status in [StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT] {
            assert_eq!(
                classify(status, &fresh("/api/users/me"), REFRESH),
                Outcome::Deliver
            );
        }
    }

    #[test]
    fn test_classify_non_401_failures_deliver() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert_eq!(
                classify(status, &fresh("/api/users/me"), REFRESH),
                Outcome::Deliver
            );
        }
    }

    #[test]
    fn test_classify_fresh_401_refreshes() {
        assert_eq!(
            classify(StatusCode::UNAUTHORIZED, &fresh("/api/users/me"), REFRESH),
            Outcome::RefreshAndReplay
        );
        assert_eq!(
            classify(StatusCode::UNAUTHORIZED, &fresh("/api/knowlege/42"), REFRESH),
            Outcome::RefreshAndReplay
        );
    }

    #[test]
    fn test_classify_replayed_401_delivers() {
        assert_eq!(
            classify(StatusCode::UNAUTHORIZED, &replayed("/api/users/me"), REFRESH),
            Outcome::Deliver
        );
    }

    #[test]
    fn test_classify_refresh_path_401_delivers() {
        assert_eq!(
            classify(StatusCode::UNAUTHORIZED, &fresh(REFRESH), REFRESH),
            Outcome::Deliver
        );
    }
}
