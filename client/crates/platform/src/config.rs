//! Client Configuration
//!
//! Immutable settings for the session-aware portal client. Constructed
//! once at startup and shared read-only; there is no runtime
//! reconfiguration.

use reqwest::Url;

/// Default path prefix served by the knowledge-base service.
///
/// The spelling is historical but it is what the service routes;
/// keep in sync with the gateway.
pub const KNOWLEDGE_PREFIX: &str = "/api/knowlege";

/// Default session refresh endpoint (directory origin, `POST`, no body)
pub const REFRESH_PATH: &str = "/api/auth/refresh";

/// Default login route handed to the redirect hook on failed refresh
pub const LOGIN_PATH: &str = "/login";

/// Identity-provider entry point under the directory origin
pub const AUTH_ENTRY_PATH: &str = "/api/auth/login";

/// Portal client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the user-directory service
    pub directory_origin: Url,
    /// Base URL of the knowledge-base service
    pub knowledge_origin: Url,
    /// Path prefix that routes to the knowledge origin
    pub knowledge_prefix: String,
    /// Session refresh endpoint path
    pub refresh_path: String,
    /// Login route passed to the redirect hook
    pub login_path: String,
}

impl ClientConfig {
    /// Create a config for the given service origins with the standard
    /// protocol paths
    pub fn new(directory_origin: Url, knowledge_origin: Url) -> Self {
        Self {
            directory_origin,
            knowledge_origin,
            knowledge_prefix: KNOWLEDGE_PREFIX.to_string(),
            refresh_path: REFRESH_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
        }
    }

    /// Create config for local development (default service ports)
    pub fn localhost() -> Self {
        let directory = Url::parse("http://localhost:8000").expect("static URL is valid");
        let knowledge = Url::parse("http://localhost:8005").expect("static URL is valid");
        Self::new(directory, knowledge)
    }

    /// URL a user agent should visit to start the identity-provider
    /// login flow. Not an API call; the client only hands it out.
    pub fn auth_entry_url(&self) -> Url {
        self.directory_origin
            .join(AUTH_ENTRY_PATH)
            .expect("static path joins onto an absolute origin")
    }
}
