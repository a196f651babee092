//! Platform Crate - Technical Infrastructure
//!
//! This crate owns the session-aware HTTP core of the portal client:
//! - Immutable client configuration (two origins, fixed protocol paths)
//! - Pure origin routing by path prefix
//! - The transport capability with its opaque cookie store
//! - The refresh-and-replay session protocol
//!
//! Domain crates (directory, knowledge) sit on top of the verbs
//! exposed by [`client::ApiClient`] and contain no retry logic of
//! their own.

pub mod client;
pub mod config;
pub mod error;
pub mod origin;
pub mod redirect;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use client::{ApiClient, PortalClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Origin URLs are `reqwest` URLs; consumers build configs without
// depending on the HTTP stack themselves
pub use reqwest::Url;
