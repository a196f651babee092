//! Login Redirect Hook
//!
//! Stand-in for the browser's hard navigation to the login page. When a
//! session refresh fails the client fires this hook exactly once with
//! the configured login path, then surfaces the failure to the caller.
//! The hook must not assume the caller's pending result has resolved.

/// Side-effect channel for the unrecoverable-session case
pub trait SessionRedirect: Send + Sync {
    /// Called once per failed refresh with the fixed login path
    fn redirect_to_login(&self, login_path: &str);
}

/// Default hook: records the event in the log and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRedirect;

impl SessionRedirect for TracingRedirect {
    fn redirect_to_login(&self, login_path: &str) {
        tracing::warn!(login_path, "Session expired, user must sign in again");
    }
}
