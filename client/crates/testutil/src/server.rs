//! Stub Server Lifecycle
//!
//! Binds an ephemeral local port, serves an axum router in a
//! background task, and aborts the task when the guard drops so tests
//! never leak listeners.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Handle to a running stub service; aborts the serve task on drop
pub struct ServerGuard {
    handle: JoinHandle<()>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve `router` on an ephemeral `127.0.0.1` port
pub async fn spawn(router: Router) -> (SocketAddr, ServerGuard) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind an ephemeral test port");
    let addr = listener
        .local_addr()
        .expect("bound listener has an address");
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("stub server task error: {e:?}");
        }
    });
    (addr, ServerGuard { handle })
}
