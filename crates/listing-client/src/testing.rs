//! Test utilities for listing-client
//!
//! Provides helpers for running contract tests against an in-process server.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{ListingClient, Result};

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: ListingClient,
    base_path: String,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Create a new test server from an axum Router, with the client rooted at `/`
    ///
    /// # Example
    ///
    /// ```ignore
    /// use listing_client::testing::TestServer;
    ///
    /// let server = TestServer::start(listing_stub::create_router(state)).await?;
    /// let response = server.client.get_item("missing").await?;
    /// ```
    pub async fn start<S>(router: axum::Router<S>) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with_base_path(router, "/").await
    }

    /// Create a new test server whose client is rooted at `base_path`
    /// (e.g. `/api/1`)
    pub async fn start_with_base_path<S>(router: axum::Router<S>, base_path: &str) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with_timeout(
            router,
            base_path,
            Duration::from_secs(5),
            Duration::from_secs(2),
        )
        .await
    }

    /// Create a new test server with custom timeouts
    pub async fn start_with_timeout<S>(
        router: axum::Router<S>,
        base_path: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let router: axum::Router = router.into();

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let base_path = format!("/{}", base_path.trim_matches('/'));
        let base_url = format!("http://{}{}", addr, base_path);
        let client = ListingClient::with_config(&base_url, timeout, connect_timeout)?;

        Ok(Self {
            addr,
            client,
            base_path,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server, including the base path
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, self.base_path)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &ListingClient {
        &self.client
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal if not already done
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        // Abort the task if still running
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Wait for a condition with timeout, checking every `interval`
pub async fn wait_for<F, Fut>(condition: F, timeout: Duration, interval: Duration) -> bool
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        if condition().await {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_format() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let url = format!("http://{}{}", addr, "/api/1");
        assert_eq!(url, "http://127.0.0.1:8080/api/1");
    }

    #[tokio::test]
    async fn test_wait_for_true_immediately() {
        let ok = wait_for(
            || async { true },
            Duration::from_millis(0),
            Duration::from_millis(1),
        )
        .await;
        assert!(ok);
    }

    #[tokio::test]
    async fn test_wait_for_times_out() {
        let ok = wait_for(
            || async { false },
            Duration::from_millis(30),
            Duration::from_millis(5),
        )
        .await;
        assert!(!ok);
    }

    #[tokio::test]
    async fn test_start_and_shutdown() {
        let router =
            axum::Router::new().route("/api/1/ping", axum::routing::get(|| async { "pong" }));
        let server = TestServer::start_with_base_path(router, "api/1/")
            .await
            .unwrap();
        assert!(server.base_url().ends_with("/api/1"));
        assert_eq!(server.client().base_url().path(), "/api/1/");
        server.shutdown().await;
    }
}
