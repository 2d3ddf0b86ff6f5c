//! Per-test contract context
//!
//! A [`ContractContext`] bundles what every scenario needs: a client aimed at
//! the service under test, the seller id shared across the test binary, and
//! the consistency wait to use between writes and reads.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use listing_client::testing::{wait_for, TestServer};
use listing_client::{ApiResponse, ListingClient};
use listing_stub::{create_router, AppState, API_PREFIX};

use crate::config::{ConsistencyWait, HarnessConfig};
use crate::fixtures;
use crate::telemetry::init_tracing;

pub struct ContractContext {
    client: ListingClient,
    seller_id: i64,
    consistency: ConsistencyWait,
    /// Keeps the in-process server alive for the lifetime of the context
    _server: Option<TestServer>,
}

impl ContractContext {
    /// Context backed by a fresh, immediately consistent stub
    pub async fn stub() -> Result<Self> {
        Self::stub_with(AppState::new(), ConsistencyWait::IMMEDIATE).await
    }

    /// Context backed by a stub with the given state and wait strategy
    pub async fn stub_with(state: AppState, consistency: ConsistencyWait) -> Result<Self> {
        Self::with_router(create_router(state), consistency).await
    }

    /// Context backed by any router that serves the API under `/api/1`
    pub async fn with_router(router: axum::Router, consistency: ConsistencyWait) -> Result<Self> {
        init_tracing();

        let server = TestServer::start_with_base_path(router, API_PREFIX)
            .await
            .context("Failed to start test server")?;

        Ok(Self {
            client: server.client.clone(),
            seller_id: fixtures::shared_seller_id(),
            consistency,
            _server: Some(server),
        })
    }

    /// Context aimed at the configured live service, or `None` if no base URL
    /// is configured
    pub fn live(config: &HarnessConfig) -> Result<Option<Self>> {
        init_tracing();

        let Some(base_url) = config.base_url.as_deref() else {
            return Ok(None);
        };

        let client =
            ListingClient::with_config(base_url, config.timeout(), config.connect_timeout())
                .with_context(|| format!("Invalid base URL: {}", base_url))?;
        tracing::info!(%base_url, "Running contract scenarios against live service");

        Ok(Some(Self {
            client,
            seller_id: fixtures::shared_seller_id(),
            consistency: config.consistency,
            _server: None,
        }))
    }

    pub fn client(&self) -> &ListingClient {
        &self.client
    }

    /// Seller id shared by all scenarios in this test binary
    pub fn seller_id(&self) -> i64 {
        self.seller_id
    }

    pub fn consistency(&self) -> ConsistencyWait {
        self.consistency
    }

    /// Perform a read that should observe an earlier write
    ///
    /// In fixed mode this sleeps once and reads once, whatever the outcome. In
    /// poll mode the read repeats until `accept` holds or the timeout passes;
    /// the final read is returned either way so the caller's assertions report
    /// what the service actually answered.
    pub async fn read_after_write<R, Fut, A>(&self, read: R, accept: A) -> Result<ApiResponse>
    where
        R: Fn() -> Fut,
        Fut: Future<Output = listing_client::Result<ApiResponse>>,
        A: Fn(&ApiResponse) -> bool,
    {
        match self.consistency {
            ConsistencyWait::Fixed { delay_ms } => {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
            ConsistencyWait::Poll {
                timeout_ms,
                interval_ms,
            } => {
                let read = &read;
                let accept = &accept;
                let settled = wait_for(
                    move || async move { matches!(read().await, Ok(response) if accept(&response)) },
                    Duration::from_millis(timeout_ms),
                    Duration::from_millis(interval_ms),
                )
                .await;
                if !settled {
                    tracing::warn!(timeout_ms, "Read did not settle before timeout");
                }
            }
        }

        Ok(read().await?)
    }
}
