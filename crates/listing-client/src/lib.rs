//! Listing Client Library
//!
//! Provides a typed HTTP client for the marketplace listing API, together with
//! the structural response checks used by contract tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use listing_client::{CreateItemRequest, ListingClient, Statistics, StatusCode, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ListingClient::new(DEFAULT_BASE_URL)?;
//!
//!     let request = CreateItemRequest::new(123456, "Test Item 42")
//!         .with_price(2500)
//!         .with_statistics(Statistics::new(5, 10, 1));
//!
//!     // Responses are returned raw; the caller decides which status is correct
//!     let response = client.create_item(&request).await?;
//!     let item = response.expect_status(StatusCode::OK)?.item()?;
//!
//!     let found = client.get_item(&item.id).await?;
//!     assert_eq!(found.items()?.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module serves any axum router on an ephemeral port and hands
//! back a client pointed at it:
//!
//! ```rust,ignore
//! use listing_client::testing::TestServer;
//!
//! let server = TestServer::start_with_base_path(router, "/api/1").await?;
//! let response = server.client.get_items_by_seller(123456).await?;
//! ```

mod client;
mod error;
pub mod schema;
pub mod testing;
mod types;

pub use client::{
    ApiResponse, ListingClient, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT,
};
pub use error::{ListingClientError, Result};
pub use types::*;

// Re-export so callers can name statuses without depending on reqwest
pub use reqwest::StatusCode;
