//! listing-stub - in-memory stand-in for the marketplace listing API
//!
//! Serves the four listing endpoints from an in-process store so the contract
//! suite can run without the hosted service. Items live only as long as the
//! [`AppState`] that holds them.
//!
//! # Usage
//!
//! ```ignore
//! use listing_stub::{create_router, AppState, API_PREFIX};
//! use listing_client::testing::TestServer;
//!
//! let server = TestServer::start_with_base_path(create_router(AppState::new()), API_PREFIX).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Path prefix the listing API is mounted under
pub const API_PREFIX: &str = "/api/1";

/// Create the listing API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/item", post(handlers::items::create_item))
        .route("/item/{id}", get(handlers::items::get_item))
        .route("/{seller_id}/item", get(handlers::items::list_seller_items))
        .route("/statistic/{id}", get(handlers::statistics::get_statistics))
        .with_state(state);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
}
