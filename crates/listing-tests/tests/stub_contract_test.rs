//! Contract scenarios against the in-process listing stub
//!
//! Run with: cargo test -p listing-tests --test stub_contract_test

use listing_tests::{fixtures, scenarios, ContractContext};

async fn stub_context() -> ContractContext {
    ContractContext::stub()
        .await
        .expect("Failed to start listing stub")
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_item() -> anyhow::Result<()> {
    scenarios::create_item_succeeds(&stub_context().await).await
}

#[tokio::test]
async fn test_create_item_without_name_returns_400() -> anyhow::Result<()> {
    scenarios::create_item_without_name_is_rejected(&stub_context().await).await
}

#[tokio::test]
async fn test_create_item_without_any_required_field_returns_400() -> anyhow::Result<()> {
    let ctx = stub_context().await;
    for field in fixtures::REQUIRED_FIELDS {
        scenarios::create_item_without_field_is_rejected(&ctx, field).await?;
    }
    Ok(())
}

// =============================================================================
// Get by id
// =============================================================================

#[tokio::test]
async fn test_get_item_after_create() -> anyhow::Result<()> {
    scenarios::get_item_returns_created_item(&stub_context().await).await
}

#[tokio::test]
async fn test_get_unknown_item_returns_404() -> anyhow::Result<()> {
    scenarios::get_unknown_item_is_not_found(&stub_context().await).await
}

// =============================================================================
// Seller listing
// =============================================================================

#[tokio::test]
async fn test_seller_with_two_items() -> anyhow::Result<()> {
    scenarios::seller_with_two_items_lists_both(&stub_context().await).await
}

#[tokio::test]
async fn test_seller_without_items() -> anyhow::Result<()> {
    scenarios::seller_without_items_lists_nothing(&stub_context().await).await
}

// =============================================================================
// Statistics
// =============================================================================

#[tokio::test]
async fn test_get_stats_after_create() -> anyhow::Result<()> {
    scenarios::get_stats_returns_created_statistics(&stub_context().await).await
}

#[tokio::test]
async fn test_get_stats_of_unknown_item_returns_404() -> anyhow::Result<()> {
    scenarios::get_stats_of_unknown_item_is_not_found(&stub_context().await).await
}
