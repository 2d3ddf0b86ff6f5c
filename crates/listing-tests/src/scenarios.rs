//! Contract scenarios
//!
//! Each scenario arranges its own data, calls the service through the
//! context's client and checks status, shape and values. A scenario returns
//! the first violation it finds; nothing is retried.

use anyhow::{ensure, Context, Result};
use listing_client::{Item, ListingClientError, StatusCode};

use crate::context::ContractContext;
use crate::fixtures;

/// Create a listing and return it after checking the create contract
async fn create_checked(ctx: &ContractContext, seller_id: i64) -> Result<Item> {
    let request = fixtures::create_payload(seller_id);
    let response = ctx.client().create_item(&request).await?;

    let item = response
        .expect_status(StatusCode::OK)?
        .item()
        .context("create response")?;
    item.verify_against(&request).context("create response echo")?;

    Ok(item)
}

/// POST /item with a valid payload answers 200 with the stored item
pub async fn create_item_succeeds(ctx: &ContractContext) -> Result<()> {
    let item = create_checked(ctx, ctx.seller_id()).await?;

    ensure!(!item.id.is_empty(), "created item has an empty id");
    ensure!(
        !item.created_at.is_empty(),
        "created item has an empty createdAt"
    );
    Ok(())
}

/// POST /item without `name` answers 400
pub async fn create_item_without_name_is_rejected(ctx: &ContractContext) -> Result<()> {
    create_item_without_field_is_rejected(ctx, "name").await
}

/// POST /item without `field` answers 400
pub async fn create_item_without_field_is_rejected(
    ctx: &ContractContext,
    field: &str,
) -> Result<()> {
    let body = fixtures::payload_without(ctx.seller_id(), field);
    let response = ctx.client().create_item_raw(&body).await?;

    response
        .expect_status(StatusCode::BAD_REQUEST)
        .with_context(|| format!("create without `{}`", field))?;
    Ok(())
}

/// GET /item/{id} after a create answers with exactly that item
pub async fn get_item_returns_created_item(ctx: &ContractContext) -> Result<()> {
    let created = create_checked(ctx, ctx.seller_id()).await?;

    let client = ctx.client();
    let id = created.id.as_str();
    let response = ctx
        .read_after_write(
            move || client.get_item(id),
            |response| response.status() == StatusCode::OK,
        )
        .await?;

    let items = response
        .expect_status(StatusCode::OK)?
        .items()
        .context("get item response")?;
    ensure!(
        items.len() == 1,
        "expected exactly one item for id {}, got {}",
        id,
        items.len()
    );

    items[0]
        .verify_same(&created)
        .with_context(|| format!("get item {}", id))?;
    Ok(())
}

/// GET /item/{id} for an id nobody created answers 404
pub async fn get_unknown_item_is_not_found(ctx: &ContractContext) -> Result<()> {
    let id = fixtures::unknown_item_id();
    let response = ctx.client().get_item(&id).await?;

    response
        .expect_status(StatusCode::NOT_FOUND)
        .with_context(|| format!("get unknown item {}", id))?;
    Ok(())
}

/// GET /{sellerId}/item after two creates lists at least both, all well-formed
pub async fn seller_with_two_items_lists_both(ctx: &ContractContext) -> Result<()> {
    let seller_id = ctx.seller_id();
    let first = create_checked(ctx, seller_id).await?;
    let second = create_checked(ctx, seller_id).await?;

    let client = ctx.client();
    let response = ctx
        .read_after_write(
            move || client.get_items_by_seller(seller_id),
            |response| {
                response.items().is_ok_and(|items| {
                    [&first.id, &second.id]
                        .into_iter()
                        .all(|id| items.iter().any(|item| &item.id == id))
                })
            },
        )
        .await?;

    let items = response
        .expect_status(StatusCode::OK)?
        .items()
        .context("seller listing response")?;
    ensure!(
        items.len() >= 2,
        "expected at least 2 items for seller {}, got {}",
        seller_id,
        items.len()
    );
    for item in &items {
        if item.seller_id != seller_id {
            return Err(
                ListingClientError::value_mismatch("sellerId", seller_id, item.seller_id).into(),
            );
        }
    }
    Ok(())
}

/// GET /{sellerId}/item for a seller without listings answers an empty array
pub async fn seller_without_items_lists_nothing(ctx: &ContractContext) -> Result<()> {
    let seller_id = fixtures::random_seller_id();
    let response = ctx.client().get_items_by_seller(seller_id).await?;

    let items = response
        .expect_status(StatusCode::OK)?
        .items()
        .context("empty seller listing response")?;
    ensure!(
        items.is_empty(),
        "expected no items for fresh seller {}, got {}",
        seller_id,
        items.len()
    );
    Ok(())
}

/// GET /statistic/{id} after a create answers the counters that were sent
pub async fn get_stats_returns_created_statistics(ctx: &ContractContext) -> Result<()> {
    let created = create_checked(ctx, ctx.seller_id()).await?;

    let client = ctx.client();
    let id = created.id.as_str();
    let response = ctx
        .read_after_write(
            move || client.get_stats(id),
            |response| response.status() == StatusCode::OK,
        )
        .await?;

    let stats = response
        .expect_status(StatusCode::OK)?
        .statistics()
        .context("statistics response")?;
    ensure!(!stats.is_empty(), "statistics for item {} are empty", id);
    if stats[0] != created.statistics {
        return Err(ListingClientError::value_mismatch(
            "statistics",
            format!("{:?}", created.statistics),
            format!("{:?}", stats[0]),
        )
        .into());
    }
    Ok(())
}

/// GET /statistic/{id} for an id nobody created answers 404
pub async fn get_stats_of_unknown_item_is_not_found(ctx: &ContractContext) -> Result<()> {
    let id = fixtures::unknown_item_id();
    let response = ctx.client().get_stats(&id).await?;

    response
        .expect_status(StatusCode::NOT_FOUND)
        .with_context(|| format!("get statistics of unknown item {}", id))?;
    Ok(())
}
