//! Randomized request data
//!
//! Values are random so repeated runs against a shared live service do not
//! collide, but nothing guarantees uniqueness.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use listing_client::{CreateItemRequest, Statistics};
use rand::Rng;

pub const SELLER_ID_RANGE: RangeInclusive<i64> = 111_111..=999_999;
pub const PRICE_RANGE: RangeInclusive<i64> = 100..=50_000;
pub const NAME_SUFFIX_RANGE: RangeInclusive<i64> = 1..=1_000;
pub const LIKES_RANGE: RangeInclusive<i64> = 0..=100;
pub const VIEW_COUNT_RANGE: RangeInclusive<i64> = 0..=1_000;
pub const CONTACTS_RANGE: RangeInclusive<i64> = 0..=50;

/// Top-level fields every create request must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["sellerID", "name", "price", "statistics"];

static SHARED_SELLER_ID: OnceLock<i64> = OnceLock::new();

/// Seller id shared by every test in this binary
pub fn shared_seller_id() -> i64 {
    *SHARED_SELLER_ID.get_or_init(random_seller_id)
}

/// A fresh seller id
pub fn random_seller_id() -> i64 {
    rand::thread_rng().gen_range(SELLER_ID_RANGE)
}

pub fn random_statistics() -> Statistics {
    let mut rng = rand::thread_rng();
    Statistics::new(
        rng.gen_range(LIKES_RANGE),
        rng.gen_range(VIEW_COUNT_RANGE),
        rng.gen_range(CONTACTS_RANGE),
    )
}

/// A valid create request for `seller_id`
pub fn create_payload(seller_id: i64) -> CreateItemRequest {
    let mut rng = rand::thread_rng();
    CreateItemRequest::new(
        seller_id,
        format!("Test Item {}", rng.gen_range(NAME_SUFFIX_RANGE)),
    )
    .with_price(rng.gen_range(PRICE_RANGE))
    .with_statistics(random_statistics())
}

/// A valid create document for `seller_id` with `field` removed
pub fn payload_without(seller_id: i64, field: &str) -> serde_json::Value {
    let mut document = create_payload(seller_id).to_json();
    if let Some(object) = document.as_object_mut() {
        object.remove(field);
    }
    document
}

/// A well-formed id that no listing has
pub fn unknown_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
