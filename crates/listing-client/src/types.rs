//! Request and response types for the listing API

use serde::{Deserialize, Serialize};

use crate::error::{ListingClientError, Result};

// =============================================================================
// Listing Types
// =============================================================================

/// Engagement counters attached to a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

impl Statistics {
    pub fn new(likes: i64, view_count: i64, contacts: i64) -> Self {
        Self {
            likes,
            view_count,
            contacts,
        }
    }
}

/// A listing as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Service-assigned identifier
    pub id: String,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    /// Creation timestamp, format chosen by the service
    pub created_at: String,
    pub statistics: Statistics,
}

impl Item {
    /// Check that the service echoed back every field of the create request.
    ///
    /// Fails on the first differing field.
    pub fn verify_against(&self, request: &CreateItemRequest) -> Result<()> {
        if self.seller_id != request.seller_id {
            return Err(ListingClientError::value_mismatch(
                "sellerId",
                request.seller_id,
                self.seller_id,
            ));
        }
        if self.name != request.name {
            return Err(ListingClientError::value_mismatch(
                "name",
                &request.name,
                &self.name,
            ));
        }
        if self.price != request.price {
            return Err(ListingClientError::value_mismatch(
                "price",
                request.price,
                self.price,
            ));
        }
        if self.statistics != request.statistics {
            return Err(ListingClientError::value_mismatch(
                "statistics",
                format!("{:?}", request.statistics),
                format!("{:?}", self.statistics),
            ));
        }
        Ok(())
    }

    /// Check that a read returned the same listing as `expected`, including
    /// the service-assigned `id` and `createdAt`.
    ///
    /// Fails on the first differing field.
    pub fn verify_same(&self, expected: &Item) -> Result<()> {
        if self.id != expected.id {
            return Err(ListingClientError::value_mismatch(
                "id",
                &expected.id,
                &self.id,
            ));
        }
        if self.created_at != expected.created_at {
            return Err(ListingClientError::value_mismatch(
                "createdAt",
                &expected.created_at,
                &self.created_at,
            ));
        }
        self.verify_against(&CreateItemRequest {
            seller_id: expected.seller_id,
            name: expected.name.clone(),
            price: expected.price,
            statistics: expected.statistics,
        })
    }
}

// =============================================================================
// Create Request
// =============================================================================

/// Body of `POST /item`
///
/// The service expects `sellerID` here while it answers with `sellerId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

impl CreateItemRequest {
    /// Start a request for the given seller with zeroed price and statistics
    pub fn new(seller_id: i64, name: impl Into<String>) -> Self {
        Self {
            seller_id,
            name: name.into(),
            price: 0,
            statistics: Statistics::new(0, 0, 0),
        }
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// JSON document for this request, for callers that need to tamper with it
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sellerID": self.seller_id,
            "name": self.name,
            "price": self.price,
            "statistics": {
                "likes": self.statistics.likes,
                "viewCount": self.statistics.view_count,
                "contacts": self.statistics.contacts,
            },
        })
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body returned by the service on 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub result: ErrorResult,
    /// Status code echoed as a string
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResult {
    pub message: String,
    #[serde(default)]
    pub messages: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_request() -> CreateItemRequest {
        CreateItemRequest::new(123456, "Test Item 42")
            .with_price(2500)
            .with_statistics(Statistics::new(5, 10, 1))
    }

    fn sample_item() -> Item {
        Item {
            id: "0b3e6a4e-4c52-4f3b-9a3f-6f1d2b0c8e11".to_string(),
            seller_id: 123456,
            name: "Test Item 42".to_string(),
            price: 2500,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            statistics: Statistics::new(5, 10, 1),
        }
    }

    #[test]
    fn test_create_request_uses_upper_case_seller_id() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["sellerID"], 123456);
        assert!(json.get("sellerId").is_none());
        assert_eq!(json["statistics"]["viewCount"], 10);
    }

    #[test]
    fn test_to_json_matches_serde_encoding() {
        let request = sample_request();
        assert_eq!(request.to_json(), serde_json::to_value(&request).unwrap());
    }

    #[test]
    fn test_verify_against_accepts_echo() {
        assert!(sample_item().verify_against(&sample_request()).is_ok());
    }

    #[test]
    fn test_verify_against_reports_seller_mismatch() {
        let mut item = sample_item();
        item.seller_id = 654321;

        let err = sample_item_err(&item);
        match err {
            ListingClientError::ValueMismatch {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "sellerId");
                assert_eq!(expected, "123456");
                assert_eq!(actual, "654321");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_verify_against_reports_statistics_mismatch() {
        let mut item = sample_item();
        item.statistics.contacts = 2;

        let err = sample_item_err(&item);
        assert!(matches!(
            err,
            ListingClientError::ValueMismatch {
                field: "statistics",
                ..
            }
        ));
    }

    #[test]
    fn test_verify_same_accepts_identical_item() {
        assert!(sample_item().verify_same(&sample_item()).is_ok());
    }

    #[test]
    fn test_verify_same_reports_first_differing_field() {
        let mut item = sample_item();
        item.created_at = "2024-01-02T00:00:00Z".to_string();
        item.price = 2600;

        match item.verify_same(&sample_item()).unwrap_err() {
            ListingClientError::ValueMismatch {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "createdAt");
                assert_eq!(expected, "2024-01-01T00:00:00Z");
                assert_eq!(actual, "2024-01-02T00:00:00Z");
            }
            other => panic!("unexpected error: {other}"),
        }

        item.created_at = sample_item().created_at;
        assert!(matches!(
            item.verify_same(&sample_item()).unwrap_err(),
            ListingClientError::ValueMismatch { field: "price", .. }
        ));
    }

    fn sample_item_err(item: &Item) -> ListingClientError {
        item.verify_against(&sample_request()).unwrap_err()
    }
}
