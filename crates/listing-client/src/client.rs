//! Listing API HTTP client implementation

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ListingClientError, Result};
use crate::schema;
use crate::types::*;

/// Hosted test instance of the listing API
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com/api/1";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Encode an identifier so it stays a single path segment.
///
/// Empty ids and dot segments are rejected: URL resolution would collapse
/// them onto a different endpoint, percent-encoded or not.
fn encode_path_segment(id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ListingClientError::InvalidPathSegment(id.to_string()));
    }
    Ok(id
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23"))
}

/// Listing REST API client
///
/// Every operation returns the raw [`ApiResponse`]; a non-2xx status is not an
/// error here; callers decide what status the contract requires. Only
/// transport failures come back as `Err`.
#[derive(Debug, Clone)]
pub struct ListingClient {
    client: Client,
    base_url: Url,
}

impl ListingClient {
    /// Create a new listing client
    ///
    /// # Arguments
    /// * `base_url` - Base URL including any API prefix (e.g., "http://localhost:8080/api/1")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new listing client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ListingClientError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        // Endpoint paths are joined relative to the prefix
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Item Operations
    // =========================================================================

    /// Create a listing
    ///
    /// `POST {base}/item`
    #[instrument(skip(self, request), fields(seller_id = request.seller_id))]
    pub async fn create_item(&self, request: &CreateItemRequest) -> Result<ApiResponse> {
        let url = self.endpoint("item")?;
        self.execute(self.client.post(url).json(request)).await
    }

    /// Create a listing from an arbitrary JSON document
    ///
    /// Used to send payloads that the typed request cannot express, such as
    /// ones with a required field removed.
    #[instrument(skip(self, body))]
    pub async fn create_item_raw(&self, body: &serde_json::Value) -> Result<ApiResponse> {
        let url = self.endpoint("item")?;
        self.execute(self.client.post(url).json(body)).await
    }

    /// Get a listing by identifier
    ///
    /// `GET {base}/item/{id}`; the contract answers with a one-element array.
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("item/{}", encode_path_segment(id)?))?;
        self.execute(self.client.get(url)).await
    }

    /// List all listings of a seller
    ///
    /// `GET {base}/{seller_id}/item`
    #[instrument(skip(self))]
    pub async fn get_items_by_seller(&self, seller_id: i64) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("{}/item", seller_id))?;
        self.execute(self.client.get(url)).await
    }

    // =========================================================================
    // Statistics Operations
    // =========================================================================

    /// Get engagement statistics of a listing
    ///
    /// `GET {base}/statistic/{id}`
    #[instrument(skip(self))]
    pub async fn get_stats(&self, id: &str) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("statistic/{}", encode_path_segment(id)?))?;
        self.execute(self.client.get(url)).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send the request and buffer the whole response
    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "Response received");

        Ok(ApiResponse::new(status, body))
    }
}

/// Raw response of a listing API call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Fail with [`ListingClientError::UnexpectedStatus`] unless the status matches
    pub fn expect_status(&self, expected: StatusCode) -> Result<&Self> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ListingClientError::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.body_text(),
            })
        }
    }

    /// Decode the body as a single item
    pub fn item(&self) -> Result<Item> {
        schema::validate_item(&self.body)
    }

    /// Decode the body as an array of items
    pub fn items(&self) -> Result<Vec<Item>> {
        schema::validate_item_array(&self.body)
    }

    /// Decode the body as an array of statistics
    pub fn statistics(&self) -> Result<Vec<Statistics>> {
        schema::validate_statistics_array(&self.body)
    }

    /// Decode the body into any type; failures are reported against `schema`
    pub fn json<T: DeserializeOwned>(&self, schema: &'static str) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ListingClientError::schema_violation(schema, e.to_string()))
    }

    /// Message from an error body, if the service sent one
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorResponse>(&self.body)
            .ok()
            .map(|err| err.result.message)
    }
}
