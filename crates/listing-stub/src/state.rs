//! Application state for the listing stub

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

/// Engagement counters as stored and served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStatistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

/// A validated create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: StoredStatistics,
}

/// A listing held by the stub
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub id: Uuid,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub created_at: String,
    pub statistics: StoredStatistics,
    /// Reads ignore the item before this instant
    #[serde(skip)]
    visible_at: Instant,
}

impl StoredItem {
    fn is_visible(&self, now: Instant) -> bool {
        now >= self.visible_at
    }
}

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    /// Items in creation order
    items: Arc<RwLock<Vec<StoredItem>>>,
    /// Delay between a create and the item showing up in reads
    visibility_delay: Duration,
}

impl AppState {
    /// Create an empty store where writes are readable immediately
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that hides new items from reads for `delay`
    pub fn with_visibility_delay(delay: Duration) -> Self {
        Self {
            items: Arc::default(),
            visibility_delay: delay,
        }
    }

    pub fn visibility_delay(&self) -> Duration {
        self.visibility_delay
    }

    /// Store a new item, assigning its id and creation time
    pub fn insert(&self, new_item: NewItem) -> StoredItem {
        let item = StoredItem {
            id: Uuid::new_v4(),
            seller_id: new_item.seller_id,
            name: new_item.name,
            price: new_item.price,
            created_at: chrono::Utc::now().to_rfc3339(),
            statistics: new_item.statistics,
            visible_at: Instant::now() + self.visibility_delay,
        };

        self.items.write().push(item.clone());
        item
    }

    /// Look up a visible item by id
    pub fn get(&self, id: &Uuid) -> Option<StoredItem> {
        let now = Instant::now();
        self.items
            .read()
            .iter()
            .find(|item| item.id == *id && item.is_visible(now))
            .cloned()
    }

    /// All visible items of a seller, oldest first
    pub fn by_seller(&self, seller_id: i64) -> Vec<StoredItem> {
        let now = Instant::now();
        self.items
            .read()
            .iter()
            .filter(|item| item.seller_id == seller_id && item.is_visible(now))
            .cloned()
            .collect()
    }

    /// Number of stored items, visible or not
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
