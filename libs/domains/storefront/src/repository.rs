use async_trait::async_trait;

use crate::error::StorefrontResult;
use crate::models::{ContactMessage, ProductQuery, ProductRecord};

/// Repository trait for storefront persistence
///
/// Defines the data access interface for the catalog and the contact
/// sink. The production implementation targets MongoDB via the generic
/// document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorefrontRepository: Send + Sync {
    /// List products matching the query, up to its limit, in
    /// store-native order
    async fn list_products(&self, query: ProductQuery) -> StorefrontResult<Vec<ProductRecord>>;

    /// Distinct raw category values across all products
    async fn distinct_categories(&self) -> StorefrontResult<Vec<String>>;

    /// Products with a featured-level discount, sorted by discount
    /// descending, capped at `limit`
    async fn featured_products(&self, limit: i64) -> StorefrontResult<Vec<ProductRecord>>;

    /// Count all products
    async fn count_products(&self) -> StorefrontResult<u64>;

    /// Insert one product record, returning the store-assigned id
    async fn insert_product(&self, record: ProductRecord) -> StorefrontResult<String>;

    /// Insert one contact message, returning the store-assigned id
    async fn insert_contact(&self, message: ContactMessage) -> StorefrontResult<String>;
}
