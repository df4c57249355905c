//! Storefront service - response shaping and degradation policy

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use database::StoreError;

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{
    ContactMessage, ContactReceipt, FeaturedQuery, Product, ProductQuery, ProductsResponse,
};
use crate::repository::StorefrontRepository;

/// Service layer over the storefront repository.
///
/// Shapes responses (identifier stripping, category aggregation) and
/// applies the per-endpoint degradation policy when the store is
/// unavailable: the product listing errors, while categories and
/// featured listings degrade to empty results.
pub struct StorefrontService<R: StorefrontRepository> {
    repository: Arc<R>,
}

impl<R: StorefrontRepository> StorefrontService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products matching the query.
    ///
    /// The `categories` field reflects only the returned set, not the
    /// global category universe. Unlike `/api/categories` it keeps
    /// empty-string values: the listing mirrors whatever the returned
    /// records carry.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> StorefrontResult<ProductsResponse> {
        let records = self.repository.list_products(query).await?;

        let categories: Vec<String> = records
            .iter()
            .map(|record| record.product.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let items: Vec<Product> = records.into_iter().map(Product::from).collect();

        Ok(ProductsResponse {
            total: items.len(),
            items,
            categories,
        })
    }

    /// Distinct non-empty categories across all products, sorted
    /// ascending. Degrades to an empty list when the store is
    /// unavailable.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
        match self.repository.distinct_categories().await {
            Ok(values) => Ok(values
                .into_iter()
                .filter(|category| !category.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()),
            Err(StorefrontError::Store(StoreError::Unavailable)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Discounted products, best discount first. Degrades to an empty
    /// list when the store is unavailable.
    #[instrument(skip(self))]
    pub async fn featured_products(&self, query: FeaturedQuery) -> StorefrontResult<Vec<Product>> {
        match self.repository.featured_products(query.limit).await {
            Ok(records) => Ok(records.into_iter().map(Product::from).collect()),
            Err(StorefrontError::Store(StoreError::Unavailable)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Validate and store a contact message.
    #[instrument(skip(self, message))]
    pub async fn submit_contact(&self, message: ContactMessage) -> StorefrontResult<ContactReceipt> {
        message
            .validate()
            .map_err(|e| StorefrontError::Validation(e.to_string()))?;

        let id = self.repository.insert_contact(message).await?;
        Ok(ContactReceipt::ok(id))
    }
}

impl<R: StorefrontRepository> Clone for StorefrontService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
