//! MongoDB implementation of StorefrontRepository

use async_trait::async_trait;
use database::{DocumentStore, StoreError};
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc};
use tracing::instrument;

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{
    CONTACT_COLLECTION, ContactMessage, PRODUCT_COLLECTION, ProductQuery, ProductRecord,
};
use crate::repository::StorefrontRepository;

/// Minimum discount for a product to count as featured.
pub const FEATURED_MIN_DISCOUNT: f64 = 5.0;

/// MongoDB implementation of the StorefrontRepository, built on the
/// generic [`DocumentStore`] client.
#[derive(Clone)]
pub struct MongoStorefrontRepository {
    store: DocumentStore,
}

impl MongoStorefrontRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Build a MongoDB filter document from a ProductQuery.
    ///
    /// `category` is an exact match; `q` becomes a case-insensitive
    /// substring match against title OR description. Both are ANDed
    /// when present. Empty strings count as absent, so a form that
    /// submits `?category=` still gets the whole catalog.
    fn build_filter(query: &ProductQuery) -> Document {
        let mut filter = doc! {};

        if let Some(category) = non_empty(query.category.as_deref()) {
            filter.insert("category", category);
        }

        if let Some(q) = non_empty(query.q.as_deref()) {
            filter.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": q, "$options": "i" } },
                    doc! { "description": { "$regex": q, "$options": "i" } },
                ],
            );
        }

        filter
    }

    /// Filter and sort documents for the featured listing: discounted
    /// products first by deepest discount.
    fn featured_filter() -> Document {
        doc! { "discount": { "$gte": FEATURED_MIN_DISCOUNT } }
    }

    fn featured_sort() -> Document {
        doc! { "discount": -1 }
    }

    fn decode_record(document: Document) -> StorefrontResult<ProductRecord> {
        bson::from_document(document).map_err(|e| StorefrontError::Decode(e.to_string()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[async_trait]
impl StorefrontRepository for MongoStorefrontRepository {
    #[instrument(skip(self))]
    async fn list_products(&self, query: ProductQuery) -> StorefrontResult<Vec<ProductRecord>> {
        let filter = Self::build_filter(&query);

        let documents = self
            .store
            .get_documents(PRODUCT_COLLECTION, filter, query.limit)
            .await?;

        documents.into_iter().map(Self::decode_record).collect()
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> StorefrontResult<Vec<String>> {
        let values = self
            .store
            .distinct(PRODUCT_COLLECTION, "category", doc! {})
            .await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn featured_products(&self, limit: i64) -> StorefrontResult<Vec<ProductRecord>> {
        let cursor = self
            .store
            .collection(PRODUCT_COLLECTION)?
            .find(Self::featured_filter())
            .sort(Self::featured_sort())
            .limit(limit)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        documents.into_iter().map(Self::decode_record).collect()
    }

    #[instrument(skip(self))]
    async fn count_products(&self) -> StorefrontResult<u64> {
        Ok(self
            .store
            .count_documents(PRODUCT_COLLECTION, doc! {})
            .await?)
    }

    #[instrument(skip(self, record), fields(title = %record.product.title))]
    async fn insert_product(&self, record: ProductRecord) -> StorefrontResult<String> {
        let document =
            bson::to_document(&record).map_err(|e| StorefrontError::Encode(e.to_string()))?;

        let id = self
            .store
            .create_document(PRODUCT_COLLECTION, document)
            .await?;

        tracing::info!(product_id = %id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self, message))]
    async fn insert_contact(&self, message: ContactMessage) -> StorefrontResult<String> {
        let document =
            bson::to_document(&message).map_err(|e| StorefrontError::Encode(e.to_string()))?;

        let id = self
            .store
            .create_document(CONTACT_COLLECTION, document)
            .await?;

        tracing::info!(message_id = %id, "Contact message stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let query = ProductQuery::default();
        let filter = MongoStorefrontRepository::build_filter(&query);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_filter_with_category() {
        let query = ProductQuery {
            category: Some("minyak".to_string()),
            ..Default::default()
        };
        let filter = MongoStorefrontRepository::build_filter(&query);
        assert_eq!(filter.get_str("category").unwrap(), "minyak");
        assert!(!filter.contains_key("$or"));
    }

    #[test]
    fn test_build_filter_with_search() {
        let query = ProductQuery {
            q: Some("beras".to_string()),
            ..Default::default()
        };
        let filter = MongoStorefrontRepository::build_filter(&query);

        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);

        let title_clause = or[0].as_document().unwrap();
        let regex = title_clause.get_document("title").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "beras");
        assert_eq!(regex.get_str("$options").unwrap(), "i");

        let description_clause = or[1].as_document().unwrap();
        assert!(description_clause.contains_key("description"));
    }

    #[test]
    fn test_build_filter_ands_category_and_search() {
        let query = ProductQuery {
            q: Some("premium".to_string()),
            category: Some("beras".to_string()),
            ..Default::default()
        };
        let filter = MongoStorefrontRepository::build_filter(&query);

        // Top-level keys of one document are implicitly ANDed.
        assert_eq!(filter.get_str("category").unwrap(), "beras");
        assert!(filter.contains_key("$or"));
    }

    #[test]
    fn test_build_filter_ignores_empty_params() {
        // A form submitting `?category=&q=` must get the whole catalog,
        // not an exact match on the empty string.
        let query = ProductQuery {
            q: Some(String::new()),
            category: Some(String::new()),
            ..Default::default()
        };
        let filter = MongoStorefrontRepository::build_filter(&query);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_featured_filter_and_sort() {
        let filter = MongoStorefrontRepository::featured_filter();
        let discount = filter.get_document("discount").unwrap();
        assert_eq!(
            discount.get_f64("$gte").unwrap(),
            FEATURED_MIN_DISCOUNT
        );

        let sort = MongoStorefrontRepository::featured_sort();
        assert_eq!(sort.get_i32("discount").unwrap(), -1);
    }

    #[test]
    fn test_decode_record_rejects_malformed_document() {
        let document = doc! { "title": "incomplete" };
        let result = MongoStorefrontRepository::decode_record(document);
        assert!(matches!(result, Err(StorefrontError::Decode(_))));
    }
}
