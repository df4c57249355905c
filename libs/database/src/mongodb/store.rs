//! Generic document-store client.
//!
//! [`DocumentStore`] wraps a MongoDB database handle behind a small,
//! collection-oriented API (`create_document`, `get_documents`, distinct
//! and count queries). The connection is established once at process
//! start; when it cannot be established the store is constructed in an
//! explicit unavailable state and every operation returns
//! [`StoreError::Unavailable`] instead of panicking or retrying.

use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document},
};
use tracing::instrument;

/// Errors surfaced by [`DocumentStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection was established at process start.
    #[error("Database not available")]
    Unavailable,

    /// A document insert failed.
    #[error("Write failed: {0}")]
    Write(String),

    /// A read query failed.
    #[error("Query failed: {0}")]
    Query(String),
}

/// A thin connector to the document database.
///
/// Cloning is cheap: `mongodb::Database` is an Arc'd handle over the
/// client's connection pool, and the pool is safe to share across
/// concurrent request handlers without additional locking.
#[derive(Clone)]
pub struct DocumentStore {
    database: Option<Database>,
}

impl DocumentStore {
    /// A store backed by a live database handle.
    pub fn connected(database: Database) -> Self {
        Self {
            database: Some(database),
        }
    }

    /// A store with no connection; every operation returns
    /// [`StoreError::Unavailable`]. Callers that degrade gracefully
    /// check [`DocumentStore::is_available`] or match on the error.
    pub fn unavailable() -> Self {
        Self { database: None }
    }

    pub fn is_available(&self) -> bool {
        self.database.is_some()
    }

    /// Name of the underlying database, if connected.
    pub fn name(&self) -> Option<&str> {
        self.database.as_ref().map(|db| db.name())
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.database.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Direct access to a collection for distinct-value and
    /// sorted-cursor queries not covered by the generic operations.
    pub fn collection(&self, name: &str) -> Result<Collection<Document>, StoreError> {
        Ok(self.database()?.collection::<Document>(name))
    }

    /// Insert one document and return the store-assigned identifier as
    /// a string.
    #[instrument(skip(self, document))]
    pub async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StoreError> {
        let result = self
            .collection(collection)?
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    /// Fetch up to `limit` documents matching `filter`, in store-native
    /// order. Side-effect-free.
    #[instrument(skip(self, filter))]
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)?
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Count documents matching `filter`.
    #[instrument(skip(self, filter))]
    pub async fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<u64, StoreError> {
        self.collection(collection)?
            .count_documents(filter)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Distinct values of `field` across documents matching `filter`.
    #[instrument(skip(self, filter))]
    pub async fn distinct(
        &self,
        collection: &str,
        field: &str,
        filter: Document,
    ) -> Result<Vec<Bson>, StoreError> {
        self.collection(collection)?
            .distinct(field, filter)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Names of the collections in the database.
    pub async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.database()?
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_unavailable_store_rejects_writes() {
        let store = DocumentStore::unavailable();
        assert!(!store.is_available());
        assert!(store.name().is_none());

        let result = store
            .create_document("product", doc! { "title": "Gula Pasir 1kg" })
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable)));
    }

    #[tokio::test]
    async fn test_unavailable_store_rejects_reads() {
        let store = DocumentStore::unavailable();

        let result = store.get_documents("product", doc! {}, 100).await;
        assert!(matches!(result, Err(StoreError::Unavailable)));

        let result = store.distinct("product", "category", doc! {}).await;
        assert!(matches!(result, Err(StoreError::Unavailable)));

        let result = store.list_collection_names().await;
        assert!(matches!(result, Err(StoreError::Unavailable)));
    }

    #[test]
    fn test_unavailable_error_message() {
        // The message is surfaced verbatim in 500 responses.
        assert_eq!(StoreError::Unavailable.to_string(), "Database not available");
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_and_get_documents() {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let store = DocumentStore::connected(client.database("grosir_test"));

        let id = store
            .create_document("product", doc! { "title": "Telur Ayam", "category": "telur" })
            .await
            .unwrap();
        assert!(!id.is_empty());

        let docs = store
            .get_documents("product", doc! { "category": "telur" }, 10)
            .await
            .unwrap();
        assert!(!docs.is_empty());
    }
}
