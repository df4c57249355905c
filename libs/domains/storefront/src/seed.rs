//! Startup seeding of the product catalog.
//!
//! When the `product` collection is empty, a fixed list of five sample
//! products (one per staple category) is inserted so a fresh deployment
//! has something to show. Re-running against a non-empty collection is
//! a no-op.

use tracing::info;

use crate::error::StorefrontResult;
use crate::models::{Product, ProductRecord};
use crate::repository::StorefrontRepository;

/// The fixed sample catalog.
pub fn sample_products() -> Vec<ProductRecord> {
    let products = vec![
        Product {
            title: "Beras Premium 5kg".to_string(),
            description: Some(
                "Beras pulen kualitas premium, cocok untuk kebutuhan rumah tangga.".to_string(),
            ),
            price: 78000.0,
            category: "beras".to_string(),
            in_stock: true,
            unit: "pack".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1604908554007-27b99b2b8d11?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            discount: 10.0,
        },
        Product {
            title: "Minyak Goreng 1 Liter".to_string(),
            description: Some("Minyak goreng sawit kemasan 1L, jernih dan berkualitas.".to_string()),
            price: 17000.0,
            category: "minyak".to_string(),
            in_stock: true,
            unit: "liter".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1625944528148-8b1877fa9afd?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            discount: 5.0,
        },
        Product {
            title: "Gula Pasir 1kg".to_string(),
            description: Some("Gula pasir putih kristal berkualitas.".to_string()),
            price: 15000.0,
            category: "gula".to_string(),
            in_stock: true,
            unit: "kg".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1603833665858-e61d17a86224?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            discount: 0.0,
        },
        Product {
            title: "Telur Ayam 1 Tray (30 butir)".to_string(),
            description: Some("Telur ayam segar langsung dari peternak.".to_string()),
            price: 57000.0,
            category: "telur".to_string(),
            in_stock: true,
            unit: "tray".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1517959105821-eaf2591984bd?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            discount: 8.0,
        },
        Product {
            title: "Tepung Terigu 1kg".to_string(),
            description: Some("Tepung terigu serbaguna untuk berbagai olahan.".to_string()),
            price: 12000.0,
            category: "tepung".to_string(),
            in_stock: true,
            unit: "kg".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1519682337058-a94d519337bc?q=80&w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            discount: 0.0,
        },
    ];

    products.into_iter().map(ProductRecord::new).collect()
}

/// Insert the sample catalog if the product collection is empty.
///
/// Idempotent: a non-empty collection short-circuits without writes.
/// Errors are returned to the caller, which logs and continues; seeding
/// never aborts startup.
pub async fn seed_products_if_empty<R: StorefrontRepository>(
    repository: &R,
) -> StorefrontResult<()> {
    let count = repository.count_products().await?;
    if count > 0 {
        return Ok(());
    }

    let records = sample_products();
    let total = records.len();
    for record in records {
        repository.insert_product(record).await?;
    }

    info!("Seeded {} sample products", total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockStorefrontRepository;
    use validator::Validate;

    #[test]
    fn test_sample_products_satisfy_invariants() {
        let records = sample_products();
        assert_eq!(records.len(), 5);

        for record in &records {
            assert!(record.id.is_none());
            assert!(record.product.validate().is_ok());
            assert!(record.product.price >= 0.0);
            assert!(record.product.discount >= 0.0 && record.product.discount <= 100.0);
        }
    }

    #[test]
    fn test_sample_products_cover_staple_categories() {
        let categories: Vec<String> = sample_products()
            .into_iter()
            .map(|record| record.product.category)
            .collect();
        assert_eq!(categories, vec!["beras", "minyak", "gula", "telur", "tepung"]);
    }

    #[tokio::test]
    async fn test_seeding_skips_non_empty_collection() {
        let mut mock = MockStorefrontRepository::new();
        mock.expect_count_products().returning(|| Ok(5));
        mock.expect_insert_product().times(0);

        seed_products_if_empty(&mock).await.unwrap();
    }

    #[tokio::test]
    async fn test_seeding_inserts_into_empty_collection() {
        let mut mock = MockStorefrontRepository::new();
        mock.expect_count_products().returning(|| Ok(0));
        mock.expect_insert_product()
            .times(5)
            .returning(|_| Ok("65f0c30a9d1e4a7b2c3d4e5f".to_string()));

        seed_products_if_empty(&mock).await.unwrap();
    }

    #[tokio::test]
    async fn test_seeding_surfaces_count_errors_to_caller() {
        use database::StoreError;

        let mut mock = MockStorefrontRepository::new();
        mock.expect_count_products()
            .returning(|| Err(crate::error::StorefrontError::Store(StoreError::Unavailable)));
        mock.expect_insert_product().times(0);

        assert!(seed_products_if_empty(&mock).await.is_err());
    }
}
