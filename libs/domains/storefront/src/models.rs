use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection names, one per record shape.
pub const PRODUCT_COLLECTION: &str = "product";
pub const CONTACT_COLLECTION: &str = "contactmessage";
pub const USER_COLLECTION: &str = "user";

/// Catalog item as exposed by the public API.
///
/// Identity is a store-assigned ObjectId carried only by
/// [`ProductRecord`]; public responses never contain an identifier
/// field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Price in IDR
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Free-form category tag, e.g., beras, minyak, gula, telur
    pub category: String,
    /// Whether the product is in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Unit of measurement, e.g., kg, liter, pack, tray
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Image URL for the product
    #[serde(default)]
    pub image_url: Option<String>,
    /// Discount percentage (0-100)
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount: f64,
}

fn default_in_stock() -> bool {
    true
}

fn default_unit() -> String {
    "kg".to_string()
}

/// Product as stored in the `product` collection.
///
/// Identical to [`Product`] plus the private `_id`. Conversion to the
/// public shape drops the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Store-assigned identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub product: Product,
}

impl ProductRecord {
    pub fn new(product: Product) -> Self {
        Self { id: None, product }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        record.product
    }
}

/// Contact message submitted from the website form. Write-only sink:
/// nothing in this service reads it back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
}

/// User record shape for the `user` collection.
///
/// Declared as a store shape only; no endpoint in this service
/// exercises it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<u8>,
    /// Whether user is active
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Case-insensitive substring match against title or description
    pub q: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_product_limit")]
    pub limit: i64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            limit: default_product_limit(),
        }
    }
}

fn default_product_limit() -> i64 {
    100
}

/// Query parameters for the featured listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FeaturedQuery {
    /// Maximum number of results
    #[serde(default = "default_featured_limit")]
    pub limit: i64,
}

impl Default for FeaturedQuery {
    fn default() -> Self {
        Self {
            limit: default_featured_limit(),
        }
    }
}

fn default_featured_limit() -> i64 {
    6
}

/// Response shape for the product listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsResponse {
    pub items: Vec<Product>,
    pub total: usize,
    /// Distinct categories of the returned set (not the global
    /// category universe), sorted ascending
    pub categories: Vec<String>,
}

/// Receipt returned after a contact message is stored
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub status: String,
    /// Store-assigned identifier of the inserted message
    pub id: String,
}

impl ContactReceipt {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_product_defaults_on_decode() {
        let product: Product = serde_json::from_str(
            r#"{"title":"Gula Pasir 1kg","price":15000.0,"category":"gula"}"#,
        )
        .unwrap();
        assert!(product.in_stock);
        assert_eq!(product.unit, "kg");
        assert_eq!(product.discount, 0.0);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_product_record_hides_id_in_public_shape() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "title": "Beras Premium 5kg",
            "price": 78000.0,
            "category": "beras",
        };
        let record: ProductRecord = bson::from_document(doc).unwrap();
        assert!(record.id.is_some());

        let public = Product::from(record);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_new_record_omits_id_when_serialized() {
        let record = ProductRecord::new(Product {
            title: "Telur Ayam".to_string(),
            description: None,
            price: 57000.0,
            category: "telur".to_string(),
            in_stock: true,
            unit: "tray".to_string(),
            image_url: None,
            discount: 8.0,
        });
        let doc = bson::to_document(&record).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("category").unwrap(), "telur");
    }

    #[test]
    fn test_contact_message_rejects_empty_message() {
        let msg = ContactMessage {
            name: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            phone: None,
            message: String::new(),
        };
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_product_validation_bounds() {
        let mut product = Product {
            title: "Minyak Goreng".to_string(),
            description: None,
            price: 17000.0,
            category: "minyak".to_string(),
            in_stock: true,
            unit: "liter".to_string(),
            image_url: None,
            discount: 5.0,
        };
        assert!(product.validate().is_ok());

        product.discount = 101.0;
        assert!(product.validate().is_err());

        product.discount = 5.0;
        product.price = -1.0;
        assert!(product.validate().is_err());
    }
}
