//! HTTP handlers for the storefront API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StorefrontResult;
use crate::models::{
    ContactMessage, ContactReceipt, FeaturedQuery, Product, ProductQuery, ProductsResponse, User,
};
use crate::repository::StorefrontRepository;
use crate::service::StorefrontService;

/// OpenAPI documentation for the storefront API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, list_categories, featured_products, submit_contact),
    components(schemas(
        Product,
        ProductsResponse,
        ContactMessage,
        ContactReceipt,
        User,
        ErrorResponse
    )),
    tags(
        (name = "Storefront", description = "Product catalog and contact intake endpoints")
    )
)]
pub struct ApiDoc;

/// Create the storefront router with all HTTP endpoints.
///
/// Paths are relative; the application nests this router under `/api`.
pub fn router<R: StorefrontRepository + 'static>(service: StorefrontService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/categories", get(list_categories))
        .route("/featured", get(featured_products))
        .route("/contact", post(submit_contact))
        .with_state(shared_service)
}

/// List products with optional search and category filters
#[utoipa::path(
    get,
    path = "/products",
    tag = "Storefront",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products matching the query", body = ProductsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_products<R: StorefrontRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
    Query(query): Query<ProductQuery>,
) -> StorefrontResult<Json<ProductsResponse>> {
    let response = service.list_products(query).await?;
    Ok(Json(response))
}

/// List distinct product categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Storefront",
    responses(
        (status = 200, description = "Sorted distinct categories; empty when the store is unreachable", body = Vec<String>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_categories<R: StorefrontRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
) -> StorefrontResult<Json<Vec<String>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// List featured (discounted) products, best discount first
#[utoipa::path(
    get,
    path = "/featured",
    tag = "Storefront",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured products; empty when the store is unreachable", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn featured_products<R: StorefrontRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
    Query(query): Query<FeaturedQuery>,
) -> StorefrontResult<Json<Vec<Product>>> {
    let featured = service.featured_products(query).await?;
    Ok(Json(featured))
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Storefront",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message stored", body = ContactReceipt),
        (status = 400, description = "Invalid message", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn submit_contact<R: StorefrontRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
    ValidatedJson(message): ValidatedJson<ContactMessage>,
) -> StorefrontResult<Json<ContactReceipt>> {
    let receipt = service.submit_contact(message).await?;
    Ok(Json(receipt))
}
