use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Grosir API",
        version = "0.1.0",
        description = "Product catalog and contact intake for the grosir storefront"
    ),
    paths(
        crate::api::root,
        crate::api::hello,
        crate::api::diagnostics::test_database,
    ),
    nest(
        (path = "/api", api = domain_storefront::ApiDoc)
    ),
    tags(
        (name = "Meta", description = "Liveness and diagnostics endpoints")
    )
)]
pub struct ApiDoc;
