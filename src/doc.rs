//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every catalogue endpoint and schema. The generated
//! document is exported via `cargo run --bin openapi-dump` for external
//! tooling.

use utoipa::OpenApi;

/// OpenAPI document for the catalogue REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "HTTP CRUD interface for products and categories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
    ),
    components(schemas(
        crate::domain::Product,
        crate::domain::Category,
        crate::inbound::http::ApiError,
        crate::inbound::http::products::CreateProductRequest,
        crate::inbound::http::products::DeletedResponse,
        crate::inbound::http::categories::CreateCategoryRequest,
    )),
    tags(
        (name = "products", description = "Product CRUD operations"),
        (name = "categories", description = "Category operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/products/".to_owned()));
        assert!(paths.contains(&"/products/{id}".to_owned()));
        assert!(paths.contains(&"/categories/".to_owned()));
    }
}
