//! Product API handlers.
//!
//! ```text
//! GET    /products/      List products
//! GET    /products/{id}  Fetch one product
//! POST   /products/      Create a product
//! PUT    /products/{id}  Replace a product's mutable fields
//! DELETE /products/{id}  Delete a product
//! ```

use actix_web::{HttpRequest, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::ProductUpdate;
use crate::domain::validation::validate_product;
use crate::domain::{FieldErrors, Product};
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Create or replace payload for a product.
///
/// Absent fields fall back to their zero values and are then rejected by
/// validation, so `{}` yields a field map rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: i32,
    #[serde(rename = "categoryID")]
    pub category_id: Uuid,
}

impl CreateProductRequest {
    fn validate(&self) -> FieldErrors {
        validate_product(&self.name, &self.description, self.price)
    }
}

/// Acknowledgement returned by the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Identifier the delete was issued for.
    pub deleted: Uuid,
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products/")]
pub async fn list_products(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<Vec<Product>>> {
    let products = state
        .products
        .list()
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(products))
}

/// Fetch one product by identifier.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Malformed identifier", body = ApiError),
        (status = 404, description = "No such product", body = ApiError)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    request: HttpRequest,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<Product>> {
    let product = state
        .products
        .get(id.into_inner())
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products/",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 400, description = "Malformed JSON body", body = ApiError),
        (status = 409, description = "Name taken or unknown category", body = ApiError),
        (status = 422, description = "Validation failure", body = ApiError)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products/")]
pub async fn create_product(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<CreateProductRequest>,
) -> ApiResult<web::Json<Product>> {
    let payload = payload.into_inner();
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let product = Product::new(
        payload.name,
        payload.description,
        payload.price,
        payload.category_id,
    );
    state
        .products
        .create(&product)
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(product))
}

/// Replace all mutable fields of a product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product identifier")),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Malformed body or identifier", body = ApiError),
        (status = 404, description = "No such product", body = ApiError),
        (status = 409, description = "Name taken or unknown category", body = ApiError),
        (status = 422, description = "Validation failure", body = ApiError)
    ),
    tags = ["products"],
    operation_id = "replaceProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    request: HttpRequest,
    id: web::Path<Uuid>,
    payload: web::Json<CreateProductRequest>,
) -> ApiResult<web::Json<Product>> {
    let payload = payload.into_inner();
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let update = ProductUpdate {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        category_id: payload.category_id,
    };
    let product = state
        .products
        .update(id.into_inner(), &update)
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(product))
}

/// Delete a product by identifier.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Deletion acknowledged", body = DeletedResponse),
        (status = 400, description = "Malformed identifier", body = ApiError)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    request: HttpRequest,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = id.into_inner();
    state
        .products
        .delete(id)
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(DeletedResponse { deleted: id }))
}
