//! Category API handlers.
//!
//! ```text
//! GET  /categories/  List categories
//! POST /categories/  Create a category
//! ```

use actix_web::{HttpRequest, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::validate_category;
use crate::domain::{Category, FieldErrors};
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Create payload for a category.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    fn validate(&self) -> FieldErrors {
        validate_category(&self.name)
    }
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/categories/",
    responses(
        (status = 200, description = "All categories", body = [Category]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories/")]
pub async fn list_categories(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<Vec<Category>>> {
    let categories = state
        .categories
        .list()
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(categories))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/categories/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created category", body = Category),
        (status = 400, description = "Malformed JSON body", body = ApiError),
        (status = 409, description = "Name taken", body = ApiError),
        (status = 422, description = "Validation failure", body = ApiError)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories/")]
pub async fn create_category(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<CreateCategoryRequest>,
) -> ApiResult<web::Json<Category>> {
    let payload = payload.into_inner();
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let category = Category::new(payload.name);
    state
        .categories
        .create(&category)
        .await
        .map_err(|err| map_repository_error(err, request.path()))?;
    Ok(web::Json(category))
}
