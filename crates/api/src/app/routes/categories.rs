use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use katla_core::CategoryId;
use katla_services::product_management::UpdateProductCategoryRequest;

use crate::app::dto::ListQuery;
use crate::app::errors::ApiError;
use crate::app::extract::{JsonBody, PathParams, QueryParams};
use crate::app::AppState;
use crate::context::RequestUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).put(update_category).delete(delete_category))
        .route("/:id/status/:deleted", put(set_category_status))
        .route("/:id/products", get(list_category_products))
}

pub async fn list_categories(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let items = services.categories.get_categories(query.into()).await?;
    Ok(Json(json!({ "items": items })))
}

pub async fn get_category(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.categories.get_category(id).await?))
}

pub async fn create_category(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    JsonBody(body): JsonBody<UpdateProductCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let created = services.categories.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_category(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<UpdateProductCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.categories.update_category(id, &body).await?))
}

pub async fn delete_category(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id.parse()?;
    let services = state.services(user)?;
    services.categories.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_category_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams((id, deleted)): PathParams<(String, bool)>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.categories.set_status(id, deleted).await?))
}

pub async fn list_category_products(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id.parse()?;
    let services = state.services(user)?;
    let items = services.products.get_category_products(id).await?;
    Ok(Json(json!({ "items": items })))
}
