use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use katla_core::ProductId;
use katla_services::product_management::UpdateProductRequest;

use crate::app::dto::ListQuery;
use crate::app::errors::ApiError;
use crate::app::extract::{JsonBody, PathParams, QueryParams};
use crate::app::AppState;
use crate::context::RequestUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
        .route("/:id/status/:deleted", put(set_product_status))
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let items = services.products.get_products(query.into()).await?;
    Ok(Json(json!({ "items": items })))
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.products.get_product(id).await?))
}

pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    JsonBody(body): JsonBody<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let created = services.products.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.products.update_product(id, &body).await?))
}

pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = id.parse()?;
    let services = state.services(user)?;
    services.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_product_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams((id, deleted)): PathParams<(String, bool)>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.products.set_status(id, deleted).await?))
}
