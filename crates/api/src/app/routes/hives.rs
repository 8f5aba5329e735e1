use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use katla_core::HiveId;
use katla_services::hive_management::{UpdateHiveRequest, UpdateHiveSectionRequest};

use crate::app::dto::ListQuery;
use crate::app::errors::ApiError;
use crate::app::extract::{JsonBody, PathParams, QueryParams};
use crate::app::AppState;
use crate::context::RequestUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_hives).post(create_hive))
        .route("/:id", get(get_hive).put(update_hive).delete(delete_hive))
        .route("/:id/status/:deleted", put(set_hive_status))
        .route("/:id/sections", get(list_hive_sections).post(create_hive_section))
}

pub async fn list_hives(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let items = services.hives.get_hives(query.into()).await?;
    Ok(Json(json!({ "items": items })))
}

pub async fn get_hive(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.hives.get_hive(id).await?))
}

pub async fn create_hive(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    JsonBody(body): JsonBody<UpdateHiveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let created = services.hives.create_hive(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_hive(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<UpdateHiveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.hives.update_hive(id, &body).await?))
}

pub async fn delete_hive(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    services.hives.delete_hive(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_hive_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams((id, deleted)): PathParams<(String, bool)>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.hives.set_status(id, deleted).await?))
}

pub async fn list_hive_sections(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    let items = services.sections.get_sections_of_hive(id).await?;
    Ok(Json(json!({ "items": items })))
}

pub async fn create_hive_section(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<UpdateHiveSectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveId = id.parse()?;
    let services = state.services(user)?;
    let created = services.sections.create_hive_section(id, &body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
