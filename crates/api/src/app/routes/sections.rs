use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use katla_core::HiveSectionId;
use katla_services::hive_management::UpdateHiveSectionRequest;

use crate::app::dto::ListQuery;
use crate::app::errors::ApiError;
use crate::app::extract::{JsonBody, PathParams, QueryParams};
use crate::app::AppState;
use crate::context::RequestUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_sections))
        .route("/:id", get(get_section).put(update_section).delete(delete_section))
        .route("/:id/status/:deleted", put(set_section_status))
}

pub async fn list_sections(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    QueryParams(query): QueryParams<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.services(user)?;
    let items = services.sections.get_hive_sections(query.into()).await?;
    Ok(Json(json!({ "items": items })))
}

pub async fn get_section(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveSectionId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.sections.get_hive_section(id).await?))
}

pub async fn update_section(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<UpdateHiveSectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveSectionId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.sections.update_hive_section(id, &body).await?))
}

pub async fn delete_section(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveSectionId = id.parse()?;
    let services = state.services(user)?;
    services.sections.delete_hive_section(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_section_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<RequestUser>,
    PathParams((id, deleted)): PathParams<(String, bool)>,
) -> Result<impl IntoResponse, ApiError> {
    let id: HiveSectionId = id.parse()?;
    let services = state.services(user)?;
    Ok(Json(services.sections.set_status(id, deleted).await?))
}
