//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query-string DTOs
//! - `errors.rs`: consistent error responses
//! - `extract.rs`: extractors with JSON rejections

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use chrono::Utc;
use tower::ServiceBuilder;

use katla_core::UserId;
use katla_infra::{seed, InMemoryProductCatalogueContext, InMemoryProductStoreHiveContext};
use katla_services::{
    ServiceResult, Services, ServicesBuilder, SharedCatalogueContext, SharedHiveContext,
};

use crate::config::ApiConfig;
use crate::context::RequestUser;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Process-wide state: the data contexts every request's services run against.
pub struct AppState {
    catalogue: SharedCatalogueContext,
    hives: SharedHiveContext,
}

impl AppState {
    pub fn new(catalogue: SharedCatalogueContext, hives: SharedHiveContext) -> Self {
        Self { catalogue, hives }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductCatalogueContext::new()),
            Arc::new(InMemoryProductStoreHiveContext::new()),
        )
    }

    /// Services acting on behalf of `user`.
    pub fn services(&self, user: RequestUser) -> ServiceResult<Services> {
        ServicesBuilder::new()
            .catalogue(self.catalogue.clone())
            .hives(self.hives.clone())
            .user(Arc::new(user))
            .build()
    }

    pub async fn seed_demo(&self, user: UserId) -> anyhow::Result<()> {
        seed::seed_demo(self.catalogue.as_ref(), self.hives.as_ref(), user, Utc::now()).await?;
        Ok(())
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let state = Arc::new(AppState::in_memory());
    if config.seed_demo {
        state.seed_demo(config.default_user).await?;
    }
    Ok(router_with_state(state, config.default_user))
}

pub fn router_with_state(state: Arc<AppState>, default_user: UserId) -> Router {
    let user_state = middleware::UserState { default_user };

    let api = routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(
                user_state,
                middleware::request_context_middleware,
            ))
            .layer(Extension(state)),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
}
