use axum::Router;

pub mod categories;
pub mod hives;
pub mod products;
pub mod sections;
pub mod system;

/// Router for all `/api` endpoints (request context required).
pub fn router() -> Router {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/hives", hives::router())
        .nest("/sections", sections::router())
}
