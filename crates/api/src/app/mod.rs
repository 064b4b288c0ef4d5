//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the product service and its error type
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request payloads and payload inspection helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use estoque_infra::{InMemoryProductRepository, PostgresProductRepository, ProductRepository};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Repository selection follows `DATABASE_URL`: when set and reachable the
/// Postgres store is used, otherwise the in-memory store.
pub async fn build_app() -> Router {
    app_with_repository(select_repository().await)
}

/// Router over an explicit repository. Used by tests that want a scoped
/// in-memory store.
pub fn app_with_repository(repository: Arc<dyn ProductRepository>) -> Router {
    let service = Arc::new(services::ProductService::new(repository));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/produtos", routes::produtos::router())
        .layer(Extension(service))
}

async fn select_repository() -> Arc<dyn ProductRepository> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => match sqlx::PgPool::connect(&url).await {
            Ok(pool) => Arc::new(PostgresProductRepository::new(pool)),
            Err(e) => {
                tracing::warn!(
                    "failed to connect to DATABASE_URL ({e}); using in-memory product store"
                );
                Arc::new(InMemoryProductRepository::new())
            }
        },
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory product store");
            Arc::new(InMemoryProductRepository::new())
        }
    }
}
