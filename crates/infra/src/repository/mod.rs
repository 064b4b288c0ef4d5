//! Product persistence boundary.
//!
//! Defines the repository contract the service layer depends on, without
//! making storage assumptions. Two implementations: an in-memory store for
//! tests/dev and a Postgres-backed one.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;

use async_trait::async_trait;
use thiserror::Error;

use estoque_products::{Product, ProductId};

/// Failure raised by a repository implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Persistence contract for Product records.
///
/// No transaction or isolation guarantees beyond "durable after `save`
/// returns"; concurrent writes to the same record are last-write-wins.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Insert when `product.id` is `None` (the returned record carries the
    /// generated id), update otherwise.
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;

    /// Case-insensitive substring match on the name, strict less-than on
    /// the price.
    async fn find_by_name_like_and_price_less_than(
        &self,
        name: &str,
        price_bound: f64,
    ) -> Result<Vec<Product>, RepositoryError>;
}
