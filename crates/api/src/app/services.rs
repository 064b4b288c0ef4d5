use std::sync::Arc;

use thiserror::Error;

use estoque_infra::{ProductRepository, RepositoryError};
use estoque_products::{Product, ProductId};

/// Failure surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record matches the given id.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Pass-through over the repository; its only business rule is turning a
/// missed lookup into [`ServiceError::NotFound`].
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Everything the repository has. No pagination, no ordering guarantee.
    pub async fn list_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    /// Delegates to the repository; validation is the controller's job.
    pub async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        Ok(self.repository.save(product).await?)
    }

    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Delete and return the prior record. Unknown ids signal
    /// [`ServiceError::NotFound`], the same convention as `get_by_id`.
    pub async fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        let existing = self.get_by_id(id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(existing)
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        price_ceiling: f64,
    ) -> Result<Vec<Product>, ServiceError> {
        Ok(self
            .repository
            .find_by_name_like_and_price_less_than(name, price_ceiling)
            .await?)
    }
}
