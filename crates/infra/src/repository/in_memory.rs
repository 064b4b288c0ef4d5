use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use estoque_products::{Product, ProductId};

use super::{ProductRepository, RepositoryError};

/// In-memory product store.
///
/// Intended for tests/dev. Not optimized for performance. Ids come from a
/// process-local counter starting at 1, mirroring an identity column.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(rows.get(&id.get()).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.write().map_err(|_| RepositoryError::LockPoisoned)?;

        let id = match product.id {
            Some(id) => id,
            None => ProductId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1),
        };
        product.id = Some(id);
        rows.insert(id.get(), product.clone());

        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().map_err(|_| RepositoryError::LockPoisoned)?;
        rows.remove(&id.get());
        Ok(())
    }

    async fn find_by_name_like_and_price_less_than(
        &self,
        name: &str,
        price_bound: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let needle = name.to_lowercase();
        let rows = self.rows.read().map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(rows
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle) && p.price < price_bound)
            .cloned()
            .collect())
    }
}
