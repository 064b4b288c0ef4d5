//! Infrastructure layer: persistence adapters for the product store.

pub mod repository;

pub use repository::{
    InMemoryProductRepository, PostgresProductRepository, ProductRepository, RepositoryError,
};
