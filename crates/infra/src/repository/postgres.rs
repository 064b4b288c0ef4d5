//! Postgres-backed product repository.
//!
//! Expects a `produtos` table with columns `id BIGSERIAL PRIMARY KEY`,
//! `nome TEXT NOT NULL`, `descricao TEXT`, `preco DOUBLE PRECISION NOT
//! NULL`, `quantidade_estoque INTEGER NOT NULL`; the schema itself is
//! managed externally.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use estoque_products::{Product, ProductId};

use super::{ProductRepository, RepositoryError};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: Some(ProductId::new(row.try_get::<i64, _>("id")?)),
        name: row.try_get("nome")?,
        description: row.try_get("descricao")?,
        price: row.try_get("preco")?,
        stock_quantity: row.try_get("quantidade_estoque")?,
    })
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, nome, descricao, preco, quantidade_estoque FROM produtos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(row_to_product(row)?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, nome, descricao, preco, quantidade_estoque FROM produtos WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let row = match product.id {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO produtos (nome, descricao, preco, quantidade_estoque)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, nome, descricao, preco, quantidade_estoque
                    "#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.stock_quantity)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO produtos (id, nome, descricao, preco, quantidade_estoque)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id)
                    DO UPDATE SET
                        nome = EXCLUDED.nome,
                        descricao = EXCLUDED.descricao,
                        preco = EXCLUDED.preco,
                        quantidade_estoque = EXCLUDED.quantidade_estoque
                    RETURNING id, nome, descricao, preco, quantidade_estoque
                    "#,
                )
                .bind(id.get())
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.stock_quantity)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row_to_product(&row)?)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_name_like_and_price_less_than(
        &self,
        name: &str,
        price_bound: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, nome, descricao, preco, quantidade_estoque
            FROM produtos
            WHERE nome ILIKE '%' || $1 || '%' AND preco < $2
            ORDER BY id
            "#,
        )
        .bind(name)
        .bind(price_bound)
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(row_to_product(row)?);
        }
        Ok(products)
    }
}
