//! Product repository for database operations.

use sqlx::{PgPool, Postgres, QueryBuilder};

use novastore_core::ProductId;

use super::RepositoryError;
use crate::models::product::{NewProduct, Product};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the entire catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, price, image, category, stock, specs,
                   created_at, updated_at
            FROM products
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, price, image, category, stock, specs,
                   created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Count all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Delete every product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products").execute(self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Bulk-insert catalog entries in a single statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert_many(&self, products: &[NewProduct]) -> Result<u64, RepositoryError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO products (title, description, price, image, category, stock, specs) ",
        );

        builder.push_values(products, |mut row, product| {
            row.push_bind(product.title)
                .push_bind(product.description)
                .push_bind(product.price)
                .push_bind(product.image)
                .push_bind(product.category)
                .push_bind(product.stock)
                .push_bind(product.specs.clone());
        });

        let result = builder.build().execute(self.pool).await?;

        Ok(result.rows_affected())
    }
}
