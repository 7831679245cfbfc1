//! Catalog browsing and the destructive reseed.

pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use novastore_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::product::{Product, ReseedSummary};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The supplied product ID is not a valid identifier.
    #[error("invalid product id")]
    InvalidId,

    /// No product exists with the supplied ID.
    #[error("product not found")]
    NotFound,

    /// A reseed step failed; the catalog may be partially replaced.
    #[error("reseed failed: {0}")]
    SeedFailed(RepositoryError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.list().await?)
    }

    /// Fetch a single product by its ID string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidId` if the ID is not a valid identifier.
    /// Returns `CatalogError::NotFound` if no product has this ID.
    /// Returns `CatalogError::Repository` if the query fails.
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let id = ProductId::parse(id).map_err(|_| CatalogError::InvalidId)?;

        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// Replace the entire catalog with the built-in seed data.
    ///
    /// Counts rows before deleting and after inserting; `deleted` is the
    /// pre-wipe count. Concurrent reseeds are not serialized against each
    /// other.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SeedFailed` if any step fails; the catalog may
    /// be left partially replaced in that case.
    pub async fn reseed(&self) -> Result<ReseedSummary, CatalogError> {
        let before = self
            .products
            .count()
            .await
            .map_err(CatalogError::SeedFailed)?;

        if before > 0 {
            self.products
                .delete_all()
                .await
                .map_err(CatalogError::SeedFailed)?;
        }

        self.products
            .insert_many(&seed::catalog())
            .await
            .map_err(CatalogError::SeedFailed)?;

        let after = self
            .products
            .count()
            .await
            .map_err(CatalogError::SeedFailed)?;

        Ok(ReseedSummary {
            message: "Re-seeded",
            deleted: before,
            inserted: after,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/novastore_test")
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_product_rejects_malformed_id() {
        let pool = lazy_pool();
        let service = CatalogService::new(&pool);

        let err = service.get_product("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId));
    }

    #[tokio::test]
    async fn test_get_product_rejects_short_hex_ids() {
        // 24 hex chars is not a UUID, even though it looks id-shaped.
        let pool = lazy_pool();
        let service = CatalogService::new(&pool);

        let err = service
            .get_product("64a7f0c2e13b9a0012345678")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId));
    }
}
