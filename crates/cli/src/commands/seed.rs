//! Seed the product catalog with canonical data.
//!
//! This command wipes the `products` table and repopulates it from the
//! built-in catalog, exactly like `POST /seed` on the running server.

use secrecy::SecretString;
use tracing::info;

use novastore_server::db;
use novastore_server::services::CatalogService;

/// Replace the product catalog with the canonical seed data.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn catalog() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("NOVASTORE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "NOVASTORE_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let summary = CatalogService::new(&pool).reseed().await?;

    info!("Seeding complete!");
    info!("  Products deleted: {}", summary.deleted);
    info!("  Products inserted: {}", summary.inserted);

    Ok(())
}
