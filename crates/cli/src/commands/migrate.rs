//! Database migration command.

use marigold_storefront::db;

/// Apply all pending migrations to the storefront database.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    tracing::info!("Running storefront migrations");
    let pool = db::create_pool(&database_url).await?;
    db::MIGRATOR.run(&pool).await?;
    tracing::info!("Storefront migrations complete");

    Ok(())
}
