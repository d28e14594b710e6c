//! Catalog seeding command.
//!
//! Inserts a small set of sample products so a fresh instance has something
//! to render. Ids are assigned by the repository the same way the admin
//! add-product route assigns them.

use marigold_storefront::db::{self, ProductRepository};
use marigold_storefront::models::NewProduct;

/// Sample products: (name, image, category, `new_price`, `old_price`).
const SAMPLE_PRODUCTS: &[(&str, &str, &str, f64, f64)] = &[
    (
        "Striped Flutter Sleeve Blouse",
        "/images/seed_blouse.png",
        "women",
        50.0,
        80.5,
    ),
    (
        "Colourblocked Zip Hoodie",
        "/images/seed_hoodie.png",
        "men",
        85.0,
        120.5,
    ),
    (
        "Graphic Print Kids Sweatshirt",
        "/images/seed_sweatshirt.png",
        "kid",
        60.0,
        100.5,
    ),
    (
        "Peplum Overlap Collar Top",
        "/images/seed_top.png",
        "women",
        75.0,
        105.0,
    ),
];

/// Seed the catalog with sample products.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    let pool = db::create_pool(&database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    let products = ProductRepository::new(&pool);
    for &(name, image, category, new_price, old_price) in SAMPLE_PRODUCTS {
        let product = products
            .create(NewProduct {
                name: name.to_owned(),
                image: image.to_owned(),
                category: category.to_owned(),
                new_price,
                old_price,
            })
            .await?;
        tracing::info!(id = %product.id, name = %product.name, "seeded product");
    }

    tracing::info!("Catalog seeding complete");
    Ok(())
}
