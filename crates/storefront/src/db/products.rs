//! Catalog repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use marigold_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Database row shape for `products`.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    image: String,
    category: String,
    new_price: f64,
    old_price: f64,
    available: bool,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            image: row.image,
            category: row.category,
            new_price: row.new_price,
            old_price: row.old_price,
            available: row.available,
            date: row.created_at,
        }
    }
}

/// Repository for catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the entire catalog in storage (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, image, category, new_price, old_price, available, created_at \
             FROM products ORDER BY rowid",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Create a product, assigning the next sequential id.
    ///
    /// The id is computed and inserted in a single statement, so concurrent
    /// creations cannot race on the same next-id. Because ids are assigned
    /// in increasing order and inserts append, `MAX(id) + 1` is equivalent
    /// to the last-record-in-storage-order rule; a deleted highest id is
    /// reused by the next creation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, fields: NewProduct) -> Result<Product, RepositoryError> {
        let created_at = Utc::now();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (id, name, image, category, new_price, old_price, available, created_at) \
             VALUES ((SELECT COALESCE(MAX(id), 0) + 1 FROM products), ?, ?, ?, ?, ?, 1, ?) \
             RETURNING id",
        )
        .bind(&fields.name)
        .bind(&fields.image)
        .bind(&fields.category)
        .bind(fields.new_price)
        .bind(fields.old_price)
        .bind(created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(Product {
            id: ProductId::new(id),
            name: fields.name,
            image: fields.image,
            category: fields.category,
            new_price: fields.new_price,
            old_price: fields.old_price,
            available: true,
            date: created_at,
        })
    }

    /// Delete a product by its id.
    ///
    /// Deleting a missing id is not an error (delete is idempotent-silent).
    ///
    /// # Returns
    ///
    /// Returns `true` if a product was deleted, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
