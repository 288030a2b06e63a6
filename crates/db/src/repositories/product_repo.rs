//! Repository for the `products` table.

use inventory_core::product::Product;
use sqlx::PgPool;

use crate::models::product::ProductRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, price, unit, quantity, status, created_at, updated_at";

/// Unique constraint guarding product names.
pub const NAME_UNIQUE_CONSTRAINT: &str = "uq_products_name";

/// Provides insert operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a validated product, returning the stored row.
    ///
    /// The database assigns `id`, `created_at` and `updated_at`. A name that
    /// already exists fails with a unique violation on
    /// [`NAME_UNIQUE_CONSTRAINT`]; of several concurrent inserts with the
    /// same name exactly one succeeds.
    pub async fn create(pool: &PgPool, input: &Product) -> Result<ProductRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, unit, quantity, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, ProductRecord>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.unit.as_str())
            .bind(input.quantity)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await?;
        tracing::debug!(id = record.id, name = %record.name, "Inserted product");
        Ok(record)
    }
}
