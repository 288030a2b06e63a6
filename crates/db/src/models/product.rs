//! Product row model.

use inventory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A product row from the `products` table.
///
/// `unit` and `status` hold the wire literals; the table's CHECK
/// constraints keep them within the same sets the validator accepts.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: String,
    pub quantity: i64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
