//! Handlers for the `/product` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::product;
use inventory_db::models::product::ProductRecord;
use inventory_db::repositories::product_repo::NAME_UNIQUE_CONSTRAINT;
use inventory_db::repositories::ProductRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/v1/product
///
/// Validates the payload, then inserts it. The stored record carries the
/// database-assigned `id`, `createdAt` and `updatedAt`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SuccessResponse<ProductRecord>>> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let product = product::validate_value(&payload).map_err(|err| {
        tracing::debug!(error = %err, field = ?err.field(), "Rejected product payload");
        CoreError::from(err)
    })?;

    match ProductRepo::create(&state.pool, &product).await {
        Ok(record) => {
            tracing::info!(
                id = record.id,
                name = %record.name,
                status = %record.status,
                "Product created"
            );
            Ok(Json(SuccessResponse::new("Data inserted successfully", record)))
        }
        Err(err) if inventory_db::unique_violation(&err) == Some(NAME_UNIQUE_CONSTRAINT) => {
            Err(CoreError::DuplicateKey {
                field: "name",
                value: product.name,
            }
            .into())
        }
        Err(err) => Err(err.into()),
    }
}
