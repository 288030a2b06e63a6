pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /product                                         create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/product", product::router())
}
