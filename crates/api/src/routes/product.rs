//! Route definitions for the `/product` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/product`.
///
/// ```text
/// POST   /                                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(product::create))
}
