/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and torn down after the server stops. Cheaply
/// cloneable (the pool is reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inventory_db::DbPool,
}
