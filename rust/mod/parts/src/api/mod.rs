pub mod part;

use std::sync::Arc;

use axum::Router;

use crate::page;
use crate::service::PartsService;

/// Shared application state.
pub type AppState = Arc<PartsService>;

/// Build the parts router: HTML pages at the root, JSON under `/api/v1`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(page::routes())
        .nest("/api/v1", part::routes())
        .with_state(state)
}
