//! Route registration — collects all module routes + system endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use parts::PartsService;

/// Build the complete router with all routes.
pub fn build_router(service: Arc<PartsService>, module_routes: Vec<(&str, Router)>) -> Router {
    let system_routes = Router::new()
        .route("/health", get(health))
        .with_state(service)
        .route("/version", get(version));

    let mut app = Router::new().merge(system_routes);
    for (name, router) in module_routes {
        tracing::debug!("mounting module {}", name);
        app = app.merge(router);
    }
    app
}

async fn health(State(service): State<Arc<PartsService>>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "parts": service.catalog().len(),
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "partyardd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
