use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use partyard_catalog::{Part, PartEntry};
use partyard_core::{ListResult, ServiceError};
use serde::Serialize;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parts", get(list_parts))
        .route("/parts/{id}", get(get_part))
        .route("/entries", get(list_entries))
}

/// Page data for a part: the record under the `part` key.
#[derive(Serialize)]
struct PartData<'a> {
    part: &'a Part,
}

async fn list_parts(State(svc): State<AppState>) -> Json<ListResult<Part>> {
    Json(svc.list_parts())
}

async fn get_part(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let part = svc.get_part(&id)?;
    let data = serde_json::to_value(PartData { part })
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(Json(data))
}

async fn list_entries(State(svc): State<AppState>) -> Json<Vec<PartEntry>> {
    Json(svc.entries())
}
