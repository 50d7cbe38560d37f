use axum::{
    Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use partyard_core::ServiceError;

use crate::api::AppState;
use crate::render;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/parts/{id}", get(part_detail))
}

/// A [`ServiceError`] rendered as an HTML page instead of JSON.
pub struct PageError {
    error: ServiceError,
    site_title: String,
}

impl PageError {
    fn new(error: ServiceError, site_title: &str) -> Self {
        Self {
            error,
            site_title: site_title.to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let html = render::error_page(status.as_u16(), &self.error.to_string(), &self.site_title);
        (status, Html(html)).into_response()
    }
}

async fn index(State(svc): State<AppState>) -> Html<String> {
    Html(render::index_page(svc.catalog().parts(), svc.site_title()))
}

async fn part_detail(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let part = svc
        .get_part(&id)
        .map_err(|e| PageError::new(e, svc.site_title()))?;
    Ok(Html(render::part_page(part, svc.site_title())))
}
