pub mod api;
pub mod export;
pub mod page;
pub mod render;
pub mod service;

use std::sync::Arc;

use axum::Router;
use partyard_core::Module;

pub use export::{ExportError, export_site};
pub use service::PartsService;

/// Parts module — catalog pages and the read-only parts API.
pub struct PartsModule {
    service: Arc<PartsService>,
}

impl PartsModule {
    pub fn new(service: PartsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Shared handle to the service, for routes mounted outside the module.
    pub fn shared(&self) -> Arc<PartsService> {
        self.service.clone()
    }
}

impl Module for PartsModule {
    fn name(&self) -> &str {
        "parts"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
