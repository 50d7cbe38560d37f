use std::path::PathBuf;

/// Resolved runtime configuration shared by the server and the exporter.
///
/// The binary fills this in from its TOML config file and command-line
/// overrides, then hands it to the catalog loader and the HTTP server.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the catalog data (`parts.yaml`, `parts/*.yaml`).
    pub data_dir: Option<PathBuf>,

    /// Output directory for the static export.
    /// Defaults to `{data_dir}/site` if not specified.
    pub out_dir: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            out_dir: None,
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the catalog data directory, falling back to the working directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the export directory, falling back to `{data_dir}/site`.
    pub fn resolve_out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("site"))
    }

    fn resolve_data_subpath(&self, name: &str) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(|d| d.join(name))
            .unwrap_or_else(|| PathBuf::from(name))
    }
}
