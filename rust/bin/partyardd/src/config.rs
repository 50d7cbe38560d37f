//! Server configuration file.
//!
//! A bare context name resolves to `/etc/partyard/<name>.toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use partyard_core::ServiceConfig;

const CONFIG_DIR: &str = "/etc/partyard";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub catalog: CatalogSection,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub out_dir: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            out_dir: None,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_title() -> String {
    "Partyard".to_string()
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            Path::new(CONFIG_DIR).join(format!("{}.toml", name_or_path))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: ServerConfig = toml::from_str(content)?;
        config.verify()?;
        Ok(config)
    }

    pub fn verify(&self) -> anyhow::Result<()> {
        if self.catalog.data_dir.is_empty() {
            anyhow::bail!("catalog.data_dir is empty in configuration.");
        }
        if self.server.listen.is_empty() {
            anyhow::bail!("server.listen is empty in configuration.");
        }
        Ok(())
    }

    /// Build the runtime config, applying command-line overrides.
    pub fn service_config(&self, listen: Option<&str>, out_dir: Option<&Path>) -> ServiceConfig {
        ServiceConfig {
            data_dir: Some(PathBuf::from(&self.catalog.data_dir)),
            out_dir: out_dir
                .map(Path::to_path_buf)
                .or_else(|| self.site.out_dir.as_ref().map(PathBuf::from)),
            listen: listen.unwrap_or(&self.server.listen).to_string(),
        }
    }
}
