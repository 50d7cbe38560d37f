//! `partyardd` — the Partyard catalog server.
//!
//! Usage:
//!   partyardd serve -c <context-name-or-path> [--listen <addr>]
//!   partyardd export -c <context-name-or-path> [--out <dir>]
//!   partyardd entries -c <context-name-or-path>
//!
//! The context name resolves to `/etc/partyard/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use partyard_catalog::CatalogLoader;
use partyard_core::{Module, ServiceConfig};
use parts::{PartsModule, PartsService};
use tracing::info;

use config::ServerConfig;

/// Partyard catalog server.
#[derive(Parser, Debug)]
#[command(name = "partyardd", about = "Partyard catalog server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", global = true, default_value = "default")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the catalog over HTTP.
    Serve {
        /// Listen address (overrides the config file).
        #[arg(long = "listen")]
        listen: Option<String>,
    },

    /// Render the index and every part page to a directory.
    Export {
        /// Output directory (overrides the config file).
        #[arg(long = "out")]
        out: Option<PathBuf>,
    },

    /// Print the ids of every part as JSON.
    Entries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    match cli.command {
        Commands::Serve { listen } => {
            let core_config = server_config.service_config(listen.as_deref(), None);
            let module = PartsModule::new(load_service(&core_config, &server_config.site.title)?);
            info!("Parts module initialized");

            let app = routes::build_router(
                module.shared(),
                vec![(module.name(), module.routes())],
            );

            let listener = tokio::net::TcpListener::bind(&core_config.listen)
                .await
                .with_context(|| format!("failed to bind {}", core_config.listen))?;
            info!("Partyard server listening on {}", core_config.listen);
            axum::serve(listener, app).await?;
        }

        Commands::Export { out } => {
            let core_config = server_config.service_config(None, out.as_deref());
            let service = load_service(&core_config, &server_config.site.title)?;
            let out_dir = core_config.resolve_out_dir();
            let count = parts::export_site(&service, &out_dir)
                .with_context(|| format!("export to {} failed", out_dir.display()))?;
            println!("exported {} parts to {}", count, out_dir.display());
        }

        Commands::Entries => {
            let core_config = server_config.service_config(None, None);
            let service = load_service(&core_config, &server_config.site.title)?;
            println!("{}", serde_json::to_string_pretty(&service.entries())?);
        }
    }

    Ok(())
}

fn load_service(config: &ServiceConfig, site_title: &str) -> anyhow::Result<PartsService> {
    let data_dir = config.resolve_data_dir();
    let catalog = CatalogLoader::load(&data_dir)
        .with_context(|| format!("failed to load catalog from {}", data_dir.display()))?;
    info!("Catalog loaded: {} parts", catalog.len());
    Ok(PartsService::new(catalog, site_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "partyardd",
            "-c",
            "shop",
            "serve",
            "--listen",
            "127.0.0.1:1",
        ])
        .unwrap();
        assert_eq!(cli.config, "shop");
        assert!(matches!(
            cli.command,
            Commands::Serve { listen: Some(ref l) } if l == "127.0.0.1:1"
        ));

        let cli = Cli::try_parse_from(["partyardd", "export", "--out", "/tmp/site"]).unwrap();
        assert_eq!(cli.config, "default");
        assert!(matches!(cli.command, Commands::Export { out: Some(_) }));
    }

    #[test]
    fn load_service_reads_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("parts.yaml"),
            r#"
- id: hub-01
  name: Wheel hub
  price: 45
  category: suspension
  condition: used
  model: Patrol
  year: "1999"
  mileage: 200000
  shortDescription: Front left
  fullDescription: Bearings replaced
  tags: []
  image: /images/hub-01.jpg
"#,
        )
        .unwrap();

        let config = ServiceConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let service = load_service(&config, "Partyard").unwrap();
        assert_eq!(service.entries().len(), 1);
        assert_eq!(service.get_part("hub-01").unwrap().name, "Wheel hub");
    }
}
