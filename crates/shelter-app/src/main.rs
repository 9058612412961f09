//! # Kennel Shelter - HTTP service for kennel allocation
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: ShelterConfig (file + CLI flags)                 │
//! │    ├── Creates: Shelter (domain service)                       │
//! │    ├── Creates: ShelterService (use case), optionally seeded   │
//! │    ├── Creates: SharedShelter + router (adapter)               │
//! │    └── Runs: The HTTP server                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   shelter                             - Serve on 0.0.0.0:5000 with 16/10/8 kennels
//!   shelter --config shelter.yaml       - Load settings from a file
//!   shelter --small 1 --medium 1 --large 1 --seed

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shared::ShelterConfig;
use shelter_adapter::{build_router, SharedShelter};
use shelter_domain::Shelter;
use shelter_usecase::{demo_roster, ShelterService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(name = "shelter")]
#[command(about = "Kennel shelter allocation service")]
#[command(version)]
struct Args {
    /// Path to a YAML or JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long)]
    host: Option<String>,

    /// HTTP port
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of Small kennels
    #[arg(long)]
    small: Option<usize>,

    /// Number of Medium kennels
    #[arg(long)]
    medium: Option<usize>,

    /// Number of Large kennels
    #[arg(long)]
    large: Option<usize>,

    /// Admit the demo roster at startup
    #[arg(long)]
    seed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Defaults, then the config file, then CLI flags
fn resolve_config(args: &Args) -> Result<ShelterConfig> {
    let mut config = match &args.config {
        Some(path) => ShelterConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ShelterConfig::default(),
    };

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(small) = args.small {
        config.kennels.small = small;
    }
    if let Some(medium) = args.medium {
        config.kennels.medium = medium;
    }
    if let Some(large) = args.large {
        config.kennels.large = large;
    }
    config.seed_demo_animals |= args.seed;

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn build_service(config: &ShelterConfig) -> ShelterService {
    let layout = config.kennels;
    let mut service = ShelterService::new(Shelter::new(layout.small, layout.medium, layout.large));

    if config.seed_demo_animals {
        info!("Seeding demo animals");
        service.seed(demo_roster());
    }

    service
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let config = resolve_config(&args)?;

    info!("Kennel shelter starting...");
    info!(
        small = config.kennels.small,
        medium = config.kennels.medium,
        large = config.kennels.large,
        "Building kennels"
    );

    let shelter = SharedShelter::new(build_service(&config));
    let app = build_router(shelter);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", address))?;
    info!("HTTP API listening on {}", address);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args {
            port: Some(8080),
            large: Some(2),
            seed: true,
            ..Default::default()
        };

        let config = resolve_config(&args).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.kennels.small, 16);
        assert_eq!(config.kennels.large, 2);
        assert!(config.seed_demo_animals);
    }

    #[test]
    fn test_empty_layout_rejected() {
        let args = Args {
            small: Some(0),
            medium: Some(0),
            large: Some(0),
            ..Default::default()
        };

        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/shelter.yaml")),
            ..Default::default()
        };

        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_build_service_seeds_when_asked() {
        let mut config = ShelterConfig::default();
        config.seed_demo_animals = true;

        let service = build_service(&config);

        assert_eq!(service.shelter().occupied_count(), 33);
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from(["shelter", "--small", "1", "--seed", "-v"]).unwrap();
        assert_eq!(args.small, Some(1));
        assert!(args.seed);
        assert!(args.verbose);
    }
}
