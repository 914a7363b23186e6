//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use coverwise_core::coverage::CostIndexStore;
use coverwise_core::EstimatorConfig;

pub async fn cmd_serve(
    config: EstimatorConfig,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let store = CostIndexStore::reference();

    println!("🚀 Starting Coverwise web server...");
    println!("   Market: {}", store.market);
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Comma-separated list of extra CORS origins
    let allowed_origins: Vec<String> = std::env::var("COVERWISE_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (COVERWISE_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;

    let server_config = coverwise_server::ServerConfig { allowed_origins };
    coverwise_server::serve(config, host, port, static_dir_str, server_config).await?;

    Ok(())
}
