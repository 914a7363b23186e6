//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Resolve the estimator config for this run
//! - `resolve_input` - Pick the policy/home input for a command
//! - `separator` - Table rule used by report output

use std::path::Path;

use anyhow::{Context, Result};
use coverwise_core::intake::{from_declarations_page, load_input};
use coverwise_core::{AnalysisInput, EstimatorConfig};
use tracing::warn;

/// Load the config from `--config`, else the data dir override, else built-in values
pub fn load_config(path: Option<&Path>) -> Result<EstimatorConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Config file not found; using built-in defaults");
            }
            EstimatorConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => EstimatorConfig::load().context("Failed to load estimator config"),
    }
}

/// Manual-entry file, then declarations upload, then the sample input
pub fn resolve_input(input: Option<&Path>, declarations: Option<&Path>) -> Result<AnalysisInput> {
    if let Some(path) = input {
        return load_input(path).with_context(|| format!("Failed to load {}", path.display()));
    }
    if let Some(path) = declarations {
        println!("📄 Received declarations page: {}", path.display());
        println!("   Automatic extraction is not available; using sample values.");
        println!();
        return from_declarations_page(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    Ok(AnalysisInput::sample())
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
