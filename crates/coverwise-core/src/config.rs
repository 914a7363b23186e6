//! Estimator configuration
//!
//! Tunable constants of the rebuild cost engine. The defaults reproduce the
//! reference behavior; overrides exist for what-if runs and for pinning the
//! present year.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path (`--config`), or the override in the data dir
//!    (~/.local/share/coverwise/config/estimator.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/estimator.toml");

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Materials share of blended escalation
    pub material_weight: f64,
    /// Labor share of blended escalation
    pub labor_weight: f64,
    /// Buffer on top of the current rebuild cost (0.10 = 10%)
    pub coverage_buffer: f64,
    /// Recommended coverage rounds up to a multiple of this
    pub rounding_increment: f64,
    /// Present year; `None` means the latest year in the index store
    pub current_year: Option<i32>,
    /// Reject policy years outside the indexed range
    pub strict_years: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            material_weight: 0.4,
            labor_weight: 0.6,
            coverage_buffer: 0.10,
            rounding_increment: 10_000.0,
            current_year: None,
            strict_years: false,
        }
    }
}

impl EstimatorConfig {
    /// Load from the default override location, else the embedded default
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from an explicit path, falling back to the embedded default
    /// when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Buffer expressed as a whole percentage for display
    pub fn buffer_percent(&self) -> f64 {
        self.coverage_buffer * 100.0
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("coverwise").join("config").join("estimator.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<EstimatorConfig> {
    let candidate = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let content = match candidate {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "Loading estimator config override");
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    blend: Option<RawBlend>,
    coverage: Option<RawCoverage>,
    analysis: Option<RawAnalysis>,
}

#[derive(Debug, Deserialize)]
struct RawBlend {
    material_weight: Option<f64>,
    labor_weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCoverage {
    buffer: Option<f64>,
    rounding_increment: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    current_year: Option<i32>,
    strict_years: Option<bool>,
}

fn parse_config(content: &str) -> Result<EstimatorConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EstimatorConfig::default();

    if let Some(blend) = raw.blend {
        if let Some(weight) = blend.material_weight {
            config.material_weight = weight;
        }
        if let Some(weight) = blend.labor_weight {
            config.labor_weight = weight;
        }
    }

    if let Some(coverage) = raw.coverage {
        if let Some(buffer) = coverage.buffer {
            config.coverage_buffer = buffer;
        }
        if let Some(increment) = coverage.rounding_increment {
            config.rounding_increment = increment;
        }
    }

    if let Some(analysis) = raw.analysis {
        if analysis.current_year.is_some() {
            config.current_year = analysis.current_year;
        }
        if let Some(strict) = analysis.strict_years {
            config.strict_years = strict;
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &EstimatorConfig) -> Result<()> {
    if config.material_weight < 0.0 || config.labor_weight < 0.0 {
        return Err(Error::Config("Blend weights must not be negative".to_string()));
    }
    if config.coverage_buffer < 0.0 {
        return Err(Error::Config("Coverage buffer must not be negative".to_string()));
    }
    if config.rounding_increment <= 0.0 {
        return Err(Error::Config(
            "Rounding increment must be positive".to_string(),
        ));
    }
    Ok(())
}
