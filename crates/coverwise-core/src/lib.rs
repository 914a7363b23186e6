//! Coverwise Core Library
//!
//! Shared functionality for the Coverwise dwelling coverage estimator:
//! - Reference construction cost indices (materials and labor)
//! - Inflation aggregation across cost categories
//! - Home quality scoring and rebuild cost estimation
//! - Coverage gap analysis and outreach message generation
//! - Estimator configuration with override files
//! - Manual-entry input files and CSV export of index data

pub mod config;
pub mod coverage;
pub mod error;
pub mod export;
pub mod format;
pub mod intake;
pub mod models;

pub use config::EstimatorConfig;
pub use coverage::{
    CostIndexStore, CoverageAnalyzer, MessageStats, QualityTier, RebuildCostBreakdown,
    RebuildCostEstimator,
};
pub use error::{Error, Result};
pub use intake::AnalysisInput;
pub use models::{CoverageAnalysis, HomeDetails, PolicyData};
