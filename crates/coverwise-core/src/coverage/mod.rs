//! Coverage Estimation Engine
//!
//! Decides whether a dwelling coverage amount still pays for a rebuild at
//! today's construction prices.
//!
//! ## Pipeline
//!
//! - **Cost Index Store** - reference material and labor cost indices
//! - **Inflation Aggregator** - point-to-point and averaged index changes
//! - **Quality Scorer** - home attributes to a construction grade
//! - **Rebuild Cost Estimator** - grade, size, features and escalation to dollars
//! - **Coverage Analyzer** - baseline vs current rebuild cost against coverage
//! - **Message Generator** - outreach text over the analysis
//!
//! Every operation is a pure function of its inputs and the read-only store.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coverwise_core::coverage::{CostIndexStore, CoverageAnalyzer};
//!
//! let config = EstimatorConfig::load()?;
//! let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
//! let analysis = analyzer.analyze(&policy, &home);
//! ```

pub mod analyzer;
pub mod estimator;
pub mod index;
pub mod inflation;
pub mod message;
pub mod quality;

pub use analyzer::CoverageAnalyzer;
pub use estimator::{Escalation, RebuildCostBreakdown, RebuildCostEstimator};
pub use index::{CostCategory, CostClass, CostIndexStore, YearlyIndex};
pub use inflation::{
    average_inflation, category_breakdown, combined_series, combined_series_from, series_summary,
    CategoryChange, CombinedIndexPoint, SeriesSummary,
};
pub use message::{first_name, generate_message, message_stats, to_plain_text, MessageStats};
pub use quality::{quality_score, score_quality};

pub use crate::models::QualityTier;
