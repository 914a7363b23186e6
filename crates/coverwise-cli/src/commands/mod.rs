//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, input resolution)
//! - `analyze` - Coverage analysis and outreach message
//! - `estimate` - Rebuild cost breakdown
//! - `indices` - Cost index tables
//! - `export` - CSV export of index data
//! - `sample` - Sample manual-entry file
//! - `config` - Resolved estimator configuration
//! - `serve` - Web server command

pub mod analyze;
pub mod config;
pub mod core;
pub mod estimate;
pub mod export;
pub mod indices;
pub mod sample;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use core::*;
pub use estimate::*;
pub use export::*;
pub use indices::*;
pub use sample::*;
pub use serve::*;
