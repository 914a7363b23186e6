//! Config command implementation

use std::path::Path;

use anyhow::Result;
use coverwise_core::config::default_config_path;
use coverwise_core::coverage::CostIndexStore;
use coverwise_core::EstimatorConfig;

use super::separator;

pub fn cmd_config(config: &EstimatorConfig, explicit: Option<&Path>) -> Result<()> {
    let store = CostIndexStore::reference();

    println!("⚙️  Estimator Configuration");
    println!("{}", separator(52));
    match explicit {
        Some(path) => println!("   Source:             {}", path.display()),
        None => match default_config_path() {
            Some(path) if path.exists() => {
                println!("   Source:             {}", path.display())
            }
            Some(path) => {
                println!("   Source:             built-in defaults");
                println!("   Override path:      {}", path.display());
            }
            None => println!("   Source:             built-in defaults"),
        },
    }
    println!();
    println!(
        "   Blend weights:      materials {:.2}, labor {:.2}",
        config.material_weight, config.labor_weight
    );
    println!("   Coverage buffer:    {:.0}%", config.buffer_percent());
    println!("   Rounding increment: {:.0}", config.rounding_increment);
    match config.current_year {
        Some(year) => println!("   Current year:       {}", year),
        None => println!(
            "   Current year:       latest indexed ({})",
            store
                .latest_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "none".to_string())
        ),
    }
    println!(
        "   Strict years:       {}",
        if config.strict_years { "on" } else { "off" }
    );

    Ok(())
}
