//! Export command implementation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use coverwise_core::coverage::{category_breakdown, combined_series_from, CostIndexStore};
use coverwise_core::export::{export_breakdown_csv, export_series_csv};

pub fn cmd_export(from: Option<i32>, output: Option<&Path>, breakdown: bool) -> Result<()> {
    let store = CostIndexStore::reference();
    let first = store.first_year().context("Cost index store is empty")?;
    let latest = store.latest_year().context("Cost index store is empty")?;
    let from = from.unwrap_or(first);

    let csv = if breakdown {
        let mut changes = category_breakdown(&store.materials, from, latest);
        changes.extend(category_breakdown(&store.labor, from, latest));
        export_breakdown_csv(&changes)?
    } else {
        export_series_csv(&combined_series_from(store, from))?
    };

    match output {
        Some(path) => {
            fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✅ Exported {} rows to {}",
                csv.lines().count().saturating_sub(1),
                path.display()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}
