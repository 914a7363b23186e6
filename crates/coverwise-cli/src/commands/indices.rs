//! Cost index command implementation

use anyhow::{Context, Result};
use coverwise_core::coverage::{
    category_breakdown, combined_series_from, series_summary, CategoryChange, CostClass,
    CostIndexStore,
};

use super::separator;

pub fn cmd_indices(from: Option<i32>) -> Result<()> {
    let store = CostIndexStore::reference();
    let first = store.first_year().context("Cost index store is empty")?;
    let latest = store.latest_year().context("Cost index store is empty")?;
    let from = from.unwrap_or(first);

    let series = combined_series_from(store, from);
    if series.is_empty() {
        println!("No index data from {} (indexed years: {}-{})", from, first, latest);
        return Ok(());
    }

    println!("📈 Construction Cost Indices: {}", store.market);
    println!("{}", separator(52));
    println!(
        "   {:<6} {:>12} {:>12} {:>12}",
        "Year", "Materials", "Labor", "Combined"
    );
    for point in &series {
        println!(
            "   {:<6} {:>12.1} {:>12.1} {:>12.1}",
            point.year, point.materials_index_avg, point.labor_index_avg, point.combined_index_avg
        );
    }

    if let Some(summary) = series_summary(&series, from) {
        println!("{}", separator(52));
        println!(
            "   {}-{}: materials {:+.1}%, labor {:+.1}%, combined {:+.1}%",
            summary.from_year,
            summary.to_year,
            summary.materials_change,
            summary.labor_change,
            summary.combined_change
        );
    }

    let baseline = series.first().map(|p| p.year).unwrap_or(first);
    for class in [CostClass::Material, CostClass::Labor] {
        let changes = category_breakdown(store.categories(class), baseline, latest);
        println!();
        println!(
            "{} by category ({}-{})",
            if class == CostClass::Material {
                "🧱 Materials"
            } else {
                "👷 Labor"
            },
            baseline,
            latest
        );
        print_changes(&changes);
    }

    Ok(())
}

fn print_changes(changes: &[CategoryChange]) {
    for change in changes {
        println!(
            "   {} {:<36} {:>+8.1}%",
            change.icon, change.name, change.change_pct
        );
    }
}
