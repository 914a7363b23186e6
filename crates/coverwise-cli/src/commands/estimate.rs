//! Estimate command implementation

use std::path::Path;

use anyhow::Result;
use coverwise_core::coverage::{CostIndexStore, RebuildCostBreakdown, RebuildCostEstimator};
use coverwise_core::format::format_currency;
use coverwise_core::{EstimatorConfig, HomeDetails};

use super::{resolve_input, separator};

pub fn cmd_estimate(
    config: &EstimatorConfig,
    input: Option<&Path>,
    year: i32,
    baseline: Option<i32>,
) -> Result<()> {
    let input = resolve_input(input, None)?;
    let baseline = baseline.unwrap_or_else(|| input.policy.policy_year());

    let store = CostIndexStore::reference();
    if !store.contains_year(year) {
        println!("⚠️  {} is not in the index data; no escalation will apply", year);
    }

    let estimator = RebuildCostEstimator::new(store, config);
    let breakdown = estimator.breakdown(&input.home, year, baseline);

    print!("{}", render_breakdown(&input.home, &breakdown));
    Ok(())
}

/// Step-by-step breakdown table
pub fn render_breakdown(home: &HomeDetails, b: &RebuildCostBreakdown) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "🔨 Rebuild Cost Estimate ({} prices, baseline {})\n",
        b.escalation.to_year, b.escalation.from_year
    ));
    out.push_str(&format!("{}\n", separator(60)));
    out.push_str(&format!(
        "   Quality: {} (score {})\n",
        b.quality, b.quality_score
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!(
            "{} sqft × {}/sqft",
            b.square_footage,
            format_currency(b.base_cost_per_sqft)
        ),
        format_currency(b.base_cost)
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!("× roof {:.2} ({})", b.roof_multiplier, home.roof_type.label()),
        ""
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!(
            "× exterior {:.2} ({})",
            b.exterior_multiplier,
            home.exterior_type.label()
        ),
        ""
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!("× kitchen {:.2} ({})", b.kitchen_multiplier, home.kitchen_quality),
        ""
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!(
            "× bathroom {:.2} ({})",
            b.bathroom_multiplier, home.bathroom_quality
        ),
        format_currency(b.cost_after_multipliers)
    ));
    if b.basement_cost > 0.0 {
        out.push_str(&format!(
            "   {:<34} {:>14}\n",
            "+ basement",
            format_currency(b.basement_cost)
        ));
    }
    if b.garage_cost > 0.0 {
        out.push_str(&format!(
            "   {:<34} {:>14}\n",
            "+ garage",
            format_currency(b.garage_cost)
        ));
    }
    if b.pool_cost > 0.0 {
        out.push_str(&format!(
            "   {:<34} {:>14}\n",
            "+ pool",
            format_currency(b.pool_cost)
        ));
    }
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!("× stories {:.2}", b.stories_factor),
        format_currency(b.subtotal)
    ));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        format!(
            "× escalation {:.4} (materials {:.1}%, labor {:.1}%)",
            b.escalation.factor, b.escalation.material_pct, b.escalation.labor_pct
        ),
        ""
    ));
    out.push_str(&format!("{}\n", separator(60)));
    out.push_str(&format!(
        "   {:<34} {:>14}\n",
        "Total",
        format_currency(b.total)
    ));

    out
}
