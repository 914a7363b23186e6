//! Analyze command implementation

use std::path::Path;

use anyhow::Result;
use coverwise_core::coverage::{
    first_name, generate_message, message_stats, to_plain_text, CostIndexStore, CoverageAnalyzer,
};
use coverwise_core::format::{format_currency, format_percent};
use coverwise_core::{AnalysisInput, CoverageAnalysis, EstimatorConfig};

use super::{resolve_input, separator};

pub fn cmd_analyze(
    config: &EstimatorConfig,
    input: Option<&Path>,
    declarations: Option<&Path>,
    json: bool,
    plain: bool,
) -> Result<()> {
    let input = resolve_input(input, declarations)?;
    let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), config);
    let analysis = analyzer.analyze_checked(&input.policy, &input.home)?;

    let name = first_name(&input.policy.policyholder_name);
    let mut message = generate_message(name, &input.policy, &analysis);
    if plain {
        message = to_plain_text(&message);
    }

    if json {
        let output = serde_json::json!({
            "analysis": analysis,
            "message": message,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render_report(&input, &analysis));
    println!();
    println!("✉️  Outreach Message");
    println!("{}", separator(60));
    println!("{}", message);
    println!("{}", separator(60));

    let stats = message_stats(&message);
    println!(
        "   {} words, ~{} min read",
        stats.word_count, stats.reading_minutes
    );

    Ok(())
}

/// Coverage report block printed above the message
pub fn render_report(input: &AnalysisInput, analysis: &CoverageAnalysis) -> String {
    let policy = &input.policy;
    let mut out = String::new();

    out.push_str(&format!("🏠 Coverage Analysis: {}\n", policy.policy_number));
    out.push_str(&format!(
        "   {} · {}\n",
        policy.policyholder_name,
        policy.full_address()
    ));
    out.push_str(&format!("{}\n", separator(60)));
    out.push_str(&format!("   {:<28} {}\n", "Market:", analysis.market));
    out.push_str(&format!(
        "   {:<28} {} to {}\n",
        "Period:", analysis.policy_year, analysis.current_year
    ));
    out.push_str(&format!("   {:<28} {}\n", "Quality tier:", analysis.quality));
    out.push_str(&format!(
        "   {:<28} {}\n",
        "Dwelling coverage:",
        format_currency(analysis.original_coverage)
    ));
    out.push_str(&format!(
        "   {:<28} {}\n",
        format!("Rebuild cost ({}):", analysis.policy_year),
        format_currency(analysis.rebuild_cost_original)
    ));
    out.push_str(&format!(
        "   {:<28} {}\n",
        format!("Rebuild cost ({}):", analysis.current_year),
        format_currency(analysis.rebuild_cost_current)
    ));
    out.push_str(&format!(
        "   {:<28} {}%\n",
        "Material inflation:",
        format_percent(analysis.material_inflation)
    ));
    out.push_str(&format!(
        "   {:<28} {}%\n",
        "Labor inflation:",
        format_percent(analysis.labor_inflation)
    ));
    out.push_str(&format!(
        "   {:<28} {}%\n",
        "Total inflation:",
        format_percent(analysis.total_inflation)
    ));
    out.push_str(&format!(
        "   {:<28} {}%\n",
        "Coverage ratio:",
        format_percent(analysis.coverage_ratio())
    ));
    out.push_str(&format!("{}\n", separator(60)));

    if analysis.is_underinsured {
        out.push_str(&format!(
            "⚠️  Underinsured by {} ({}% of rebuild value)\n",
            format_currency(analysis.coverage_gap),
            format_percent(analysis.underinsured_percent)
        ));
    } else {
        out.push_str(&format!(
            "✅ Coverage is adequate (surplus {})\n",
            format_currency(-analysis.coverage_gap)
        ));
    }
    out.push_str(&format!(
        "   Recommended coverage: {} (+{} with {}% buffer)\n",
        format_currency(analysis.recommended_coverage),
        format_currency(analysis.additional_coverage_needed()),
        format_percent(analysis.coverage_buffer * 100.0)
    ));

    out
}
