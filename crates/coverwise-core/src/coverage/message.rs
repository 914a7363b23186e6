//! Message Generator
//!
//! Outreach text for a policyholder, branching on whether the analysis found
//! the policy underinsured. Section headers use `**bold**` markup behind a
//! glyph; [`to_plain_text`] strips both for clipboard use.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_percent};
use crate::models::{CoverageAnalysis, PolicyData};

const FINDINGS_GLYPH: &str = "📊";
const COVERAGE_GLYPH: &str = "📋";
const RECOMMENDATION_GLYPH: &str = "🏠";

const WORDS_PER_MINUTE: usize = 200;

/// Word count and estimated reading time of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub word_count: usize,
    pub reading_minutes: usize,
}

/// First whitespace-delimited token of a full name, "there" when empty
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("there")
}

/// Outreach message for `analysis`
pub fn generate_message(first_name: &str, policy: &PolicyData, analysis: &CoverageAnalysis) -> String {
    if analysis.is_underinsured {
        underinsured_message(first_name, policy, analysis)
    } else {
        adequate_message(first_name, policy, analysis)
    }
}

fn adequate_message(first_name: &str, policy: &PolicyData, analysis: &CoverageAnalysis) -> String {
    format!(
        "Dear {name},

Great news! Based on our analysis of your homeowner's insurance policy from {year}, \
your current coverage of {coverage} appears to be adequate for today's rebuild costs.

While construction costs in the {market} have increased by approximately {inflation}% \
since your policy was written, your coverage still meets or exceeds the estimated \
rebuild cost of {rebuild}.

We recommend reviewing your policy annually to ensure you maintain this protection. \
If you've made any significant home improvements or additions, please let us know so \
we can update your coverage accordingly.

Best regards,
Your Insurance Team",
        name = first_name,
        year = analysis.policy_year,
        coverage = format_currency(policy.current_coverage),
        market = analysis.market,
        inflation = format_percent(analysis.total_inflation),
        rebuild = format_currency(analysis.rebuild_cost_current),
    )
}

fn underinsured_message(
    first_name: &str,
    policy: &PolicyData,
    analysis: &CoverageAnalysis,
) -> String {
    let years = analysis.years_since_policy();
    let span = if years <= 1 {
        "year".to_string()
    } else {
        format!("{} years", years)
    };
    let gap = format_currency(analysis.coverage_gap);

    format!(
        "Dear {name},

I hope this message finds you well. I'm reaching out regarding your homeowner's \
insurance policy that was established in {year}.

Over the past {span}, we've seen significant changes in the construction industry. \
Based on construction cost data for the {market}, I wanted to share some important \
findings with you:

{findings} **Key Findings:**
• Construction material costs have increased by **{material}%** since {year}
• Contractor and labor costs have risen by **{labor}%**
• Overall rebuild costs have increased by approximately **{total}%**

{coverage_glyph} **Your Current Coverage:**
• Policy Coverage: {coverage}
• Estimated Current Rebuild Cost: {rebuild}
• **Coverage Gap: {gap}**

This means that in the unfortunate event of a total loss, you could potentially be \
responsible for **{gap}** in out-of-pocket expenses. That's {percent}% of your home's \
rebuild value that wouldn't be covered.

{recommendation} **Our Recommendation:**
To ensure you and your family are fully protected, we recommend increasing your \
dwelling coverage to approximately **{recommended}**. This includes a {buffer}% buffer \
to account for any additional costs that may arise during reconstruction.

I understand that no one likes to think about worst-case scenarios, but my goal is to \
make sure you're properly safeguarded. The premium adjustment to achieve adequate \
coverage is typically much smaller than the financial risk of being underinsured.

**I'd love to schedule a brief call to discuss your options and answer any questions \
you may have.** There's no obligation, just a conversation to ensure you have the \
peace of mind you deserve.

Reply to this message and I'll reach out at your convenience.

Warm regards,

**Your Dedicated Insurance Advisor**
Continuous Underwriting Team

---
*This analysis is based on regional construction cost data and your policy details. \
Individual circumstances may vary. Please review your full policy documents for \
complete coverage information.*",
        name = first_name,
        year = analysis.policy_year,
        span = span,
        market = analysis.market,
        findings = FINDINGS_GLYPH,
        material = format_percent(analysis.material_inflation),
        labor = format_percent(analysis.labor_inflation),
        total = format_percent(analysis.total_inflation),
        coverage_glyph = COVERAGE_GLYPH,
        coverage = format_currency(policy.current_coverage),
        rebuild = format_currency(analysis.rebuild_cost_current),
        gap = gap,
        percent = format_percent(analysis.underinsured_percent),
        recommendation = RECOMMENDATION_GLYPH,
        recommended = format_currency(analysis.recommended_coverage),
        buffer = format_percent(analysis.coverage_buffer * 100.0),
    )
}

/// Strip bold markup and header glyphs
pub fn to_plain_text(message: &str) -> String {
    let mut plain = message.replace("**", "");
    for glyph in [FINDINGS_GLYPH, COVERAGE_GLYPH, RECOMMENDATION_GLYPH] {
        plain = plain.replace(&format!("{} ", glyph), "").replace(glyph, "");
    }
    plain
}

pub fn message_stats(message: &str) -> MessageStats {
    let word_count = message.split_whitespace().count();
    MessageStats {
        word_count,
        reading_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
    }
}
