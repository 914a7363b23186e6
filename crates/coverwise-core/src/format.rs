//! Display formatting for currency and percentages

/// Whole-dollar currency with thousands separators: `$1,234,567`, `-$1,234`
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Integer percentage, rounded half away from zero (no `%` sign)
pub fn format_percent(value: f64) -> String {
    (value.round() as i64).to_string()
}
