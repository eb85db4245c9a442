//! Number formatting shared by axis ticks, tooltips and the metadata panel.

/// Fixed decimal places, no grouping. Negative zero prints as zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", value, decimals);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Rounds to an integer and inserts `,` every three digits.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format_fixed(value, 0);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Signed percentage with two decimals, e.g. `1.25%` or `-0.40%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 2))
}
