//! Display formatting for emissions figures.
//!
//! The scenario model hands over raw `f64` values; rounding and separators
//! are applied here, right before rendering.

/// Whole tonnes with thousands separators, e.g. `28265.4` -> `"28,265"`.
pub fn format_tonnes(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// One decimal place, e.g. `4.8%`.
pub fn format_percent(value: f64) -> String {
    // Avoid "-0.0%" for an empty selection
    let value = if value.abs() < 0.05 { 0.0 } else { value };
    format!("{:.1}%", value)
}

/// Slider readout, e.g. `50%`.
pub fn format_whole_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}
