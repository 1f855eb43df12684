//! Time formatting shared by the details panel and the event legend.
//!
//! All capture timestamps are milliseconds relative to the start of the
//! capture, so formatting never needs a calendar.

/// Format a millisecond value rounded to whole milliseconds: `"23ms"`.
pub fn format_milliseconds(ms: f64) -> String {
    format_milliseconds_with_precision(ms, 0)
}

/// Format a millisecond value with a fixed number of fraction digits.
pub fn format_milliseconds_with_precision(ms: f64, fraction_digits: usize) -> String {
    let scale = 10f64.powi(fraction_digits as i32);
    let rounded = (ms * scale).round() / scale;
    // Avoid rendering "-0ms" for tiny negative values
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}ms", fraction_digits, rounded)
}

/// Produces the span string used throughout the details panel,
/// e.g. `"@23ms for 112ms"`.
pub fn format_time_span(start: f64, end: f64) -> String {
    format!(
        "@{} for {}",
        format_milliseconds(start),
        format_milliseconds(end - start)
    )
}
