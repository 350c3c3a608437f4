use chrono::{DateTime, Utc};

/// Fixed-width UTC timestamp, e.g. `2025-06-01T17:30:00.000000`.
///
/// Summaries compare timestamps as strings, so every writer must use this
/// exact shape (always six fractional digits, no offset suffix).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_currency(v: f64) -> String {
    format!("{v:.2}")
}

/// Parse a cost argument: finite and not negative.
pub fn parse_cost(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("cost must be a finite number >= 0, got {s}"));
    }
    Ok(v)
}
