//! Numeric normalization utilities.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Extracts the first run of ASCII digits and parses it as an integer.
///
/// `"34 years"` yields 34, `"about 25-ish"` yields 25, text without digits
/// yields None. A run too large for i64 also yields None.
pub fn first_digit_run(value: &str) -> Option<i64> {
    let start = value.find(|ch: char| ch.is_ascii_digit())?;
    let digits: String = value[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse::<i64>().ok()
}

/// Truncates toward zero and clamps into a closed integer range.
pub fn truncate_and_clamp(value: f64, min: i64, max: i64) -> i64 {
    (value as i64).clamp(min, max)
}

/// Median of the values, using the midpoint convention for even counts.
///
/// Returns None for an empty slice. Callers are expected to pass only
/// finite values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
