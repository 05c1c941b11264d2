//! Currency string normalization.

/// Parse a human-formatted currency string such as `"$12,345.67"`.
///
/// Every character other than an ASCII digit or `.` is discarded and the
/// longest numeric prefix of what remains is parsed, so `"1.2.3"` reads as
/// `1.2`. Returns `NaN` when nothing numeric is left, and infinity when the
/// digits overflow `f64`; callers must gate the result with [`crate::is_valid`].
pub fn parse_currency(input: &str) -> f64 {
    let kept: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let end = kept
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map_or(kept.len(), |(i, _)| i);

    kept[..end].parse::<f64>().unwrap_or(f64::NAN)
}
