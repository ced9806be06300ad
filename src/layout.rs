//! Embed geometry and length normalization.

use serde::{Deserialize, Serialize};

/// Fallback numeral for absent or non-numeric length attributes.
pub const LENGTH_FALLBACK: i64 = 0;

/// On-page geometry of an embed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Coerce a raw length attribute value to its numeral form.
///
/// Valid lengths yield their leading integral value (`"100"` and `"100px"`
/// both yield `100`); absent or non-numeric input yields
/// [`LENGTH_FALLBACK`] rather than an error.
pub fn length_numeral(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return LENGTH_FALLBACK;
    };
    let trimmed = raw.trim();
    let digits_len = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    trimmed[..digits_len].parse().unwrap_or(LENGTH_FALLBACK)
}
