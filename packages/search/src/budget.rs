//! Budget ceiling extraction from price-range display text.

use regex::Regex;
use std::sync::LazyLock;

/// Regex extracting runs of digits from price-range text.
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Parses the rent ceiling out of a price-range display string.
///
/// The last run of digits is taken as the upper bound in thousands of
/// rupees: `"₹8K - ₹45K"` yields `45_000`.
///
/// Known quirk, preserved deliberately: text with no digit run at all (or a
/// run too large for `u32`) yields `0`, which passes every positive budget
/// filter. Deriving a number from free-form display text degrades
/// permissively rather than erroring.
#[must_use]
pub fn price_ceiling(price_range: &str) -> u32 {
    DIGITS_RE
        .find_iter(price_range)
        .last()
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map_or(0, |thousands| thousands.saturating_mul(1000))
}
