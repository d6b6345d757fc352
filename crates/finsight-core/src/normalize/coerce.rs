use crate::model::RawValue;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Extract the most recent scalar from a raw value.
///
/// - `Number` coerces directly.
/// - `Text` is parsed as a formatted amount ("$1,234.56", "(500)").
/// - `Series` takes the **last** element, which upstream extraction orders
///   as most recent.
/// - Anything else yields `None` and the field is dropped by the caller.
pub fn coerce_scalar(raw: &RawValue) -> Option<Decimal> {
    match raw {
        RawValue::Number(f) => decimal_from_f64(*f),
        RawValue::Text(s) => parse_amount(s),
        RawValue::Series(values) => values.last().and_then(coerce_scalar),
        RawValue::Other(_) => None,
    }
}

/// Extract a full time-ordered series, dropping uncoercible entries.
///
/// Returns `None` unless the raw value is a sequence with at least two
/// coercible entries; a shorter result carries no trend information beyond
/// what `coerce_scalar` already yields.
pub fn coerce_series(raw: &RawValue) -> Option<Vec<Decimal>> {
    match raw {
        RawValue::Series(values) => {
            let series: Vec<Decimal> = values.iter().filter_map(coerce_scalar).collect();
            if series.len() >= 2 {
                Some(series)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parse a formatted monetary amount.
///
/// Handles thousands separators, leading currency symbols, and accounting
/// parentheses for negatives. Placeholder markers ("-", "n/a", "") yield
/// `None`, as does anything that is not numeric.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();

    if s.is_empty() || s == "-" || s == "—" || s.eq_ignore_ascii_case("n/a") || s.eq_ignore_ascii_case("n.a.") {
        return None;
    }

    // Accounting negative: (1,234) means -1234
    let (s, negate) = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => (inner.trim(), true),
        None => (s, false),
    };

    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',' | ' ' | '\u{a0}'))
        .collect();

    let value = Decimal::from_str(&cleaned).ok()?;
    Some(if negate { -value } else { value })
}

/// Convert f64 to Decimal, preserving reasonable precision.
///
/// Uses string round-trip to avoid floating-point artifacts
/// (e.g., 0.0035_f64 becoming 0.00349999...). Non-finite input yields
/// `None` so NaN/∞ can never enter a statement.
fn decimal_from_f64(f: f64) -> Option<Decimal> {
    if !f.is_finite() {
        return None;
    }
    let s = format!("{f}");
    s.parse::<Decimal>().ok().or_else(|| Decimal::try_from(f).ok())
}
