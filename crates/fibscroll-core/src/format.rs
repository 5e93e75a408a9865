//! Display formatting for sequence terms.

use crate::constants::{SCIENTIFIC_INDEX_THRESHOLD, SCIENTIFIC_VALUE_THRESHOLD};
use crate::evaluator::{Index, Term};

/// Format a term for display.
///
/// Large indices or magnitudes use normalized scientific notation with two
/// fractional digits (`1.55e+12`); everything else is a grouped integer
/// (`-832,040`).
#[must_use]
pub fn format_term(index: Index, term: Term) -> String {
    if !term.is_finite() {
        return format_non_finite(term);
    }
    if index.unsigned_abs() >= SCIENTIFIC_INDEX_THRESHOLD || term.abs() > SCIENTIFIC_VALUE_THRESHOLD
    {
        format_scientific(term)
    } else {
        format_grouped(term)
    }
}

/// Scientific notation with two fractional digits and an explicit exponent sign.
#[must_use]
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.2e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Integer with thousand separators.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if rounded < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_negative() {
        "-Infinity".to_string()
    } else {
        "Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_small_values() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(55.0), "55");
        assert_eq!(format_grouped(6765.0), "6,765");
        assert_eq!(format_grouped(832_040.0), "832,040");
        assert_eq!(format_grouped(-832_040.0), "-832,040");
        assert_eq!(format_grouped(12_586_269_025.0), "12,586,269,025");
    }

    #[test]
    fn scientific_shape() {
        assert_eq!(format_scientific(1_548_008_755_920.0), "1.55e+12");
        assert_eq!(format_scientific(-1_548_008_755_920.0), "-1.55e+12");
        assert_eq!(format_scientific(0.0), "0.00e+0");
        assert_eq!(format_scientific(0.001_5), "1.50e-3");
    }

    #[test]
    fn index_threshold_switches_to_scientific() {
        assert_eq!(format_term(59, 956_722_026_041.0), "956,722,026,041");
        assert_eq!(format_term(60, 1_548_008_755_920.0), "1.55e+12");
        assert_eq!(format_term(-60, -1_548_008_755_920.0), "-1.55e+12");
    }

    #[test]
    fn value_threshold_switches_to_scientific() {
        // Index below the threshold, value above it.
        assert_eq!(format_term(10, 2e12), "2.00e+12");
        assert_eq!(format_term(10, 1e12), "1,000,000,000,000");
    }

    #[test]
    fn non_finite_terms() {
        assert_eq!(format_term(1500, f64::INFINITY), "Infinity");
        assert_eq!(format_term(-1500, f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_term(0, f64::NAN), "NaN");
    }
}
