//! # Money Module
//!
//! Fixed-precision rounding for report amounts.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Aggregation runs on raw f64 values. Nothing is rounded until the      │
//! │  output shaper builds a ReportRow:                                      │
//! │                                                                         │
//! │    SellerStats.revenue  123.456000000000003...                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    round_amount() ← THIS MODULE                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    ReportRow.revenue    123.46                                          │
//! │                                                                         │
//! │  Rounding earlier would change profits (and therefore ranks) for       │
//! │  sellers with many small line items.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! The result equals formatting the number with a fixed number of fractional
//! digits and parsing it back. Midpoints round away from zero, and the
//! midpoint test is done against the exact binary value of the `f64`, not its
//! shortest decimal spelling:
//!
//! ```rust
//! use sales_core::money::round_amount;
//!
//! assert_eq!(round_amount(123.456), 123.46);
//! assert_eq!(round_amount(0.125), 0.13);   // exact tie, away from zero
//! assert_eq!(round_amount(1.005), 1.0);    // stored as 1.00499999...
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept in report amounts.
pub const REPORT_PRECISION: u32 = 2;

/// Rounds `value` to [`REPORT_PRECISION`] fractional digits.
#[inline]
pub fn round_amount(value: f64) -> f64 {
    round_to(value, REPORT_PRECISION)
}

/// Rounds `value` to `digits` fractional digits, midpoints away from zero.
///
/// NaN, infinities and magnitudes outside the decimal range are returned
/// unchanged.
///
/// ## Example
/// ```rust
/// use sales_core::money::round_to;
///
/// assert_eq!(round_to(2.71828, 3), 2.718);
/// assert_eq!(round_to(-0.125, 2), -0.13);
/// assert_eq!(round_to(7.0, 0), 7.0);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_string().parse().ok())
        .unwrap_or(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up_and_down() {
        assert_eq!(round_amount(123.456), 123.46);
        assert_eq!(round_amount(123.444), 123.44);
    }

    #[test]
    fn test_exact_ties_go_away_from_zero() {
        assert_eq!(round_amount(0.125), 0.13);
        assert_eq!(round_amount(0.375), 0.38);
        assert_eq!(round_amount(-0.125), -0.13);
    }

    /// 1.005 and 1.115 are not midpoints once stored as f64.
    #[test]
    fn test_binary_value_decides_near_ties() {
        assert_eq!(round_amount(1.005), 1.0);
        assert_eq!(round_amount(1.115), 1.11);
    }

    #[test]
    fn test_already_rounded_values_are_unchanged() {
        assert_eq!(round_amount(270.0), 270.0);
        assert_eq!(round_amount(75.0), 75.0);
        assert_eq!(round_amount(0.1 + 0.2), 0.3);
        assert_eq!(round_amount(0.0), 0.0);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(round_amount(-42.666), -42.67);
        assert_eq!(round_amount(-42.661), -42.66);
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(round_to(2.71828, 3), 2.718);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(10.0 / 3.0, 4), 3.3333);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_amount(f64::NAN).is_nan());
        assert_eq!(round_amount(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_amount(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
