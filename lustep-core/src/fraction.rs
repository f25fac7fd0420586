//! Rational display of matrix entries and multipliers
//!
//! Values are shown as a reduced fraction with a small denominator when one
//! approximates them well, and as a fixed two-decimal string otherwise.

use crate::constants::fraction::{
    DECIMAL_PLACES, EXACT_EPSILON, MAX_DISPLAY_DENOMINATOR, MAX_ERROR, MAX_SEARCH_DENOMINATOR,
};

/// Magnitudes at or above this are never searched for a fraction
const MAX_FRACTION_MAGNITUDE: f64 = 1.0e15;

/// A reduced fraction `±numerator/denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub negative: bool,
    pub numerator: u64,
    pub denominator: u64,
}

impl Fraction {
    /// Approximate `value` by a fraction suitable for display
    ///
    /// Tries every denominator in `1..=100`, keeping the one with the
    /// smallest error and stopping at the first near-exact hit. Returns
    /// `None` when the reduced denominator exceeds 20 or the best error
    /// exceeds 0.01.
    pub fn approximate(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let negative = value < 0.0;
        let magnitude = value.abs();
        if magnitude >= MAX_FRACTION_MAGNITUDE {
            return None;
        }

        let mut best_denom: u32 = 1;
        let mut best_error = (magnitude - magnitude.round()).abs();

        for denom in 2..=MAX_SEARCH_DENOMINATOR {
            let d = f64::from(denom);
            let error = (magnitude - (magnitude * d).round() / d).abs();
            if error < best_error {
                best_error = error;
                best_denom = denom;
                if error < EXACT_EPSILON {
                    break;
                }
            }
        }

        let best_numer = (magnitude * f64::from(best_denom)).round() as u64;
        let divisor = gcd(best_numer, u64::from(best_denom));
        let numerator = best_numer / divisor;
        let denominator = u64::from(best_denom) / divisor;

        if denominator > MAX_DISPLAY_DENOMINATOR || best_error > MAX_ERROR {
            return None;
        }

        Some(Self {
            negative,
            numerator,
            denominator,
        })
    }

    /// Numeric value of the fraction
    pub fn to_f64(self) -> f64 {
        let magnitude = self.numerator as f64 / self.denominator as f64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl core::fmt::Display for Fraction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // A value that rounds to zero drops its sign
        if self.numerator == 0 {
            return write!(f, "0");
        }
        let sign = if self.negative { "-" } else { "" };
        if self.denominator == 1 {
            write!(f, "{sign}{}", self.numerator)
        } else {
            write!(f, "{sign}{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Greatest common divisor (Euclid). `gcd(0, d) == d`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Format a value for display, preferring a simple fraction
///
/// `0`, `1` and `-1` are returned verbatim. Anything without a good
/// small-denominator approximation falls back to two decimals.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value == 1.0 {
        return "1".to_string();
    }
    if value == -1.0 {
        return "-1".to_string();
    }

    match Fraction::approximate(value) {
        Some(fraction) => fraction.to_string(),
        None => format_decimal(value),
    }
}

/// Format a value with two decimal places, without a negative zero
///
/// Ties round away from zero (`0.125` -> `"0.13"`), not to even.
pub fn format_decimal(value: f64) -> String {
    let scale = 10f64.powi(DECIMAL_PLACES as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };
    let text = format!("{rounded:.prec$}", prec = DECIMAL_PLACES);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Parse a display string back into a value
///
/// Accepts the forms produced by [`format_value`]: integers, `n/d`
/// fractions and decimals, each optionally signed. Returns `None` for
/// anything else, including a zero denominator.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some((numer, denom)) = text.split_once('/') {
        let numer: f64 = numer.trim().parse().ok()?;
        let denom: f64 = denom.trim().parse().ok()?;
        if denom == 0.0 {
            return None;
        }
        let value = numer / denom;
        return value.is_finite().then_some(value);
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(-1.0), "-1");
    }

    #[test]
    fn test_simple_fractions() {
        assert_eq!(format_value(0.5), "1/2");
        assert_eq!(format_value(0.3333333333), "1/3");
        assert_eq!(format_value(1.5), "3/2");
        assert_eq!(format_value(-1.5), "-3/2");
        assert_eq!(format_value(-0.25), "-1/4");
        assert_eq!(format_value(2.0 / 3.0), "2/3");
        assert_eq!(format_value(0.05), "1/20");
        assert_eq!(format_value(1.0 / 7.0), "1/7");
    }

    #[test]
    fn test_integers() {
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(-6.0), "-6");
        assert_eq!(format_value(42.0), "42");
    }

    #[test]
    fn test_decimal_fallback() {
        // Best denominator reduces to 25, which is too large to show
        assert_eq!(format_value(0.04), "0.04");
        assert_eq!(format_value(0.123456), "0.12");
        assert_eq!(format_value(-0.123456), "-0.12");
        assert_eq!(format_value(f64::INFINITY), "inf");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(format_value(0.004), "0");
        assert_eq!(format_value(-0.004), "0");
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn test_approximate_rejects() {
        assert_eq!(Fraction::approximate(f64::NAN), None);
        assert_eq!(Fraction::approximate(0.04), None);
        let half = Fraction::approximate(-0.5).unwrap();
        assert_eq!(
            half,
            Fraction {
                negative: true,
                numerator: 1,
                denominator: 2
            }
        );
        assert_eq!(half.to_f64(), -0.5);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.5), "1.50");
        assert_eq!(format_decimal(-0.001), "0.00");
        assert_eq!(format_decimal(-2.0), "-2.00");
    }

    #[test]
    fn test_format_decimal_ties_round_away_from_zero() {
        assert_eq!(format_decimal(0.125), "0.13");
        assert_eq!(format_decimal(-0.125), "-0.13");
        assert_eq!(format_decimal(2.375), "2.38");
        assert_eq!(format_decimal(f64::MAX), format!("{:.2}", f64::MAX));
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        // Decimal fallback keeps the sign; a value that approximates to zero
        // never prints as "-0"
        assert_eq!(format_value(-0.123456), "-0.12");
        assert_eq!(format_value(-0.04), "-0.04");
        assert_eq!(format_value(-0.004), "0");
        assert_eq!(format_value(-0.0049), "0");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("3/2"), Some(1.5));
        assert_eq!(parse_value("-1/4"), Some(-0.25));
        assert_eq!(parse_value(" 2 "), Some(2.0));
        assert_eq!(parse_value("0.12"), Some(0.12));
        assert_eq!(parse_value("1/0"), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn test_canonical_output_is_stable() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let value: f64 = rng.gen_range(-10.0..10.0);
            let shown = format_value(value);
            let parsed = parse_value(&shown).unwrap();
            assert!((parsed - value).abs() <= 0.01, "{value} -> {shown}");
            let reparsed = parse_value(&format_value(parsed)).unwrap();
            assert!((reparsed - parsed).abs() <= 0.01, "{value} -> {shown}");
        }
    }
}
