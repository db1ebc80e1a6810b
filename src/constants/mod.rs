// ============================================================================
// Irrational Constants
// Truncated decimal renditions of pi and e at a wide chunk size
// ============================================================================
//
// Constants are built at a 1000-digit chunk size, so even a long digit
// request lands in a single fractional segment. The digit source is the
// double-precision rendering of each constant; requests beyond the digits
// it carries are satisfied with what is available.

use crate::numeric::segment::{split_fractional_digits, SegmentVec};
use crate::numeric::Decimal;

use smallvec::smallvec;

/// Chunk size used for constant construction. Deliberately much wider than
/// [`crate::numeric::DEFAULT_CHUNK_SIZE`]: mixing constants into default-width arithmetic
/// is only meaningful while every fractional segment stays narrower than
/// both chunk sizes.
pub const CONSTANT_CHUNK_SIZE: usize = 1000;

fn truncated_constant(integer_digit: &str, rendered: &str, digits: usize) -> Decimal {
    let fractional_digits = rendered.split_once('.').map(|(_, frac)| frac).unwrap_or("");
    if digits > fractional_digits.len() {
        tracing::debug!(
            requested = digits,
            available = fractional_digits.len(),
            constant = integer_digit,
            "constant digit request exceeds available precision"
        );
    }
    let kept = &fractional_digits[..digits.min(fractional_digits.len())];

    let mut fractional = split_fractional_digits(kept, CONSTANT_CHUNK_SIZE);
    if fractional.is_empty() {
        fractional.push("0".to_string());
    }
    let integer: SegmentVec = smallvec![integer_digit.to_string()];
    Decimal::assemble(false, CONSTANT_CHUNK_SIZE, integer, fractional)
}

/// Pi truncated to `digits` fractional digits.
pub fn pi(digits: usize) -> Decimal {
    truncated_constant("3", &std::f64::consts::PI.to_string(), digits)
}

/// Euler's number truncated to `digits` fractional digits.
pub fn e(digits: usize) -> Decimal {
    truncated_constant("2", &std::f64::consts::E.to_string(), digits)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_truncation() {
        assert_eq!(pi(5).to_string(), "3.14159");
        assert_eq!(pi(0).to_string(), "3.0");
        assert_eq!(pi(5).chunk_size(), CONSTANT_CHUNK_SIZE);
    }

    #[test]
    fn test_e_truncation() {
        assert_eq!(e(5).to_string(), "2.71828");
        assert_eq!(e(0).to_string(), "2.0");
    }

    #[test]
    fn test_request_beyond_available_digits_is_clamped() {
        assert_eq!(pi(100).to_string(), "3.141592653589793");
        assert_eq!(e(100).to_string(), "2.718281828459045");
    }

    #[test]
    fn test_constants_fit_one_wide_segment() {
        let value = pi(15);
        assert_eq!(value.integer_segments(), ["3"]);
        assert_eq!(value.fractional_segments(), ["141592653589793"]);
    }

    #[test]
    fn test_constant_arithmetic() {
        let sum = &pi(5) + &e(5);
        assert_eq!(sum.to_string(), "5.85987");
    }
}
