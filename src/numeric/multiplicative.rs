// ============================================================================
// Multiplicative Engine
// Schoolbook segment convolution, chunk-wise long division, exponentiation
// ============================================================================
//
// Known representational boundaries, preserved deliberately and pinned in
// the tests below rather than silently corrected:
//
// - Multiplication convolves integer segments against integer segments and
//   fractional segments against fractional segments, with no cross terms.
//   Products are therefore only correct when both operands are integral.
// - Division walks the dividend's integer segments against the divisor's
//   integer segments read as one concatenated integer; fractional digits
//   of both operands are ignored and the quotient is integer-only.

use super::decimal::Decimal;
use super::errors::{NumericError, NumericResult};
use super::segment::{chunk_base, pad_segment, segment_value, strip_leading_zeros, SegmentVec};
use num_bigint::BigUint;
use num_traits::Zero;
use std::ops::{Div, Mul};

use smallvec::smallvec;

/// Convolve two reversed segment lists into a little-endian accumulator of
/// length `len(a) + len(b)`, propagating carries modulo the chunk base.
fn convolve_segments(a: &[String], b: &[String], base: &BigUint) -> Vec<BigUint> {
    let mut accumulator = vec![BigUint::zero(); a.len() + b.len()];
    for (i, x) in a.iter().rev().enumerate() {
        let x_value = segment_value(x);
        for (j, y) in b.iter().rev().enumerate() {
            let product = &x_value * segment_value(y) + &accumulator[i + j];
            accumulator[i + j] = &product % base;
            accumulator[i + j + 1] += &product / base;
        }
    }
    accumulator
}

impl Decimal {
    /// Long division over the integer segments.
    ///
    /// Walks the dividend most-significant-first, combining a running
    /// remainder with each segment (`remainder * chunk_base + segment`)
    /// and dividing by the divisor's integer segments read as a single
    /// integer. The result sign is the XOR of the operand signs.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor is zero, including a
    /// divisor whose integer part is zero (fractional digits do not
    /// participate in division).
    pub fn checked_div(&self, divisor: &Decimal) -> NumericResult<Decimal> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let divisor_value = segment_value(&divisor.integer_segments.concat());
        if divisor_value.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let base = chunk_base(self.chunk_size);
        let mut remainder = BigUint::zero();
        let mut quotient = SegmentVec::new();
        for segment in &self.integer_segments {
            let current = &remainder * &base + segment_value(segment);
            quotient.push(pad_segment(&(&current / &divisor_value), self.chunk_size));
            remainder = current % &divisor_value;
        }

        // A redundant all-zero leading chunk is dropped; the list never
        // empties below a single "0" segment.
        if segment_value(&quotient[0]).is_zero() {
            quotient.remove(0);
        }
        if quotient.is_empty() {
            quotient.push("0".to_string());
        }
        quotient[0] = strip_leading_zeros(&quotient[0]);

        Ok(Decimal::assemble(
            self.negative != divisor.negative,
            self.chunk_size,
            quotient,
            smallvec!["0".to_string()],
        ))
    }

    /// Exponentiation through a floating approximation.
    ///
    /// `0**0` is undefined; `x**0` is one; `0**y` is zero. Every other
    /// case renders both operands, computes `powf`, and reconstructs a
    /// decimal from the float result — a deliberate precision-losing
    /// shortcut, not arbitrary-precision exponentiation.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` for `0**0` and `InvalidInput` when
    /// either operand or the result exceeds the `f64` range.
    pub fn checked_pow(&self, exponent: &Decimal) -> NumericResult<Decimal> {
        if self.is_zero() && exponent.is_zero() {
            return Err(NumericError::UndefinedOperation);
        }
        if exponent.is_zero() {
            return Decimal::from_int(1, self.chunk_size);
        }
        if self.is_zero() {
            return Decimal::from_int(0, self.chunk_size);
        }

        let base = self.to_f64()?;
        let power = exponent.to_f64()?;
        tracing::trace!(base = %self, exponent = %exponent, "computing power through f64 approximation");
        Decimal::from_float(base.powf(power), self.chunk_size)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Mul for &Decimal {
    type Output = Decimal;

    /// Segment-convolution multiplication. The result sign is the XOR of
    /// the operand signs.
    fn mul(self, rhs: Self) -> Decimal {
        let base = chunk_base(self.chunk_size);

        let mut integer_acc = convolve_segments(&self.integer_segments, &rhs.integer_segments, &base);
        let mut fractional_acc =
            convolve_segments(&self.fractional_segments, &rhs.fractional_segments, &base);

        // Trim zero entries: high-order for the integer accumulator,
        // low-order for the fractional accumulator (both little-endian).
        while integer_acc.len() > 1 && integer_acc.last().is_some_and(Zero::is_zero) {
            integer_acc.pop();
        }
        while fractional_acc.len() > 1 && fractional_acc.first().is_some_and(Zero::is_zero) {
            fractional_acc.remove(0);
        }

        let mut integer: SegmentVec = integer_acc
            .iter()
            .rev()
            .map(|value| pad_segment(value, self.chunk_size))
            .collect();
        let mut fractional: SegmentVec = fractional_acc
            .iter()
            .rev()
            .map(|value| pad_segment(value, self.chunk_size))
            .collect();

        if fractional.is_empty() {
            fractional.push("0".to_string());
        }
        integer[0] = strip_leading_zeros(&integer[0]);
        fractional[0] = strip_leading_zeros(&fractional[0]);

        Decimal::assemble(
            self.negative != rhs.negative,
            self.chunk_size,
            integer,
            fractional,
        )
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Decimal {
        &self * &rhs
    }
}

impl Mul<i64> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: i64) -> Decimal {
        self * &Decimal::from(rhs)
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    /// Infallible division for ergonomics (panics on a zero divisor — use
    /// `checked_div` in production).
    fn div(self, rhs: Self) -> Decimal {
        self.checked_div(rhs).expect("decimal division by zero")
    }
}

impl Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Decimal {
        &self / &rhs
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(literal: &str) -> Decimal {
        Decimal::parse(literal, 10).unwrap()
    }

    #[test]
    fn test_multiplication_crossing_chunk_boundary() {
        let g = &dec("100000") * &dec("100000");
        assert_eq!(g.to_string(), "10000000000.0");
        assert_eq!(g.integer_segments(), ["1", "0000000000"]);
    }

    #[test]
    fn test_multiplication_sign_is_xor() {
        let h = &dec("-12345") * &dec("67890");
        assert_eq!(h.to_string(), "-838102050.0");

        let pos = &dec("-12345") * &dec("-67890");
        assert_eq!(pos.to_string(), "838102050.0");
    }

    #[test]
    fn test_multiplication_by_zero() {
        let zero = &dec("0") * &dec("12345678901234567890");
        assert_eq!(zero.to_string(), "0.0");
    }

    #[test]
    fn test_multiplication_by_scalar() {
        let x = &dec("111") * 3i64;
        assert_eq!(x.to_string(), "333.0");
    }

    #[test]
    fn test_fractional_segments_do_not_cross_multiply() {
        // Known boundary: integer and fractional convolutions are
        // independent, so products with fractional operands are not
        // positionally correct. 1.5 * 1.5 keeps 1*1 and 5*5 apart, and the
        // fractional product lands one accumulator position low.
        let x = dec("1.5");
        let product = &x * &x;
        assert_eq!(product.to_string(), "1.00000000025");
    }

    #[test]
    fn test_division_exact() {
        let i = &dec("10000000000") / &dec("100000");
        assert_eq!(i.to_string(), "100000.0");

        let j = &dec("927743737372291") / &dec("97531");
        assert_eq!(j.to_string(), "9512295961.0");
    }

    #[test]
    fn test_division_truncates() {
        let q = dec("7").checked_div(&dec("2")).unwrap();
        assert_eq!(q.to_string(), "3.0");
    }

    #[test]
    fn test_division_sign_is_xor() {
        let q = &dec("-10") / &dec("2");
        assert_eq!(q.to_string(), "-5.0");
        let q = &dec("-10") / &dec("-2");
        assert_eq!(q.to_string(), "5.0");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            dec("1").checked_div(&dec("0")),
            Err(NumericError::DivisionByZero)
        );
        // Fractional digits do not participate: a divisor with a zero
        // integer part is a zero divisor here
        assert_eq!(
            dec("1").checked_div(&dec("0.5")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_quotient_smaller_than_divisor() {
        let q = dec("1").checked_div(&dec("2")).unwrap();
        assert_eq!(q.to_string(), "0.0");
    }

    #[test]
    fn test_pow_edge_cases() {
        let zero = dec("0");
        let two = dec("2");

        assert_eq!(
            zero.checked_pow(&zero),
            Err(NumericError::UndefinedOperation)
        );
        assert_eq!(two.checked_pow(&zero).unwrap().to_string(), "1.0");
        assert_eq!(zero.checked_pow(&two).unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_pow_through_float_approximation() {
        let two = dec("2");
        assert_eq!(two.checked_pow(&dec("10")).unwrap().to_string(), "1024.0");

        let root = two.checked_pow(&dec("0.5")).unwrap();
        assert_eq!(root.to_string(), "1.4142135623730951");
    }

    proptest! {
        #[test]
        fn multiplication_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let x = Decimal::from(a);
            let y = Decimal::from(b);
            prop_assert_eq!(&x * &y, &y * &x);
        }

        #[test]
        fn integer_multiplication_matches_native(a in 1i64..1_000_000, b in 1i64..1_000_000) {
            let x = Decimal::from(a);
            let y = Decimal::from(b);
            let product = i128::from(a) * i128::from(b);
            prop_assert_eq!((&x * &y).to_string(), format!("{}.0", product));
            prop_assert_eq!((&-&x * &y).to_string(), format!("-{}.0", product));
            prop_assert_eq!((&-&x * &-&y).to_string(), format!("{}.0", product));
        }

        #[test]
        fn exact_division_inverts_multiplication(q in 1i64..1_000_000, b in 1i64..1_000_000) {
            let product = Decimal::from(i128::from(q) * i128::from(b));
            let divisor = Decimal::from(b);
            let quotient = product.checked_div(&divisor).unwrap();
            prop_assert_eq!(&quotient, &Decimal::from(q));
            prop_assert_eq!(&quotient * &divisor, product);
        }
    }
}
