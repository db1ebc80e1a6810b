// ============================================================================
// Segmented Decimal Library
// Arbitrary-precision decimal arithmetic over fixed-width digit segments
// ============================================================================

//! # Segmented Decimal
//!
//! An arbitrary-precision signed decimal number built from fixed-width
//! digit segments, with no reliance on native fixed-width numeric types
//! for the digits themselves.
//!
//! ## Features
//!
//! - **Segmented representation** with a configurable digit width per
//!   segment ("chunk size", default 10)
//! - **Schoolbook arithmetic** over the segments: carry/borrow addition
//!   and subtraction, convolution multiplication, chunk-wise long division
//! - **Rounding family** (round / ceil / floor) at a requested fractional
//!   digit count, including coarse chunk-boundary rounding of the integer
//!   part
//! - **Irrational constants** pi and e truncated to a requested digit
//!   count at a 1000-digit chunk size
//! - **A degenerate imaginary unit** with a closed operation set
//!
//! ## Example
//!
//! ```rust
//! use segmented_decimal::prelude::*;
//!
//! let a: Decimal = "12345678901234567890".parse()?;
//! let b: Decimal = "-98765432109876543210".parse()?;
//!
//! assert_eq!((&a + &b).to_string(), "-86419753208641975320.0");
//! assert_eq!((&a - &b).to_string(), "111111111011111111100.0");
//! assert_eq!(pi(5).to_string(), "3.14159");
//!
//! let i = Numeric::imaginary();
//! assert_eq!(i.checked_mul(&i)?, Numeric::real(Decimal::from(-1i64)));
//! # Ok::<(), NumericError>(())
//! ```

pub mod constants;
pub mod numeric;
pub mod value;

// Re-exports for convenience
pub mod prelude {
    pub use crate::constants::{e, pi, CONSTANT_CHUNK_SIZE};
    pub use crate::numeric::{Decimal, NumericError, NumericResult, DEFAULT_CHUNK_SIZE};
    pub use crate::value::Numeric;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn dec(literal: &str) -> Decimal {
        Decimal::parse(literal, 10).unwrap()
    }

    #[test]
    fn test_twenty_digit_arithmetic_end_to_end() {
        let a = dec("12345678901234567890");
        let b = dec("-98765432109876543210");

        assert_eq!(a.to_string(), "12345678901234567890.0");
        assert_eq!(b.to_string(), "-98765432109876543210.0");

        let c = &a + &b;
        assert_eq!(c.to_string(), "-86419753208641975320.0");

        let d = &a + &dec("11111111111111111111");
        assert_eq!(d.to_string(), "23456790012345679001.0");

        let e = &b - &a;
        assert_eq!(e.to_string(), "-111111111011111111100.0");

        let f = &a - &dec("12345678901234567890");
        assert_eq!(f.to_string(), "0.0");
    }

    #[test]
    fn test_multiplication_and_division_end_to_end() {
        let g = &dec("100000") * &dec("100000");
        assert_eq!(g.to_string(), "10000000000.0");

        let h = &dec("-12345") * &dec("67890");
        assert_eq!(h.to_string(), "-838102050.0");

        let i = &g / &dec("100000");
        assert_eq!(i.to_string(), "100000.0");

        let j = &dec("927743737372291") / &dec("97531");
        assert_eq!(j.to_string(), "9512295961.0");
    }

    #[test]
    fn test_rounding_end_to_end() {
        let k = dec("9");
        assert_eq!(k.ceil(1).to_string(), "9.0");
        assert_eq!(k.floor(1).to_string(), "9.0");
        assert_eq!(k.round(1).to_string(), "9.0");

        let l = dec("-9.3");
        assert_eq!(l.ceil(0).to_string(), "-9.0");
        assert_eq!(l.floor(0).to_string(), "-10.0");
    }

    #[test]
    fn test_comparisons_end_to_end() {
        let a = dec("12345678901234567890");
        let b = dec("-98765432109876543210");

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, dec("12345678901234567890"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_constants_and_imaginary_unit_end_to_end() {
        assert_eq!(pi(10).to_string(), "3.1415926535");
        assert_eq!(e(10).to_string(), "2.7182818284");
        assert_eq!(CONSTANT_CHUNK_SIZE, 1000);

        let i = Numeric::imaginary();
        let minus_one = i.checked_mul(&i).unwrap();
        assert_eq!(minus_one, Numeric::real(Decimal::from(-1i64)));
        assert_eq!(i.checked_pow(&Numeric::real(dec("4"))).unwrap().to_string(), "1.0");
        assert!(i
            .checked_add(&Numeric::real(dec("1")))
            .is_err());
    }

    #[test]
    fn test_default_chunk_size_round_trip() {
        let x: Decimal = "3.1415".parse().unwrap();
        assert_eq!(x.chunk_size(), DEFAULT_CHUNK_SIZE);
        let again: Decimal = x.to_string().parse().unwrap();
        assert_eq!(x, again);
    }
}
