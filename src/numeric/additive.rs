// ============================================================================
// Additive Engine
// Same-sign magnitude addition and magnitude subtraction with carry/borrow
// ============================================================================

use super::decimal::Decimal;
use super::segment::{chunk_base, segment_value, strip_leading_zeros, SegmentVec};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use std::ops::{Add, Neg, Sub};

use smallvec::smallvec;

impl Decimal {
    /// Magnitude addition. Callers guarantee both operands carry the same
    /// sign; the result inherits it.
    ///
    /// Fractional segments are right-padded with `"0"` segments to equal
    /// length and summed least-significant first; the running carry then
    /// continues into the integer segments, which are left-padded and
    /// summed the same way. A segment sum wider than the chunk size keeps
    /// its low chunk and carries the rest.
    ///
    /// Result segments are not re-padded to the chunk width, so a segment
    /// narrower than the chunk can absorb digits that padding would have
    /// carried onward. See the chunk-width tests below, which pin this
    /// boundary.
    pub(crate) fn magnitude_add(&self, other: &Decimal) -> Decimal {
        let chunk_size = self.chunk_size;
        let mut carry = BigUint::zero();

        let frac_len = self
            .fractional_segments
            .len()
            .max(other.fractional_segments.len());
        let mut fractional = SegmentVec::new();
        for idx in (0..frac_len).rev() {
            let x = self
                .fractional_segments
                .get(idx)
                .map(String::as_str)
                .unwrap_or("0");
            let y = other
                .fractional_segments
                .get(idx)
                .map(String::as_str)
                .unwrap_or("0");
            let sum = (segment_value(x) + segment_value(y) + &carry).to_string();
            if sum.len() > chunk_size {
                let split = sum.len() - chunk_size;
                fractional.insert(0, sum[split..].to_string());
                carry = segment_value(&sum[..split]);
            } else {
                fractional.insert(0, sum);
                carry = BigUint::zero();
            }
        }
        // Trim trailing all-zero fractional segments
        while fractional.last().map(String::as_str) == Some("0") {
            fractional.pop();
        }

        // The carry left over from the fractional chain flows into the
        // least significant integer segment.
        let int_len = self
            .integer_segments
            .len()
            .max(other.integer_segments.len());
        let self_offset = int_len - self.integer_segments.len();
        let other_offset = int_len - other.integer_segments.len();
        let mut integer = SegmentVec::new();
        for idx in (0..int_len).rev() {
            let x = if idx >= self_offset {
                self.integer_segments[idx - self_offset].as_str()
            } else {
                "0"
            };
            let y = if idx >= other_offset {
                other.integer_segments[idx - other_offset].as_str()
            } else {
                "0"
            };
            let sum = (segment_value(x) + segment_value(y) + &carry).to_string();
            if sum.len() > chunk_size {
                let split = sum.len() - chunk_size;
                integer.insert(0, sum[split..].to_string());
                carry = segment_value(&sum[..split]);
            } else {
                integer.insert(0, sum);
                carry = BigUint::zero();
            }
        }
        if !carry.is_zero() {
            integer.insert(0, carry.to_string());
        }
        integer[0] = strip_leading_zeros(&integer[0]);

        Decimal::assemble(self.negative, chunk_size, integer, fractional)
    }

    /// Magnitude subtraction over the integer segments.
    ///
    /// The larger operand is detected by lexicographic comparison of the
    /// integer segment lists (on full equality, the non-negative operand
    /// counts as larger); the smaller is left-padded and subtracted
    /// least-significant first, borrowing a whole chunk base when a
    /// segment goes under. The result's sign is the detected larger
    /// operand's, negated when that operand was the right-hand side.
    ///
    /// Fractional segments do not participate; the result carries a plain
    /// `["0"]` fractional part.
    pub(crate) fn magnitude_sub(&self, other: &Decimal) -> Decimal {
        let self_larger = if self.integer_segments != other.integer_segments {
            self.integer_segments.as_slice() > other.integer_segments.as_slice()
        } else {
            !self.negative
        };
        let (larger, smaller) = if self_larger {
            (self, other)
        } else {
            (other, self)
        };
        let negative = if self_larger {
            self.negative
        } else {
            !self.negative
        };

        let base = BigInt::from(chunk_base(self.chunk_size));
        let len = larger.integer_segments.len();
        let offset = len - smaller.integer_segments.len();

        let mut segments = SegmentVec::new();
        let mut borrow = false;
        for idx in (0..len).rev() {
            let mut x = BigInt::from(segment_value(&larger.integer_segments[idx]));
            if borrow {
                x -= 1;
            }
            let y = if idx >= offset {
                BigInt::from(segment_value(&smaller.integer_segments[idx - offset]))
            } else {
                BigInt::zero()
            };
            if x < y {
                borrow = true;
                x += &base;
            } else {
                borrow = false;
            }
            segments.push((x - y).to_string());
        }
        segments.reverse();
        while segments.len() > 1 && segments[0] == "0" {
            segments.remove(0);
        }

        Decimal::assemble(
            negative,
            self.chunk_size,
            segments,
            smallvec!["0".to_string()],
        )
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for &Decimal {
    type Output = Decimal;

    /// Signed addition: same signs add magnitudes; opposite signs resolve
    /// through magnitude subtraction with the operand order chosen so the
    /// positive-equivalent magnitude is subtracted correctly.
    fn add(self, rhs: Self) -> Decimal {
        if self.negative == rhs.negative {
            self.magnitude_add(rhs)
        } else if self.negative {
            rhs.magnitude_sub(self)
        } else {
            self.magnitude_sub(rhs)
        }
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        &self + &rhs
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    /// Subtraction is addition of the negation.
    fn sub(self, rhs: Self) -> Decimal {
        self + &rhs.negate()
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        &self - &rhs
    }
}

// Integer operands are coerced through the codec at the default chunk size.
impl Add<i64> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: i64) -> Decimal {
        self + &Decimal::from(rhs)
    }
}

impl Add<&Decimal> for i64 {
    type Output = Decimal;

    /// Reverse addition delegates to the decimal addition path.
    fn add(self, rhs: &Decimal) -> Decimal {
        rhs + self
    }
}

impl Sub<i64> for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: i64) -> Decimal {
        self - &Decimal::from(rhs)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negate()
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negate()
    }
}

// ============================================================================
// Tests
// ============================================================================
