// ============================================================================
// Segmented Decimal
// Arbitrary-precision signed decimal stored as fixed-width digit segments
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::segment::{split_fractional_digits, split_integer_digits, SegmentVec};
use std::fmt;
use std::str::FromStr;

use smallvec::smallvec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conventional digit width per segment. Always passed explicitly; there is
/// no hidden mutable default shared across call sites.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Arbitrary-precision signed decimal number.
///
/// The value is stored as a sign flag plus two ordered sequences of
/// digit-string segments, most-significant segment first:
///
/// - integer segments: every segment except possibly the first is exactly
///   `chunk_size` digits wide; the first carries no superfluous leading
///   zeros unless the whole value is zero (`["0"]`).
/// - fractional segments: each `chunk_size` wide, except that trailing zero
///   segments may be retained and constant truncation may leave a narrower
///   final segment.
///
/// Values are immutable: every operation reads its operands and allocates
/// fresh segment storage for its result, so the type is safe to share
/// read-only across threads.
///
/// Two decimals are representationally compatible only when constructed
/// with the same chunk size; mixed-chunk-size arithmetic is unspecified.
///
/// # Example
/// ```
/// use segmented_decimal::prelude::*;
///
/// let a = Decimal::parse("12345678901234567890", 10)?;
/// let b = Decimal::parse("-98765432109876543210", 10)?;
/// assert_eq!((&a + &b).to_string(), "-86419753208641975320.0");
/// # Ok::<(), NumericError>(())
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    /// Sign flag; zero is conventionally non-negative.
    pub(crate) negative: bool,
    /// Digit width per segment, fixed at construction.
    pub(crate) chunk_size: usize,
    /// Integer-part segments, most-significant first. Never empty.
    pub(crate) integer_segments: SegmentVec,
    /// Fractional-part segments, most-significant first.
    pub(crate) fractional_segments: SegmentVec,
    /// Integer digit count captured at parse time. Not refreshed by
    /// arithmetic; comparison reads it as-is.
    pub(crate) full_digits: usize,
    /// Fractional digit count captured at parse time. Same caveat.
    pub(crate) split_digits: usize,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a decimal literal (`[-]digits[.digits]`) at the given chunk
    /// size.
    ///
    /// Integer digits are sliced into chunks from the least-significant
    /// end, fractional digits from the most-significant end.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a zero chunk size, an empty literal, or
    /// any character outside sign / digits / one decimal point.
    pub fn parse(literal: &str, chunk_size: usize) -> NumericResult<Self> {
        if chunk_size == 0 {
            return Err(NumericError::InvalidInput);
        }

        let literal = literal.trim();
        let (negative, unsigned) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal),
        };
        // Checked before the fractional part defaults to "0", which would
        // otherwise make an empty literal look like zero.
        if unsigned.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (integer_digits, fractional_digits) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, "0"),
        };

        let digit_count = integer_digits.len() + fractional_digits.len();
        if digit_count == 0
            || !integer_digits.bytes().all(|b| b.is_ascii_digit())
            || !fractional_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }

        Ok(Self {
            negative,
            chunk_size,
            integer_segments: split_integer_digits(integer_digits, chunk_size),
            fractional_segments: split_fractional_digits(fractional_digits, chunk_size),
            full_digits: integer_digits.len(),
            split_digits: fractional_digits.len(),
        })
    }

    /// Construct from an integer at the given chunk size.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a zero chunk size.
    pub fn from_int(value: i128, chunk_size: usize) -> NumericResult<Self> {
        Self::parse(&value.to_string(), chunk_size)
    }

    /// Construct from a float at the given chunk size.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a zero chunk size or a non-finite value.
    pub fn from_float(value: f64, chunk_size: usize) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        Self::parse(&value.to_string(), chunk_size)
    }

    /// A fresh zero: integer `["0"]`, fractional `["0"]`, non-negative.
    pub fn zero(chunk_size: usize) -> Self {
        Self {
            negative: false,
            chunk_size,
            integer_segments: smallvec!["0".to_string()],
            fractional_segments: smallvec!["0".to_string()],
            full_digits: 1,
            split_digits: 1,
        }
    }

    /// Assemble an arithmetic result from engine output.
    ///
    /// Digit counts are parse-time metadata and deliberately not
    /// recomputed: results carry a fresh zero's counts, matching the
    /// construct-then-fill lifecycle the representation was defined with.
    pub(crate) fn assemble(
        negative: bool,
        chunk_size: usize,
        integer_segments: SegmentVec,
        fractional_segments: SegmentVec,
    ) -> Self {
        Self {
            negative,
            chunk_size,
            integer_segments,
            fractional_segments,
            full_digits: 1,
            split_digits: 1,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Digit width per segment.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Whether the sign flag is set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer-part segments, most-significant first.
    #[inline]
    pub fn integer_segments(&self) -> &[String] {
        &self.integer_segments
    }

    /// Fractional-part segments, most-significant first.
    #[inline]
    pub fn fractional_segments(&self) -> &[String] {
        &self.fractional_segments
    }

    /// Structural equality with a fresh zero: single `"0"` integer and
    /// fractional segments, sign clear. Comparison is structural, so other
    /// segmentations of zero (e.g. `"0.00"`) do not count.
    pub fn is_zero(&self) -> bool {
        !self.negative
            && self.integer_segments.len() == 1
            && self.integer_segments[0] == "0"
            && self.fractional_segments.len() == 1
            && self.fractional_segments[0] == "0"
    }

    /// Truthiness: not structurally equal to zero.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !self.is_zero()
    }

    /// Logical AND on truthiness of both operands.
    #[inline]
    pub fn logical_and(&self, other: &Self) -> bool {
        self.is_truthy() && other.is_truthy()
    }

    /// Logical OR on truthiness of both operands.
    #[inline]
    pub fn logical_or(&self, other: &Self) -> bool {
        self.is_truthy() || other.is_truthy()
    }

    // ========================================================================
    // Sign Operations
    // ========================================================================

    /// Absolute value. Segment storage is deep-copied; derived values never
    /// alias their source.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.negative = false;
        ret
    }

    /// Negation as a method, for call chains; `-&x` is equivalent.
    pub fn negate(&self) -> Self {
        let mut ret = self.clone();
        ret.negative = !self.negative;
        ret
    }

    // ========================================================================
    // Conversions (API boundaries)
    // ========================================================================

    /// Convert from `rust_decimal::Decimal` at the given chunk size.
    ///
    /// Intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// Returns `InvalidInput` for a zero chunk size.
    pub fn from_decimal(value: rust_decimal::Decimal, chunk_size: usize) -> NumericResult<Self> {
        Self::parse(&value.to_string(), chunk_size)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for display/debugging only; values outside the 96-bit
    /// coefficient range of `rust_decimal` do not convert.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the value does not fit.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str(&self.to_string()).map_err(|_| NumericError::InvalidInput)
    }

    /// Floating approximation of the value, used by the exponentiation
    /// shortcut. Precision-losing by design.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the rendered value exceeds the `f64`
    /// range.
    pub fn to_f64(&self) -> NumericResult<f64> {
        let approx: f64 = self
            .to_string()
            .parse()
            .map_err(|_| NumericError::InvalidInput)?;
        if approx.is_finite() {
            Ok(approx)
        } else {
            Err(NumericError::InvalidInput)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero(DEFAULT_CHUNK_SIZE)
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse at [`DEFAULT_CHUNK_SIZE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_CHUNK_SIZE)
    }
}

impl From<i64> for Decimal {
    /// Coerce an integer at [`DEFAULT_CHUNK_SIZE`].
    fn from(value: i64) -> Self {
        Self::from_int(i128::from(value), DEFAULT_CHUNK_SIZE)
            .expect("integer literal always parses at the default chunk size")
    }
}

impl From<i128> for Decimal {
    /// Coerce an integer at [`DEFAULT_CHUNK_SIZE`].
    fn from(value: i128) -> Self {
        Self::from_int(value, DEFAULT_CHUNK_SIZE)
            .expect("integer literal always parses at the default chunk size")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal {
    /// Canonical text form: `[-]<integer-digits>.<fractional-digits-or-"0">`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for segment in &self.integer_segments {
            write!(f, "{}", segment)?;
        }
        write!(f, ".")?;
        if self.fractional_segments.is_empty() {
            write!(f, "0")
        } else {
            for segment in &self.fractional_segments {
                write!(f, "{}", segment)?;
            }
            Ok(())
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, chunk_size={})", self, self.chunk_size)
    }
}

// ============================================================================
// Tests
// ============================================================================
