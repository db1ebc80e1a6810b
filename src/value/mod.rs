// ============================================================================
// Numeric Value
// Sum type over real decimals and the degenerate imaginary unit
// ============================================================================
//
// The imaginary unit carries no segments and supports only a closed handful
// of operations: multiplication with another unit, multiplication/division
// by a real unit value, fourth-power cycling, truthiness and the logical
// connectives. Everything else is an undefined operation — this is not a
// complex-number algebra, only the degenerate variant.

use crate::numeric::segment::segment_value;
use crate::numeric::{Decimal, NumericError, NumericResult};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A real decimal or the imaginary unit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Numeric {
    /// An ordinary decimal value.
    Real(Decimal),
    /// `i` or `-i`. No segment storage; the sign is the whole state.
    Imaginary { negative: bool },
}

impl Numeric {
    /// Wrap a decimal.
    #[inline]
    pub fn real(value: Decimal) -> Self {
        Numeric::Real(value)
    }

    /// The positive imaginary unit.
    #[inline]
    pub fn imaginary() -> Self {
        Numeric::Imaginary { negative: false }
    }

    /// Whether a real operand is exactly the unit magnitude `1`, the only
    /// real factor the imaginary unit accepts.
    fn is_unit_magnitude(value: &Decimal) -> bool {
        value.integer_segments() == ["1"]
            && value
                .fractional_segments()
                .iter()
                .all(|segment| segment_value(segment).is_zero())
    }

    /// Addition.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` when either operand is imaginary.
    pub fn checked_add(&self, other: &Numeric) -> NumericResult<Numeric> {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => Ok(Numeric::Real(a + b)),
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Subtraction.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` when either operand is imaginary.
    pub fn checked_sub(&self, other: &Numeric) -> NumericResult<Numeric> {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => Ok(Numeric::Real(a - b)),
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Negation.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` for the imaginary unit.
    pub fn checked_neg(&self) -> NumericResult<Numeric> {
        match self {
            Numeric::Real(a) => Ok(Numeric::Real(-a)),
            Numeric::Imaginary { .. } => Err(NumericError::UndefinedOperation),
        }
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` for the imaginary unit.
    pub fn checked_abs(&self) -> NumericResult<Numeric> {
        match self {
            Numeric::Real(a) => Ok(Numeric::Real(a.abs())),
            Numeric::Imaginary { .. } => Err(NumericError::UndefinedOperation),
        }
    }

    /// Multiplication.
    ///
    /// Two imaginary units multiply to a real `-1` (or `1` when their signs
    /// differ). An imaginary unit multiplies only with the real unit `1`
    /// (sign-aware); everything else is undefined.
    pub fn checked_mul(&self, other: &Numeric) -> NumericResult<Numeric> {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => Ok(Numeric::Real(a * b)),
            (Numeric::Imaginary { negative: a }, Numeric::Imaginary { negative: b }) => {
                let product = if a == b { -1i64 } else { 1 };
                Ok(Numeric::Real(Decimal::from(product)))
            },
            (Numeric::Imaginary { negative }, Numeric::Real(unit))
            | (Numeric::Real(unit), Numeric::Imaginary { negative })
                if Self::is_unit_magnitude(unit) =>
            {
                Ok(Numeric::Imaginary {
                    negative: *negative != unit.is_negative(),
                })
            },
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Division.
    ///
    /// An imaginary unit divides only by the real unit `1` (sign-aware).
    ///
    /// # Errors
    /// Propagates `DivisionByZero` for real division; returns
    /// `UndefinedOperation` for any other imaginary combination.
    pub fn checked_div(&self, other: &Numeric) -> NumericResult<Numeric> {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => Ok(Numeric::Real(a.checked_div(b)?)),
            (Numeric::Imaginary { negative }, Numeric::Real(unit))
                if Self::is_unit_magnitude(unit) =>
            {
                Ok(Numeric::Imaginary {
                    negative: *negative != unit.is_negative(),
                })
            },
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Exponentiation.
    ///
    /// A real base delegates to [`Decimal::checked_pow`]. An imaginary base
    /// accepts a non-negative integral real exponent and cycles with period
    /// four: `i` walks `1, i, -1, -i`; `-i` walks `1, -i, -1, i`.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` for an imaginary exponent, a negative
    /// or fractional exponent over an imaginary base, or real `0**0`.
    pub fn checked_pow(&self, exponent: &Numeric) -> NumericResult<Numeric> {
        match (self, exponent) {
            (Numeric::Real(a), Numeric::Real(b)) => Ok(Numeric::Real(a.checked_pow(b)?)),
            (Numeric::Imaginary { negative }, Numeric::Real(power)) => {
                let integral = power
                    .fractional_segments()
                    .iter()
                    .all(|segment| segment_value(segment).is_zero());
                if power.is_negative() || !integral {
                    return Err(NumericError::UndefinedOperation);
                }
                let n = segment_value(&power.integer_segments().concat());
                let phase = (n % BigUint::from(4u32))
                    .to_u8()
                    .unwrap_or_default();
                Ok(match (phase, negative) {
                    (0, _) => Numeric::Real(Decimal::from(1i64)),
                    (2, _) => Numeric::Real(Decimal::from(-1i64)),
                    (1, negative) => Numeric::Imaginary { negative: *negative },
                    (_, negative) => Numeric::Imaginary {
                        negative: !*negative,
                    },
                })
            },
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Ordering comparison.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` when either operand is imaginary.
    pub fn checked_cmp(&self, other: &Numeric) -> NumericResult<Ordering> {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => a
                .partial_cmp(b)
                .ok_or(NumericError::UndefinedOperation),
            _ => Err(NumericError::UndefinedOperation),
        }
    }

    /// Truthiness. The imaginary unit is always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Numeric::Real(a) => a.is_truthy(),
            Numeric::Imaginary { .. } => true,
        }
    }

    /// Logical AND on truthiness of both operands.
    #[inline]
    pub fn logical_and(&self, other: &Numeric) -> bool {
        self.is_truthy() && other.is_truthy()
    }

    /// Logical OR on truthiness of both operands.
    #[inline]
    pub fn logical_or(&self, other: &Numeric) -> bool {
        self.is_truthy() || other.is_truthy()
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Real(value)
    }
}

impl PartialEq for Numeric {
    /// Reals compare structurally; imaginary units compare equal only to an
    /// identically signed imaginary unit. A real never equals an imaginary.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Real(a), Numeric::Real(b)) => a == b,
            (Numeric::Imaginary { negative: a }, Numeric::Imaginary { negative: b }) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Real(value) => write!(f, "{}", value),
            Numeric::Imaginary { negative: false } => write!(f, "i"),
            Numeric::Imaginary { negative: true } => write!(f, "-i"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
