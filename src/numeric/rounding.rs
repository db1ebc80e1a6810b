// ============================================================================
// Rounding Family
// Round-to-nearest, ceiling, floor at a requested fractional digit count
// ============================================================================
//
// Every operation takes `ndigits`: non-negative values cut the fractional
// digit string at that many digits; negative values move the rounding
// point into the integer part, where granularity is bounded by the chunk
// size — the rounding point can only land on a chunk boundary, never an
// arbitrary digit. The tests pin this limitation.

use super::decimal::Decimal;
use super::segment::{segment_value, split_fractional_digits, SegmentVec};

use smallvec::smallvec;

/// Increment a digit string as an integer (`"" counts as zero`). Leading
/// zeros do not survive the round trip through the integer value.
fn increment_digits(digits: &str) -> String {
    (segment_value(digits) + 1u32).to_string()
}

/// Right-pad with zeros up to `width`; wider inputs pass through.
fn pad_right(mut digits: String, width: usize) -> String {
    while digits.len() < width {
        digits.push('0');
    }
    digits
}

impl Decimal {
    fn fractional_digit_string(&self) -> String {
        self.fractional_segments.concat()
    }

    /// Index of the integer segment a negative `ndigits` rounds at, or
    /// `None` when the cut is wider than the integer part.
    fn rounding_index(&self, ndigits: i64) -> Option<usize> {
        let cut = (ndigits.unsigned_abs() as usize) / self.chunk_size;
        if cut < self.integer_segments.len() {
            Some(self.integer_segments.len() - cut - 1)
        } else {
            None
        }
    }

    /// Round to the nearest value at `ndigits` fractional digits.
    ///
    /// Non-negative `ndigits`: the fractional digits are cut at `ndigits`;
    /// when the digit just past the cut is five or more, the kept digits
    /// are incremented as an integer, then zero-padded back out to
    /// `ndigits` and re-segmented. Negative `ndigits`: the integer segment
    /// at the chunk-bounded rounding point is incremented when the first
    /// digit of the following segment is five or more; everything after it
    /// is zeroed and the fractional part is cleared.
    pub fn round(&self, ndigits: i64) -> Decimal {
        let mut integer = self.integer_segments.clone();
        let fractional;

        if ndigits >= 0 {
            let keep = ndigits as usize;
            let digits = self.fractional_digit_string();
            let mut kept = digits[..keep.min(digits.len())].to_string();
            if let Some(&next) = digits.as_bytes().get(keep) {
                if next >= b'5' {
                    kept = increment_digits(&kept);
                }
            }
            fractional = split_fractional_digits(&pad_right(kept, keep), self.chunk_size);
        } else {
            match self.rounding_index(ndigits) {
                Some(index) => {
                    let next_digit = integer
                        .get(index + 1)
                        .and_then(|segment| segment.as_bytes().first())
                        .copied()
                        .unwrap_or(b'0');
                    let mut value = segment_value(&integer[index]);
                    if next_digit >= b'5' {
                        value += 1u32;
                    }
                    integer[index] = value.to_string();
                    for segment in integer.iter_mut().skip(index + 1) {
                        *segment = "0".to_string();
                    }
                },
                None => {
                    // The cut is wider than the whole integer part;
                    // everything rounds away.
                    for segment in integer.iter_mut() {
                        *segment = "0".to_string();
                    }
                },
            }
            fractional = SegmentVec::new();
        }

        Decimal::assemble(self.negative, self.chunk_size, integer, fractional)
    }

    /// Ceiling at `ndigits` fractional digits.
    ///
    /// Negative operands truncate toward zero. Non-negative operands
    /// increment the kept digits whenever the digit just past the cut is
    /// non-zero; at a negative `ndigits` the located integer segment is
    /// always incremented.
    pub fn ceil(&self, ndigits: i64) -> Decimal {
        let mut integer = self.integer_segments.clone();
        let fractional;

        if self.negative {
            if ndigits >= 0 {
                let keep = ndigits as usize;
                let digits = self.fractional_digit_string();
                // Truncation only — and unlike the non-negative branch,
                // the kept digits are not zero-padded back out.
                let kept = &digits[..keep.min(digits.len())];
                fractional = split_fractional_digits(kept, self.chunk_size);
            } else {
                match self.rounding_index(ndigits) {
                    Some(index) => {
                        for segment in integer.iter_mut().skip(index + 1) {
                            *segment = "0".to_string();
                        }
                    },
                    None => {
                        for segment in integer.iter_mut() {
                            *segment = "0".to_string();
                        }
                    },
                }
                fractional = SegmentVec::new();
            }
        } else if ndigits >= 0 {
            let keep = ndigits as usize;
            let digits = self.fractional_digit_string();
            let mut kept = digits[..keep.min(digits.len())].to_string();
            if let Some(&next) = digits.as_bytes().get(keep) {
                if next > b'0' {
                    kept = increment_digits(&kept);
                }
            }
            fractional = split_fractional_digits(&pad_right(kept, keep), self.chunk_size);
        } else {
            match self.rounding_index(ndigits) {
                Some(index) => {
                    integer[index] = increment_digits(&integer[index]);
                    for segment in integer.iter_mut().skip(index + 1) {
                        *segment = "0".to_string();
                    }
                },
                None => {
                    for segment in integer.iter_mut() {
                        *segment = "0".to_string();
                    }
                },
            }
            fractional = SegmentVec::new();
        }

        Decimal::assemble(self.negative, self.chunk_size, integer, fractional)
    }

    /// Floor at `ndigits` fractional digits.
    ///
    /// Truncates in both branches (a negative `ndigits` only clears the
    /// fractional part; the integer segments are left as they are). A
    /// negative operand that lost any non-zero fractional digit then moves
    /// one whole unit further negative.
    pub fn floor(&self, ndigits: i64) -> Decimal {
        let fractional = if ndigits >= 0 {
            let keep = ndigits as usize;
            let digits = self.fractional_digit_string();
            let kept = digits[..keep.min(digits.len())].to_string();
            split_fractional_digits(&pad_right(kept, keep), self.chunk_size)
        } else {
            SegmentVec::new()
        };

        let truncated = Decimal::assemble(
            self.negative,
            self.chunk_size,
            self.integer_segments.clone(),
            fractional,
        );

        let lost_fraction = self
            .fractional_segments
            .iter()
            .any(|segment| segment_value(segment) != 0u32.into());
        if self.negative && lost_fraction {
            let unit = Decimal::assemble(
                false,
                self.chunk_size,
                smallvec!["1".to_string()],
                smallvec!["0".to_string()],
            );
            &truncated - &unit
        } else {
            truncated
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(literal: &str) -> Decimal {
        Decimal::parse(literal, 10).unwrap()
    }

    #[test]
    fn test_rounding_family_on_integral_values() {
        let k = dec("9");
        assert_eq!(k.ceil(1).to_string(), "9.0");
        assert_eq!(k.floor(1).to_string(), "9.0");
        assert_eq!(k.round(1).to_string(), "9.0");

        let l = dec("-9");
        assert_eq!(l.ceil(1).to_string(), "-9.0");
        assert_eq!(l.floor(1).to_string(), "-9.0");
        assert_eq!(l.round(1).to_string(), "-9.0");
    }

    #[test]
    fn test_round_half_up_at_fractional_digit() {
        assert_eq!(dec("9.46").round(1).to_string(), "9.5");
        assert_eq!(dec("9.44").round(1).to_string(), "9.4");
        assert_eq!(dec("9.449").round(2).to_string(), "9.45");
    }

    #[test]
    fn test_round_keeps_requested_width() {
        assert_eq!(dec("9.4").round(3).to_string(), "9.400");
    }

    #[test]
    fn test_round_to_integer_keeps_increment_in_fraction() {
        // Preserved behavior: at ndigits = 0 the incremented empty prefix
        // becomes the fractional digit "1" instead of carrying into the
        // integer part.
        assert_eq!(dec("9.5").round(0).to_string(), "9.1");
        assert_eq!(dec("9.4").round(0).to_string(), "9.0");
    }

    #[test]
    fn test_ceil_increments_on_any_nonzero_remainder() {
        assert_eq!(dec("9.41").ceil(1).to_string(), "9.5");
        assert_eq!(dec("9.40").ceil(1).to_string(), "9.4");
    }

    #[test]
    fn test_ceil_truncates_negative_operands_toward_zero() {
        assert_eq!(dec("-9.3").ceil(0).to_string(), "-9.0");
        assert_eq!(dec("-9.37").ceil(1).to_string(), "-9.3");
    }

    #[test]
    fn test_floor_truncates_and_steps_negative_operands_down() {
        assert_eq!(dec("9.7").floor(0).to_string(), "9.0");
        assert_eq!(dec("-9.3").floor(0).to_string(), "-10.0");
        assert_eq!(dec("-9.3").floor(1).to_string(), "-10.3");
        assert_eq!(dec("-9.0").floor(0).to_string(), "-9.0");
    }

    #[test]
    fn test_negative_ndigits_rounds_only_at_chunk_boundaries() {
        let x = dec("12345678901234567890");

        // Inside a chunk the rounding point cannot land: -5 resolves to
        // the same chunk boundary as 0, so nothing changes.
        assert_eq!(x.round(-5).to_string(), "12345678901234567890.0");

        // At the chunk boundary the low segment collapses to a single
        // "0"; the rendered value shrinks with it. The next digit "1"
        // does not round up. Preserved behavior.
        assert_eq!(x.round(-10).to_string(), "12345678900.0");

        // A next digit of 9 rounds the located segment up.
        assert_eq!(dec("19999999999").round(-10).to_string(), "20.0");
    }

    #[test]
    fn test_ceil_always_increments_at_negative_ndigits() {
        let x = dec("12345678901234567890");
        assert_eq!(x.ceil(-10).to_string(), "12345678910.0");
    }

    #[test]
    fn test_negative_ndigits_beyond_integer_width_zeroes_everything() {
        let x = dec("12345678901234567890");
        // Each segment is zeroed in place; the rendered form keeps the
        // segment count.
        assert_eq!(x.round(-30).to_string(), "00.0");
    }

    #[test]
    fn test_floor_at_negative_ndigits_only_clears_fraction() {
        let x = dec("1234567890123.45");
        assert_eq!(x.floor(-5).to_string(), "1234567890123.0");
    }

    #[test]
    fn test_rounding_at_chunk_size_one() {
        let x = Decimal::parse("9.46", 1).unwrap();
        assert_eq!(x.round(1).to_string(), "9.5");
        assert_eq!(x.ceil(1).to_string(), "9.5");
        assert_eq!(x.floor(1).to_string(), "9.4");
    }
}
