// ============================================================================
// Segment Codec
// Digit-string slicing and per-segment big-integer arithmetic helpers
// ============================================================================
//
// A segment (or "chunk") is a fixed-width group of decimal digits. Integer
// segments are sliced from the least-significant end of the digit string so
// that only the most significant segment may be narrower than the chunk
// size; fractional segments are sliced from the most-significant end.
//
// Segment values are converted to `BigUint` at the point of arithmetic:
// with a chunk size of 1000 (used by the irrational constants) neither the
// segment values nor the chunk base fit in any native integer type.

use num_bigint::BigUint;
use num_traits::Zero;
use smallvec::SmallVec;

/// Segment storage. Most values have a handful of segments, so the common
/// case stays inline.
pub(crate) type SegmentVec = SmallVec<[String; 4]>;

/// The carry/borrow threshold between adjacent segments: `10^chunk_size`.
pub(crate) fn chunk_base(chunk_size: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u32), chunk_size)
}

/// Numeric value of a digit-only segment.
pub(crate) fn segment_value(segment: &str) -> BigUint {
    segment
        .bytes()
        .fold(BigUint::zero(), |acc, b| acc * 10u32 + u32::from(b - b'0'))
}

/// Slice integer digits into chunks counted from the least-significant end,
/// returned most-significant first. Empty input yields the single segment
/// `"0"` so the list is never empty.
pub(crate) fn split_integer_digits(digits: &str, chunk_size: usize) -> SegmentVec {
    let mut segments = SegmentVec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(chunk_size);
        segments.push(digits[start..end].to_string());
        end = start;
    }
    segments.reverse();
    if segments.is_empty() {
        segments.push("0".to_string());
    }
    segments
}

/// Slice fractional digits into chunks counted from the most-significant
/// end. May return an empty list when there are no digits.
pub(crate) fn split_fractional_digits(digits: &str, chunk_size: usize) -> SegmentVec {
    let mut segments = SegmentVec::new();
    let mut start = 0;
    while start < digits.len() {
        let end = (start + chunk_size).min(digits.len());
        segments.push(digits[start..end].to_string());
        start = end;
    }
    segments
}

/// Render a segment value zero-padded to the chunk width.
pub(crate) fn pad_segment(value: &BigUint, width: usize) -> String {
    let digits = value.to_string();
    if digits.len() >= width {
        digits
    } else {
        let mut padded = "0".repeat(width - digits.len());
        padded.push_str(&digits);
        padded
    }
}

/// Strip redundant leading zeros from the most significant segment, keeping
/// at least a single `"0"`.
pub(crate) fn strip_leading_zeros(segment: &str) -> String {
    let stripped = segment.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
