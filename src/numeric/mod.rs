// ============================================================================
// Numeric Module
// Segmented arbitrary-precision decimal arithmetic
// ============================================================================

mod additive;
mod decimal;
mod errors;
mod multiplicative;
mod ordering;
mod rounding;
pub(crate) mod segment;

pub use decimal::{Decimal, DEFAULT_CHUNK_SIZE};
pub use errors::{NumericError, NumericResult};
