// ============================================================================
// Numeric Module
// Exact twelfths arithmetic and the error kinds shared by every conversion
// ============================================================================
//
// This module provides:
// - Fraction: integer part plus twelfths, always normalized
// - RomanError: one variant per failure kind, returned explicitly
// - Range and buffer-size limits
//
// Design principles:
// - No floating-point state: f64 and Decimal appear only at the boundaries
// - All construction returns Result (no panics)

mod errors;
mod fraction;
mod limits;

pub use errors::{RomanError, RomanResult};
pub use fraction::Fraction;
pub use limits::*;
