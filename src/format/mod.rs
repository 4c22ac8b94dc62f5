// ============================================================================
// Format Module
// Presentation of numerals and fractions
// ============================================================================

pub mod buffer;
mod overline;
mod pretty;

pub use overline::{overline, overline_into, OverlinedNumeral};
pub use pretty::{pretty_fraction, pretty_fraction_into, PrettyFraction};
