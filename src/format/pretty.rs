// ============================================================================
// Fraction Pretty Printer
// "N", "p/q" or "N, p/q" with p/q in lowest terms
// ============================================================================

use super::buffer;
use crate::numeric::{Fraction, RomanResult, FRACTION_PRETTY_CAPACITY};
use arrayvec::ArrayString;
use std::fmt::Write;

/// Pretty-printed fraction, at most `-3999999, -11/12`
pub type PrettyFraction = ArrayString<FRACTION_PRETTY_CAPACITY>;

/// Render a fraction as `N`, `p/q` or `N, p/q`.
///
/// The sign appears on both parts of a mixed number: `-2, -1/6`.
///
/// # Example
/// ```
/// use roman_twelfths::format::pretty_fraction;
/// use roman_twelfths::numeric::Fraction;
///
/// assert_eq!(pretty_fraction(Fraction::new(0, 2)?).as_str(), "1/6");
/// assert_eq!(pretty_fraction(Fraction::new(-3, 10)?).as_str(), "-2, -1/6");
/// # Ok::<(), roman_twelfths::numeric::RomanError>(())
/// ```
pub fn pretty_fraction(value: Fraction) -> PrettyFraction {
    let mut out = PrettyFraction::new();
    // The longest rendering is exactly FRACTION_PRETTY_CAPACITY bytes.
    let _ = write!(out, "{}", value);
    out
}

/// Normalize `(int_part, twelfths)` and pretty-print into a caller buffer of
/// at least [`FRACTION_PRETTY_BUFFER_SIZE`](crate::numeric::FRACTION_PRETTY_BUFFER_SIZE)
/// bytes.
///
/// # Errors
/// `ExtendedValueOutOfRange` if the parts do not normalize into range.
pub fn pretty_fraction_into(int_part: i32, twelfths: i8, out: &mut [u8]) -> RomanResult<usize> {
    buffer::fill(out, Fraction::new(int_part, twelfths).map(pretty_fraction))
}
