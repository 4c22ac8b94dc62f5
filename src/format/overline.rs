// ============================================================================
// Overline Formatter
// Vinculum notation as two ASCII lines
// ============================================================================

use super::buffer;
use crate::numeric::{RomanError, RomanResult, OVERLINED_NUMERAL_CAPACITY};
use arrayvec::ArrayString;

/// Overlined numeral: the bar line, an EOL, then the numeral line
pub type OverlinedNumeral = ArrayString<OVERLINED_NUMERAL_CAPACITY>;

/// Draw the vinculum as a line of underscores above the multiplied section.
///
/// ```text
/// -_MCM_LI   becomes    ___
///                      -MCMLI
/// ```
///
/// A numeral without underscores is returned unchanged (after skipping
/// leading whitespace). The numeral is not otherwise validated.
///
/// # Errors
/// - `EmptyNumeral` for blank input
/// - `NonTerminatedVinculum` for a single `_`
/// - `TooManyUnderscores` for three or more
/// - `IllegalFirstUnderscorePosition` if the vinculum does not open the
///   numeral (after an optional `-`)
/// - `IllegalCharSequence` for an empty vinculum
/// - `TooLongExtendedNumeral` if the result exceeds 52 bytes
pub fn overline(numeral: &str, windows_eol: bool) -> RomanResult<OverlinedNumeral> {
    let numeral = numeral.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if numeral.is_empty() {
        return Err(RomanError::EmptyNumeral);
    }

    let mut underscores = numeral.match_indices('_').map(|(i, _)| i);
    let Some(open) = underscores.next() else {
        return OverlinedNumeral::from(numeral).map_err(|_| RomanError::TooLongExtendedNumeral);
    };
    let Some(close) = underscores.next() else {
        return Err(RomanError::NonTerminatedVinculum);
    };
    if underscores.next().is_some() {
        return Err(RomanError::TooManyUnderscores);
    }

    let negative = numeral.starts_with('-');
    if open != usize::from(negative) {
        return Err(RomanError::IllegalFirstUnderscorePosition);
    }

    let inside = &numeral[open + 1..close];
    let after = &numeral[close + 1..];
    if inside.is_empty() {
        return Err(RomanError::IllegalCharSequence);
    }

    let eol = if windows_eol { "\r\n" } else { "\n" };
    let sign = if negative { "-" } else { "" };
    let needed = 2 * sign.len() + 2 * inside.len() + eol.len() + after.len();
    if needed > OVERLINED_NUMERAL_CAPACITY {
        return Err(RomanError::TooLongExtendedNumeral);
    }

    let mut out = OverlinedNumeral::new();
    if negative {
        out.push(' ');
    }
    for _ in 0..inside.len() {
        out.push('_');
    }
    out.push_str(eol);
    out.push_str(sign);
    out.push_str(inside);
    out.push_str(after);

    Ok(out)
}

/// [`overline`] into a caller buffer of at least
/// [`OVERLINED_BUFFER_SIZE`](crate::numeric::OVERLINED_BUFFER_SIZE) bytes.
pub fn overline_into(numeral: &str, windows_eol: bool, out: &mut [u8]) -> RomanResult<usize> {
    buffer::fill(out, overline(numeral, windows_eol))
}
