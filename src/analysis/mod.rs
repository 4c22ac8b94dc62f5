// ============================================================================
// Analysis
// Cheap questions about a numeral that stop short of a full parse
// ============================================================================

use crate::codec::dictionary::{is_integer_char, is_twelfths_char};
use crate::codec::is_zero_token;
use crate::numeric::{RomanError, RomanResult, EXTENDED_BUFFER_SIZE, ZERO};

fn trim(numeral: &str) -> &str {
    numeral.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Whether the numeral is `NULLA` (any case, optionally negative).
///
/// Anything else, valid or not, is simply not zero.
pub fn is_zero(numeral: &str) -> bool {
    is_zero_token(trim(numeral).as_bytes())
}

/// -1, 0 or +1 from the leading sign alone. The grammar is not checked.
pub fn sign(numeral: &str) -> i8 {
    if is_zero(numeral) {
        0
    } else if trim(numeral).starts_with('-') {
        -1
    } else {
        1
    }
}

/// True when there is no `_`, `S` or `.` in the numeral. Not validated.
pub fn is_basic(numeral: &str) -> bool {
    !trim(numeral)
        .bytes()
        .any(|c| c == b'_' || is_twelfths_char(c))
}

/// Negation of [`is_basic`].
pub fn is_extended(numeral: &str) -> bool {
    !is_basic(numeral)
}

/// Count the characters that carry value or sign.
///
/// Underscores and whitespace are skipped. `NULLA` counts as its five
/// letters (six with a leading `-`).
///
/// # Errors
/// - `IllegalExtendedCharacter` for anything outside the alphabet
/// - `TooLongExtendedNumeral` beyond 37 counted characters
pub fn count_roman_chars(numeral: &str) -> RomanResult<u8> {
    if is_zero(numeral) {
        let signed = trim(numeral).starts_with('-');
        return Ok(ZERO.len() as u8 + u8::from(signed));
    }

    let mut count = 0usize;
    for c in numeral.bytes() {
        if c == b'_' || c.is_ascii_whitespace() {
            continue;
        }
        if !(is_integer_char(c) || is_twelfths_char(c) || c == b'-') {
            return Err(RomanError::IllegalExtendedCharacter);
        }
        count += 1;
        if count > EXTENDED_BUFFER_SIZE {
            return Err(RomanError::TooLongExtendedNumeral);
        }
    }

    Ok(count as u8)
}
