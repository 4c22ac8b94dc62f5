// ============================================================================
// Numeral -> Value Parser
// Strict left-to-right recognizer driven by the glyph dictionary
// ============================================================================
//
// Grammar (case-insensitive):
//
//   numeral     ::= "NULLA" | ["-"] body
//   body        ::= [ "_" int_section "_" post_vinc ] [ twelfths ]
//                 | int_section [ twelfths ]
//   int_section ::= M{0,3} (CM|CD|D?C{0,3}) (XC|XL|L?X{0,3}) (IX|IV|V?I{0,3})
//   post_vinc   ::= int_section without the M{0,3}
//   twelfths    ::= [S] .{0,5}
//
// A single dictionary index only ever moves forward. Matching a glyph bumps
// its repetition count; matching a single-use glyph jumps the index to the
// glyph's `resume` entry, which is what rules out `CM` next to `D` and friends.

use super::dictionary::{
    is_extended_char, is_integer_char, is_twelfths_char, AFTER_VINCULUM, FIRST_TWELFTHS, GLYPHS,
    LAST_INTEGER, LAST_TWELFTHS, THOUSANDS,
};
use crate::numeric::{
    Fraction, RomanError, RomanResult, BASIC_NUMERAL_CAPACITY, EXTENDED_NUMERAL_CAPACITY,
    VINCULUM_FACTOR, ZERO,
};

/// Parse a numeral into an exact value.
///
/// Leading ASCII whitespace is skipped; nothing else is tolerated.
///
/// # Errors
/// The first violation found, as the most specific [`RomanError`] kind.
///
/// # Example
/// ```
/// use roman_twelfths::codec::parse;
///
/// let f = parse("-_MCM_LIS.")?;
/// assert_eq!((f.int_part(), f.twelfths()), (-1_900_051, -7));
/// assert!(parse("  nulla")?.is_zero());
/// # Ok::<(), roman_twelfths::numeric::RomanError>(())
/// ```
pub fn parse(numeral: &str) -> RomanResult<Fraction> {
    let mut parser = Parser::new(numeral);
    let result = parser.run();

    match &result {
        Ok(value) => tracing::trace!(numeral, value = ?value, "parsed numeral"),
        Err(error) => tracing::debug!(
            numeral,
            offset = parser.pos,
            error = %error,
            "rejected numeral"
        ),
    }
    result
}

/// Parse a numeral that must not have a twelfths tail.
///
/// # Errors
/// `UnexpectedTwelfths` if the value is not whole, otherwise as [`parse`].
pub fn parse_to_int(numeral: &str) -> RomanResult<i32> {
    let value = parse(numeral)?;
    if !value.is_integer() {
        return Err(RomanError::UnexpectedTwelfths);
    }
    Ok(value.int_part())
}

/// Parse a numeral into an `f64`.
pub fn parse_to_f64(numeral: &str) -> RomanResult<f64> {
    parse(numeral).map(Fraction::to_f64)
}

/// Parse a basic numeral: no vinculum, no twelfths, at most 16 characters.
///
/// # Errors
/// - `TooLongBasicNumeral` past 16 characters
/// - `IllegalBasicCharacter` for `_`, `S`, `.` or anything outside the alphabet
/// - otherwise as [`parse`]
pub fn parse_basic(numeral: &str) -> RomanResult<i16> {
    let trimmed = numeral.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(RomanError::EmptyNumeral);
    }
    if is_zero_token(trimmed.as_bytes()) {
        return Ok(0);
    }
    if trimmed.len() > BASIC_NUMERAL_CAPACITY {
        return Err(RomanError::TooLongBasicNumeral);
    }
    if !trimmed.bytes().all(|c| is_integer_char(c) || c == b'-') {
        return Err(RomanError::IllegalBasicCharacter);
    }

    // Without a vinculum the value stays within [-3999, 3999].
    let value = parse_to_int(trimmed)?;
    i16::try_from(value).map_err(|_| RomanError::BasicValueOutOfRange)
}

/// `NULLA` or `-NULLA`, any case.
pub(crate) fn is_zero_token(input: &[u8]) -> bool {
    let unsigned = input.strip_prefix(b"-").unwrap_or(input);
    unsigned.eq_ignore_ascii_case(ZERO.as_bytes())
}

// ============================================================================
// State Machine
// ============================================================================

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    /// Where the section after a closed vinculum begins
    post_vinculum: Option<usize>,
    /// Set once `S` or `.` has been consumed
    in_twelfths: bool,
}

impl<'a> Parser<'a> {
    fn new(numeral: &'a str) -> Self {
        let trimmed = numeral.trim_start_matches(|c: char| c.is_ascii_whitespace());
        Self {
            input: trimmed.as_bytes(),
            pos: 0,
            post_vinculum: None,
            in_twelfths: false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn run(&mut self) -> RomanResult<Fraction> {
        // Start
        if self.input.is_empty() {
            return Err(RomanError::EmptyNumeral);
        }

        // SignOrZero
        if is_zero_token(self.input) {
            return Ok(Fraction::ZERO);
        }
        if self.input.len() > EXTENDED_NUMERAL_CAPACITY {
            return Err(RomanError::TooLongExtendedNumeral);
        }
        if let Some(offset) = self.input.iter().position(|&c| !is_extended_char(c)) {
            self.pos = offset;
            return Err(RomanError::IllegalExtendedCharacter);
        }

        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
            if self.peek().is_none() {
                return Err(RomanError::IllegalCharSequence);
            }
        }

        // Vinculum, then the rest of the integer part
        let int_part = if self.peek() == Some(b'_') {
            self.pos += 1;
            let thousands = self.vinculum()?;
            self.post_vinculum = Some(self.pos);
            thousands + self.scan(AFTER_VINCULUM, LAST_INTEGER)?
        } else {
            self.scan(THOUSANDS, LAST_INTEGER)?
        };

        // Twelfths
        let start = self.pos;
        let twelfths = self.scan(FIRST_TWELFTHS, LAST_TWELFTHS)?;
        self.in_twelfths = self.pos > start;

        // End
        if let Some(c) = self.peek() {
            return Err(self.trailing(c));
        }

        // Both sections are bounded by the grammar: at most 3_999_999 and 11.
        let twelfths = twelfths as i8;
        if negative {
            Fraction::new(-int_part, -twelfths)
        } else {
            Fraction::new(int_part, twelfths)
        }
    }

    /// Inside `_..._`; the opening underscore is already consumed.
    fn vinculum(&mut self) -> RomanResult<i32> {
        let start = self.pos;
        let value = self.scan(THOUSANDS, LAST_INTEGER)?;

        match self.peek() {
            None => Err(RomanError::MissingSecondUnderscore),
            Some(b'_') if self.pos == start => Err(RomanError::IllegalCharSequence),
            Some(b'_') => {
                self.pos += 1;
                Ok(value * VINCULUM_FACTOR)
            },
            Some(b'-') => Err(RomanError::IllegalMinusPosition),
            Some(c) if is_twelfths_char(c) => Err(RomanError::FractionalCharsBetweenUnderscores),
            Some(_) => Err(RomanError::IllegalCharSequence),
        }
    }

    /// Match glyphs `first..=last` greedily, returning the summed weight.
    fn scan(&mut self, first: usize, last: usize) -> RomanResult<i32> {
        let mut total = 0;
        let mut index = first;
        let mut reps = 0u8;

        while index <= last && self.pos < self.input.len() {
            let glyph = &GLYPHS[index];
            if glyph.matches(&self.input[self.pos..]) {
                reps += 1;
                if reps > glyph.max_reps {
                    return Err(RomanError::TooManyRepeatedChars);
                }
                self.pos += glyph.width();
                total += glyph.value;
                if glyph.max_reps == 1 {
                    index = glyph.resume;
                    reps = 0;
                }
            } else {
                index += 1;
                reps = 0;
            }
        }

        Ok(total)
    }

    /// Classify a character left over after every section had its turn.
    fn trailing(&self, c: u8) -> RomanError {
        match c {
            b'_' if self.post_vinculum.is_some() => RomanError::TooManyUnderscores,
            b'_' => RomanError::IllegalFirstUnderscorePosition,
            b'-' => RomanError::IllegalMinusPosition,
            c if is_integer_char(c) && self.in_twelfths => RomanError::FractionalCharsNotAtEnd,
            b'M' | b'm' if self.post_vinculum == Some(self.pos) => RomanError::MAfterUnderscores,
            _ => RomanError::IllegalCharSequence,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(numeral: &str) -> (i32, i8) {
        let f = parse(numeral).unwrap();
        (f.int_part(), f.twelfths())
    }

    #[test]
    fn test_parse_basic_numerals() {
        assert_eq!(parts("I"), (1, 0));
        assert_eq!(parts("XLII"), (42, 0));
        assert_eq!(parts("MCMLI"), (1951, 0));
        assert_eq!(parts("MMMCMXCIX"), (3999, 0));
        assert_eq!(parts("-MMMDCCCLXXXVIII"), (-3888, 0));
        assert_eq!(parts("xliv"), (44, 0));
        assert_eq!(parts("  \tCD"), (400, 0));
        assert_eq!(parts("DCCC"), (800, 0));
        assert_eq!(parts("LXXX"), (80, 0));
    }

    #[test]
    fn test_parse_zero() {
        for zero in ["NULLA", "nulla", "-nulla", "  Nulla", "-NuLLa"] {
            assert_eq!(parse(zero), Ok(Fraction::ZERO), "{zero}");
        }
        assert_eq!(
            parse("NULLAE"),
            Err(RomanError::IllegalExtendedCharacter)
        );
    }

    #[test]
    fn test_parse_extended() {
        assert_eq!(parts("-_MCM_LI"), (-1_900_051, 0));
        assert_eq!(parts("_MCMLI_"), (1_951_000, 0));
        assert_eq!(
            parts("_MMMDCCCLXXXVIII_DCCCLXXXVIIIS....."),
            (3_888_888, 11)
        );
        assert_eq!(parts("_IV_CM"), (4_900, 0));
        assert_eq!(parts("IS."), (1, 7));
        assert_eq!(parts("-S"), (0, -6));
        assert_eq!(parts("....."), (0, 5));
        assert_eq!(parts("-is..."), (-1, -9));
    }

    #[test]
    fn test_parse_structural_errors() {
        assert_eq!(parse(""), Err(RomanError::EmptyNumeral));
        assert_eq!(parse("   "), Err(RomanError::EmptyNumeral));
        assert_eq!(parse("XIV "), Err(RomanError::IllegalExtendedCharacter));
        assert_eq!(parse("X1"), Err(RomanError::IllegalExtendedCharacter));
        assert_eq!(
            parse("-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS......"),
            Err(RomanError::TooLongExtendedNumeral)
        );
    }

    #[test]
    fn test_parse_repetition_errors() {
        assert_eq!(parse("MMMM"), Err(RomanError::TooManyRepeatedChars));
        assert_eq!(parse("IIII"), Err(RomanError::TooManyRepeatedChars));
        assert_eq!(parse("MM......"), Err(RomanError::TooManyRepeatedChars));
        assert_eq!(parse("_MMMM_"), Err(RomanError::TooManyRepeatedChars));
    }

    #[test]
    fn test_parse_sequence_errors() {
        assert_eq!(parse("IVI"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("MCIM"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("CMD"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("DCD"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("VV"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("IC"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("SS"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse(".S"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("-"), Err(RomanError::IllegalCharSequence));
        assert_eq!(parse("__X"), Err(RomanError::IllegalCharSequence));
    }

    #[test]
    fn test_parse_vinculum_errors() {
        assert_eq!(parse("_MCMLI"), Err(RomanError::MissingSecondUnderscore));
        assert_eq!(parse("_"), Err(RomanError::MissingSecondUnderscore));
        assert_eq!(parse("_MCM_MLI"), Err(RomanError::MAfterUnderscores));
        assert_eq!(
            parse("_XS_I"),
            Err(RomanError::FractionalCharsBetweenUnderscores)
        );
        assert_eq!(parse("_X_I_"), Err(RomanError::TooManyUnderscores));
        assert_eq!(
            parse("X_I_"),
            Err(RomanError::IllegalFirstUnderscorePosition)
        );
        assert_eq!(parse("_-X_"), Err(RomanError::IllegalMinusPosition));
        assert_eq!(parse("_X-_"), Err(RomanError::IllegalMinusPosition));
    }

    #[test]
    fn test_parse_sign_and_tail_errors() {
        assert_eq!(parse("--X"), Err(RomanError::IllegalMinusPosition));
        assert_eq!(parse("X-"), Err(RomanError::IllegalMinusPosition));
        assert_eq!(parse("SI"), Err(RomanError::FractionalCharsNotAtEnd));
        assert_eq!(parse("X.X"), Err(RomanError::FractionalCharsNotAtEnd));
    }

    #[test]
    fn test_parse_to_int() {
        assert_eq!(parse_to_int("-_MCM_LI"), Ok(-1_900_051));
        assert_eq!(parse_to_int("nulla"), Ok(0));
        assert_eq!(parse_to_int("XS"), Err(RomanError::UnexpectedTwelfths));
    }

    #[test]
    fn test_parse_to_f64() {
        assert_eq!(parse_to_f64("IS"), Ok(1.5));
        assert_eq!(parse_to_f64("-..."), Ok(-0.25));
        assert_eq!(parse_to_f64("Q"), Err(RomanError::IllegalExtendedCharacter));
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_basic("MMMCMXCIX"), Ok(3999));
        assert_eq!(parse_basic("-mmmdccclxxxviii"), Ok(-3888));
        assert_eq!(parse_basic("-nulla"), Ok(0));
        assert_eq!(parse_basic("_X_"), Err(RomanError::IllegalBasicCharacter));
        assert_eq!(parse_basic("XS"), Err(RomanError::IllegalBasicCharacter));
        assert_eq!(
            parse_basic("MMMDCCCLXXXVIIII"),
            Err(RomanError::TooManyRepeatedChars)
        );
        assert_eq!(
            parse_basic("-MMMDCCCLXXXVIIII"),
            Err(RomanError::TooLongBasicNumeral)
        );
        assert_eq!(parse_basic(""), Err(RomanError::EmptyNumeral));
    }

    #[test]
    fn test_case_insensitive() {
        for numeral in ["-_mcm_Li", "xlIIs..", "_iv_cm"] {
            assert_eq!(
                parse(&numeral.to_uppercase()),
                parse(&numeral.to_lowercase())
            );
        }
    }
}
