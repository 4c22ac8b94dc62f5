// ============================================================================
// Roman Numeral Errors
// Error kinds for conversion, parsing and formatting
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while converting between numerals and values.
///
/// Every fallible operation returns one of these explicitly; there is no
/// process-wide "last error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RomanError {
    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------
    /// Caller buffer cannot hold the NUL-terminated output
    OutputTooSmall { needed: usize, available: usize },

    // ------------------------------------------------------------------------
    // Range
    // ------------------------------------------------------------------------
    /// Value outside [-3999, 3999]
    BasicValueOutOfRange,
    /// Value outside the extended (vinculum + twelfths) range
    ExtendedValueOutOfRange,
    /// NaN or infinity
    NotFinite,

    // ------------------------------------------------------------------------
    // Structural
    // ------------------------------------------------------------------------
    /// Nothing but whitespace
    EmptyNumeral,
    TooLongBasicNumeral,
    TooLongExtendedNumeral,
    IllegalBasicCharacter,
    IllegalExtendedCharacter,

    // ------------------------------------------------------------------------
    // Syntactic
    // ------------------------------------------------------------------------
    /// Characters are legal but appear in an order the grammar forbids
    IllegalCharSequence,
    TooManyRepeatedChars,
    /// Vinculum opened with `_` but the input ended before the closing `_`
    MissingSecondUnderscore,
    TooManyUnderscores,
    /// `_` somewhere other than right at the start (after an optional `-`)
    IllegalFirstUnderscorePosition,
    /// Single `_` found while overlining
    NonTerminatedVinculum,
    FractionalCharsBetweenUnderscores,
    /// `S` or `.` followed by integer characters
    FractionalCharsNotAtEnd,
    IllegalMinusPosition,
    /// `M` right after a closed vinculum
    MAfterUnderscores,
    /// Integer requested but the numeral has a twelfths tail
    UnexpectedTwelfths,
}

impl RomanError {
    /// Stable small code per kind, for shells and logs.
    pub const fn code(self) -> u8 {
        match self {
            RomanError::OutputTooSmall { .. } => 1,
            RomanError::BasicValueOutOfRange => 10,
            RomanError::ExtendedValueOutOfRange => 11,
            RomanError::NotFinite => 12,
            RomanError::EmptyNumeral => 20,
            RomanError::TooLongBasicNumeral => 21,
            RomanError::TooLongExtendedNumeral => 22,
            RomanError::IllegalBasicCharacter => 23,
            RomanError::IllegalExtendedCharacter => 24,
            RomanError::IllegalCharSequence => 30,
            RomanError::TooManyRepeatedChars => 31,
            RomanError::MissingSecondUnderscore => 32,
            RomanError::TooManyUnderscores => 33,
            RomanError::IllegalFirstUnderscorePosition => 34,
            RomanError::NonTerminatedVinculum => 35,
            RomanError::FractionalCharsBetweenUnderscores => 36,
            RomanError::FractionalCharsNotAtEnd => 37,
            RomanError::IllegalMinusPosition => 38,
            RomanError::MAfterUnderscores => 39,
            RomanError::UnexpectedTwelfths => 40,
        }
    }

    /// Whether the error came from the shape of the input text rather than
    /// from a numeric range or the output buffer.
    pub const fn is_syntax(self) -> bool {
        self.code() >= 20
    }
}

impl fmt::Display for RomanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanError::OutputTooSmall { needed, available } => write!(
                f,
                "output buffer too small: {} bytes needed, {} available",
                needed, available
            ),
            RomanError::BasicValueOutOfRange => {
                write!(f, "value out of basic range [-3999, 3999]")
            },
            RomanError::ExtendedValueOutOfRange => write!(
                f,
                "value out of extended range [-3999999 11/12, 3999999 11/12]"
            ),
            RomanError::NotFinite => write!(f, "value is NaN or infinite"),
            RomanError::EmptyNumeral => write!(f, "empty numeral"),
            RomanError::TooLongBasicNumeral => write!(f, "basic numeral too long"),
            RomanError::TooLongExtendedNumeral => write!(f, "extended numeral too long"),
            RomanError::IllegalBasicCharacter => {
                write!(f, "character not allowed in a basic numeral")
            },
            RomanError::IllegalExtendedCharacter => {
                write!(f, "character not allowed in a roman numeral")
            },
            RomanError::IllegalCharSequence => write!(f, "illegal sequence of characters"),
            RomanError::TooManyRepeatedChars => write!(f, "character repeated too many times"),
            RomanError::MissingSecondUnderscore => {
                write!(f, "vinculum is missing its closing underscore")
            },
            RomanError::TooManyUnderscores => write!(f, "too many underscores"),
            RomanError::IllegalFirstUnderscorePosition => {
                write!(f, "vinculum must open at the start of the numeral")
            },
            RomanError::NonTerminatedVinculum => write!(f, "vinculum is not terminated"),
            RomanError::FractionalCharsBetweenUnderscores => {
                write!(f, "twelfths (S or .) are not allowed inside the vinculum")
            },
            RomanError::FractionalCharsNotAtEnd => {
                write!(f, "twelfths (S or .) must come at the end of the numeral")
            },
            RomanError::IllegalMinusPosition => {
                write!(f, "minus sign allowed only at the start of the numeral")
            },
            RomanError::MAfterUnderscores => {
                write!(f, "M is not allowed right after the vinculum")
            },
            RomanError::UnexpectedTwelfths => {
                write!(f, "numeral has a fractional part where an integer was expected")
            },
        }
    }
}

impl std::error::Error for RomanError {}

/// Result type alias for numeral operations
pub type RomanResult<T> = Result<T, RomanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RomanError::BasicValueOutOfRange.to_string(),
            "value out of basic range [-3999, 3999]"
        );
        assert_eq!(RomanError::EmptyNumeral.to_string(), "empty numeral");
        assert_eq!(
            RomanError::OutputTooSmall {
                needed: 6,
                available: 2
            }
            .to_string(),
            "output buffer too small: 6 bytes needed, 2 available"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(RomanError::NotFinite, RomanError::NotFinite);
        assert_ne!(
            RomanError::MissingSecondUnderscore,
            RomanError::NonTerminatedVinculum
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(RomanError::IllegalCharSequence.is_syntax());
        assert!(RomanError::EmptyNumeral.is_syntax());
        assert!(!RomanError::NotFinite.is_syntax());
        assert!(!RomanError::OutputTooSmall {
            needed: 1,
            available: 0
        }
        .is_syntax());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serde() {
        let json = serde_json::to_string(&RomanError::MAfterUnderscores).unwrap();
        let back: RomanError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RomanError::MAfterUnderscores);
    }
}
