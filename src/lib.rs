// ============================================================================
// Roman Twelfths Library
// Exact conversion between Roman numerals and numeric values
// ============================================================================

//! # Roman Twelfths
//!
//! Bidirectional conversion between Roman numerals and exact values.
//!
//! ## Features
//!
//! - **Basic numerals** in [-3999, 3999] using `M D C L X V I` and `-`
//! - **Vinculum** (`_..._`) multiplying a section by 1000, up to ±3,999,999
//! - **Twelfths** tail: `S` = 6/12, `.` = 1/12
//! - **`NULLA`** as the one numeral for zero
//! - **Exact values**: an integer part plus twelfths, never a float internally
//! - **Caller buffers**: every producer has a fixed-capacity form and an
//!   `_into` form writing a NUL-terminated string
//!
//! ## Example
//!
//! ```rust
//! use roman_twelfths::prelude::*;
//!
//! let numeral = encode_extended(3_888_888, 11)?;
//! assert_eq!(numeral.as_str(), "_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....");
//!
//! let value: Fraction = "-_MCM_LI".parse()?;
//! assert_eq!(value.int_part(), -1_900_051);
//!
//! assert_eq!(overline("-_MCM_LI", false)?.as_str(), " ___\n-MCMLI");
//! assert_eq!(Fraction::new(-3, 10)?.to_string(), "-2, -1/6");
//! # Ok::<(), RomanError>(())
//! ```

pub mod analysis;
pub mod codec;
pub mod format;
pub mod numeric;
pub mod shell;

// Re-exports for convenience
pub mod prelude {
    pub use crate::analysis::{count_roman_chars, is_basic, is_extended, is_zero, sign};
    pub use crate::codec::{
        encode_basic, encode_basic_into, encode_extended, encode_extended_into, encode_f64,
        encode_f64_into, encode_fraction, parse, parse_basic, parse_to_f64, parse_to_int,
        BasicNumeral, ExtendedNumeral,
    };
    pub use crate::format::{
        overline, overline_into, pretty_fraction, pretty_fraction_into, OverlinedNumeral,
        PrettyFraction,
    };
    pub use crate::numeric::{Fraction, RomanError, RomanResult};
}
