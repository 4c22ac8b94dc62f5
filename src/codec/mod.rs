// ============================================================================
// Codec Module
// Conversion between numerals and values
// ============================================================================
//
// - dictionary: the 15 glyphs, their weights and repetition limits
// - encoder: value -> numeral (greedy subtractive)
// - parser: numeral -> value (dictionary-driven state machine)

pub mod dictionary;
mod encoder;
mod parser;

pub use dictionary::{Glyph, GLYPHS};
pub use encoder::{
    encode_basic, encode_basic_into, encode_extended, encode_extended_into, encode_f64,
    encode_f64_into, encode_fraction, BasicNumeral, ExtendedNumeral,
};
pub use parser::{parse, parse_basic, parse_to_f64, parse_to_int};

pub(crate) use parser::is_zero_token;
