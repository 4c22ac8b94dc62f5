// ============================================================================
// Limits
// Value ranges and output capacities
// ============================================================================

/// Smallest value a basic numeral can express
pub const BASIC_MIN: i16 = -3999;

/// Largest value a basic numeral can express
pub const BASIC_MAX: i16 = 3999;

/// Smallest integer part of an extended numeral
pub const EXTENDED_INT_MIN: i32 = -3_999_999;

/// Largest integer part of an extended numeral
pub const EXTENDED_INT_MAX: i32 = 3_999_999;

/// Smallest real accepted by the `f64` conversions.
///
/// Half a twelfth beyond `-3_999_999 11/12`, so anything that still rounds
/// to the last twelfth is accepted.
pub const EXTENDED_MIN: f64 = EXTENDED_INT_MIN as f64 - 11.5 / 12.0;

/// Largest real accepted by the `f64` conversions
pub const EXTENDED_MAX: f64 = EXTENDED_INT_MAX as f64 + 11.5 / 12.0;

/// The only numeral of value zero
pub const ZERO: &str = "NULLA";

/// Twelfths in one unit
pub const TWELFTHS_PER_UNIT: i8 = 12;

/// Factor applied to the section between the underscores
pub const VINCULUM_FACTOR: i32 = 1000;

// Content capacities (bytes, without the NUL terminator).

/// `-MMMDCCCLXXXVIII`
pub const BASIC_NUMERAL_CAPACITY: usize = 16;

/// `-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....`
pub const EXTENDED_NUMERAL_CAPACITY: usize = 36;

/// Two lines, `\r\n` between them
pub const OVERLINED_NUMERAL_CAPACITY: usize = 52;

/// `-3999999, -11/12`
pub const FRACTION_PRETTY_CAPACITY: usize = 16;

// Caller buffer sizes, terminator included.

pub const BASIC_BUFFER_SIZE: usize = BASIC_NUMERAL_CAPACITY + 1;
pub const EXTENDED_BUFFER_SIZE: usize = EXTENDED_NUMERAL_CAPACITY + 1;
pub const OVERLINED_BUFFER_SIZE: usize = OVERLINED_NUMERAL_CAPACITY + 1;
pub const FRACTION_PRETTY_BUFFER_SIZE: usize = FRACTION_PRETTY_CAPACITY + 1;
