// ============================================================================
// Value -> Numeral Encoder
// Greedy subtractive emission over the glyph dictionary
// ============================================================================

use super::dictionary::{
    AFTER_VINCULUM, FIRST_TWELFTHS, GLYPHS, LAST_INTEGER, LAST_TWELFTHS, THOUSANDS,
};
use crate::format::buffer;
use crate::numeric::{
    Fraction, RomanError, RomanResult, BASIC_MAX, BASIC_MIN, BASIC_NUMERAL_CAPACITY,
    EXTENDED_NUMERAL_CAPACITY, VINCULUM_FACTOR, ZERO,
};
use arrayvec::ArrayString;

/// Encoded basic numeral, at most `-MMMDCCCLXXXVIII`
pub type BasicNumeral = ArrayString<BASIC_NUMERAL_CAPACITY>;

/// Encoded extended numeral, at most `-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....`
pub type ExtendedNumeral = ArrayString<EXTENDED_NUMERAL_CAPACITY>;

/// Largest integer part written without a vinculum
const VINCULUM_THRESHOLD: u32 = BASIC_MAX as u32;

/// Encode a value in [-3999, 3999] as a basic numeral.
///
/// # Errors
/// Returns `BasicValueOutOfRange` outside [`BASIC_MIN`], [`BASIC_MAX`].
///
/// # Example
/// ```
/// use roman_twelfths::codec::encode_basic;
///
/// assert_eq!(encode_basic(42)?.as_str(), "XLII");
/// assert_eq!(encode_basic(0)?.as_str(), "NULLA");
/// assert_eq!(encode_basic(-3999)?.as_str(), "-MMMCMXCIX");
/// # Ok::<(), roman_twelfths::numeric::RomanError>(())
/// ```
pub fn encode_basic(value: i16) -> RomanResult<BasicNumeral> {
    if !(BASIC_MIN..=BASIC_MAX).contains(&value) {
        return Err(RomanError::BasicValueOutOfRange);
    }

    let mut out = BasicNumeral::new();
    if value == 0 {
        out.push_str(ZERO);
    } else {
        if value < 0 {
            out.push('-');
        }
        emit(&mut out, u32::from(value.unsigned_abs()), THOUSANDS, LAST_INTEGER);
    }

    tracing::trace!(value, numeral = %out, "encoded basic numeral");
    Ok(out)
}

/// Encode `int_part + twelfths / 12` as an extended numeral.
///
/// The parts are normalized first, so `(0, 18)` encodes as `IS`.
///
/// # Errors
/// Returns `ExtendedValueOutOfRange` if the normalized value is out of range.
pub fn encode_extended(int_part: i32, twelfths: i8) -> RomanResult<ExtendedNumeral> {
    Fraction::new(int_part, twelfths).map(encode_fraction)
}

/// Encode a real number, rounded to the nearest twelfth.
///
/// # Errors
/// - `NotFinite` for NaN and infinities
/// - `ExtendedValueOutOfRange` outside the extended range
pub fn encode_f64(x: f64) -> RomanResult<ExtendedNumeral> {
    Fraction::from_f64(x).map(encode_fraction)
}

/// Encode a fraction. Cannot fail: every normalized fraction fits.
///
/// Integer parts above 3999 put the thousands between underscores; the
/// section after the closing underscore starts at `CM`, since an `M` there
/// would belong inside the vinculum.
pub fn encode_fraction(value: Fraction) -> ExtendedNumeral {
    let mut out = ExtendedNumeral::new();
    if value.is_zero() {
        out.push_str(ZERO);
        return out;
    }
    if value.is_negative() {
        out.push('-');
    }

    let int = value.int_part().unsigned_abs();
    if int > VINCULUM_THRESHOLD {
        let factor = VINCULUM_FACTOR as u32;
        out.push('_');
        emit(&mut out, int / factor, THOUSANDS, LAST_INTEGER);
        out.push('_');
        emit(&mut out, int % factor, AFTER_VINCULUM, LAST_INTEGER);
    } else {
        emit(&mut out, int, THOUSANDS, LAST_INTEGER);
    }
    emit(
        &mut out,
        u32::from(value.twelfths().unsigned_abs()),
        FIRST_TWELFTHS,
        LAST_TWELFTHS,
    );

    tracing::trace!(value = ?value, numeral = %out, "encoded extended numeral");
    out
}

/// Write `remaining` using glyphs `first..=last`, largest first.
fn emit<const CAP: usize>(
    out: &mut ArrayString<CAP>,
    mut remaining: u32,
    first: usize,
    last: usize,
) {
    for glyph in &GLYPHS[first..=last] {
        let weight = glyph.value as u32;
        while remaining >= weight {
            out.push_str(glyph.chars);
            remaining -= weight;
        }
    }
}

// ============================================================================
// Caller-Buffer Variants
// ============================================================================

/// [`encode_basic`] into a caller buffer of at least
/// [`BASIC_BUFFER_SIZE`](crate::numeric::BASIC_BUFFER_SIZE) bytes.
///
/// Writes a NUL-terminated numeral and returns its length. On error the
/// buffer holds the empty string.
pub fn encode_basic_into(value: i16, out: &mut [u8]) -> RomanResult<usize> {
    buffer::fill(out, encode_basic(value))
}

/// [`encode_extended`] into a caller buffer of at least
/// [`EXTENDED_BUFFER_SIZE`](crate::numeric::EXTENDED_BUFFER_SIZE) bytes.
pub fn encode_extended_into(int_part: i32, twelfths: i8, out: &mut [u8]) -> RomanResult<usize> {
    buffer::fill(out, encode_extended(int_part, twelfths))
}

/// [`encode_f64`] into a caller buffer of at least
/// [`EXTENDED_BUFFER_SIZE`](crate::numeric::EXTENDED_BUFFER_SIZE) bytes.
pub fn encode_f64_into(x: f64, out: &mut [u8]) -> RomanResult<usize> {
    buffer::fill(out, encode_f64(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{EXTENDED_BUFFER_SIZE, EXTENDED_INT_MAX};

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode_basic(0).unwrap().as_str(), "NULLA");
        assert_eq!(encode_basic(1).unwrap().as_str(), "I");
        assert_eq!(encode_basic(4).unwrap().as_str(), "IV");
        assert_eq!(encode_basic(42).unwrap().as_str(), "XLII");
        assert_eq!(encode_basic(1951).unwrap().as_str(), "MCMLI");
        assert_eq!(encode_basic(3888).unwrap().as_str(), "MMMDCCCLXXXVIII");
        assert_eq!(encode_basic(-3999).unwrap().as_str(), "-MMMCMXCIX");
        assert_eq!(encode_basic(-3888).unwrap().as_str(), "-MMMDCCCLXXXVIII");
    }

    #[test]
    fn test_encode_basic_out_of_range() {
        assert_eq!(encode_basic(4000), Err(RomanError::BasicValueOutOfRange));
        assert_eq!(encode_basic(-4000), Err(RomanError::BasicValueOutOfRange));
        assert_eq!(encode_basic(i16::MIN), Err(RomanError::BasicValueOutOfRange));
    }

    #[test]
    fn test_encode_extended() {
        assert_eq!(
            encode_extended(3_888_888, 11).unwrap().as_str(),
            "_MMMDCCCLXXXVIII_DCCCLXXXVIIIS....."
        );
        assert_eq!(
            encode_extended(-3_888_888, -11).unwrap().as_str(),
            "-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS....."
        );
        assert_eq!(encode_extended(-1_900_051, 0).unwrap().as_str(), "-_MCM_LI");
        // M after the vinculum is spelled inside it
        assert_eq!(encode_extended(4_000, 0).unwrap().as_str(), "_IV_");
        assert_eq!(encode_extended(4_900, 0).unwrap().as_str(), "_IV_CM");
        // Up to 3999 no vinculum is used
        assert_eq!(encode_extended(3_999, 0).unwrap().as_str(), "MMMCMXCIX");
        assert_eq!(encode_extended(1, 7).unwrap().as_str(), "IS.");
        assert_eq!(encode_extended(0, 5).unwrap().as_str(), ".....");
        assert_eq!(encode_extended(0, -6).unwrap().as_str(), "-S");
    }

    #[test]
    fn test_encode_extended_normalizes() {
        assert_eq!(encode_extended(0, 0).unwrap().as_str(), "NULLA");
        assert_eq!(encode_extended(0, 18).unwrap().as_str(), "IS");
        assert_eq!(encode_extended(-2, 3).unwrap().as_str(), "-IS...");
        assert_eq!(encode_extended(1, -12).unwrap().as_str(), "NULLA");
    }

    #[test]
    fn test_encode_extended_out_of_range() {
        assert_eq!(
            encode_extended(EXTENDED_INT_MAX + 1, 0),
            Err(RomanError::ExtendedValueOutOfRange)
        );
        assert_eq!(
            encode_extended(EXTENDED_INT_MAX, 12),
            Err(RomanError::ExtendedValueOutOfRange)
        );
    }

    #[test]
    fn test_encode_f64() {
        assert_eq!(encode_f64(1.5).unwrap().as_str(), "IS");
        assert_eq!(encode_f64(-0.25).unwrap().as_str(), "-...");
        assert_eq!(encode_f64(0.01).unwrap().as_str(), "NULLA");
        assert_eq!(encode_f64(f64::NAN), Err(RomanError::NotFinite));
        assert_eq!(
            encode_f64(1e12),
            Err(RomanError::ExtendedValueOutOfRange)
        );
    }

    #[test]
    fn test_encode_into_buffer() {
        let mut buf = [0xffu8; EXTENDED_BUFFER_SIZE];
        let len = encode_extended_into(-3_888_888, -11, &mut buf).unwrap();
        assert_eq!(len, 36);
        assert_eq!(&buf[..len], b"-_MMMDCCCLXXXVIII_DCCCLXXXVIIIS.....");
        assert_eq!(buf[len], 0);

        let mut buf = [0xffu8; 17];
        assert_eq!(encode_basic_into(-3888, &mut buf), Ok(16));
        assert_eq!(buf[16], 0);
    }

    #[test]
    fn test_encode_into_errors_clear_buffer() {
        let mut buf = [b'x'; 17];
        assert_eq!(
            encode_basic_into(5000, &mut buf),
            Err(RomanError::BasicValueOutOfRange)
        );
        assert_eq!(buf[0], 0);

        let mut small = [b'x'; 4];
        assert_eq!(
            encode_basic_into(8, &mut small),
            Err(RomanError::OutputTooSmall {
                needed: 5,
                available: 4
            })
        );
        assert_eq!(small[0], 0);

        let mut buf = [b'x'; 37];
        assert_eq!(encode_f64_into(f64::INFINITY, &mut buf), Err(RomanError::NotFinite));
        assert_eq!(buf[0], 0);
    }
}
