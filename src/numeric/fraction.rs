// ============================================================================
// Fraction
// Exact value as an integer part plus twelfths
// ============================================================================

use super::errors::{RomanError, RomanResult};
use super::limits::{EXTENDED_INT_MAX, EXTENDED_MAX, EXTENDED_MIN, TWELFTHS_PER_UNIT};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact value `int_part + twelfths / 12`.
///
/// Always held in normalized form:
/// - `-11 <= twelfths <= 11`
/// - when both parts are nonzero they carry the same sign
/// - `|int_part| <= 3_999_999`
///
/// Every value in the extended range has exactly one normalized form, so the
/// derived equality is value equality.
///
/// # Example
/// ```
/// use roman_twelfths::numeric::Fraction;
///
/// let f = Fraction::new(-2, 3)?;          // -2 + 3/12
/// assert_eq!(f.int_part(), -1);
/// assert_eq!(f.twelfths(), -9);
/// assert_eq!(f.to_string(), "-1, -3/4");
/// # Ok::<(), roman_twelfths::numeric::RomanError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    int_part: i32,
    twelfths: i8,
}

impl Fraction {
    /// Zero (`NULLA`)
    pub const ZERO: Self = Self {
        int_part: 0,
        twelfths: 0,
    };

    /// Largest representable value, `3_999_999 11/12`
    pub const MAX: Self = Self {
        int_part: EXTENDED_INT_MAX,
        twelfths: 11,
    };

    /// Smallest representable value, `-3_999_999 11/12`
    pub const MIN: Self = Self {
        int_part: -EXTENDED_INT_MAX,
        twelfths: -11,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from possibly unnormalized parts.
    ///
    /// Whole units hidden in `twelfths` are carried into the integer part,
    /// and a sign disagreement between the parts is resolved by borrowing one
    /// unit, so `(-2, 3)` becomes `(-1, -9)`.
    ///
    /// # Errors
    /// Returns `ExtendedValueOutOfRange` if the normalized integer part
    /// exceeds 3,999,999 in magnitude.
    pub fn new(int_part: i32, twelfths: i8) -> RomanResult<Self> {
        let twelve = TWELFTHS_PER_UNIT;
        let mut int = i64::from(int_part) + i64::from(twelfths / twelve);
        let mut rem = twelfths % twelve;

        if int > 0 && rem < 0 {
            int -= 1;
            rem += twelve;
        } else if int < 0 && rem > 0 {
            int += 1;
            rem -= twelve;
        }

        if int.abs() > i64::from(EXTENDED_INT_MAX) {
            return Err(RomanError::ExtendedValueOutOfRange);
        }

        Ok(Self {
            int_part: int as i32,
            twelfths: rem,
        })
    }

    /// Create a whole-number fraction.
    #[inline]
    pub fn from_integer(value: i32) -> RomanResult<Self> {
        Self::new(value, 0)
    }

    /// Create from a count of twelfths (`value × 12`).
    pub fn from_total_twelfths(total: i64) -> RomanResult<Self> {
        let twelve = i64::from(TWELFTHS_PER_UNIT);
        let int = total / twelve;
        if int.abs() > i64::from(EXTENDED_INT_MAX) {
            return Err(RomanError::ExtendedValueOutOfRange);
        }
        // Truncating division keeps the remainder's sign equal to the total's.
        Ok(Self {
            int_part: int as i32,
            twelfths: (total % twelve) as i8,
        })
    }

    /// Convert from `f64`, rounding to the nearest twelfth.
    ///
    /// # Errors
    /// - `NotFinite` for NaN and infinities
    /// - `ExtendedValueOutOfRange` outside
    ///   [`EXTENDED_MIN`](super::EXTENDED_MIN)..=[`EXTENDED_MAX`](super::EXTENDED_MAX)
    ///   or when rounding carries past the last twelfth
    pub fn from_f64(x: f64) -> RomanResult<Self> {
        if !x.is_finite() {
            return Err(RomanError::NotFinite);
        }
        if !(EXTENDED_MIN..=EXTENDED_MAX).contains(&x) {
            return Err(RomanError::ExtendedValueOutOfRange);
        }

        let int = x.trunc();
        let twelfths = ((x - int) * f64::from(TWELFTHS_PER_UNIT)).round();
        Self::new(int as i32, twelfths as i8)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Integer part (truncated toward zero).
    #[inline]
    pub const fn int_part(self) -> i32 {
        self.int_part
    }

    /// Twelfths, carrying the sign of the value.
    #[inline]
    pub const fn twelfths(self) -> i8 {
        self.twelfths
    }

    /// The value in twelfths (`value × 12`).
    #[inline]
    pub const fn total_twelfths(self) -> i64 {
        self.int_part as i64 * TWELFTHS_PER_UNIT as i64 + self.twelfths as i64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.int_part == 0 && self.twelfths == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.int_part < 0 || self.twelfths < 0
    }

    /// Whether the value is a whole number.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.twelfths == 0
    }

    /// -1, 0 or +1.
    #[inline]
    pub const fn signum(self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Absolute value. Never overflows: the range is symmetric.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            int_part: self.int_part.abs(),
            twelfths: self.twelfths.abs(),
        }
    }

    /// The twelfths reduced to lowest terms, as `(numerator, denominator)`.
    ///
    /// The numerator carries the sign. Zero twelfths give `(0, 1)`.
    pub fn reduced_twelfths(self) -> (i8, i8) {
        let divisor = gcd(self.twelfths.unsigned_abs(), TWELFTHS_PER_UNIT as u8) as i8;
        (self.twelfths / divisor, TWELFTHS_PER_UNIT / divisor)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `ExtendedValueOutOfRange` if the sum leaves the extended range.
    pub fn checked_add(self, rhs: Self) -> RomanResult<Self> {
        Self::from_total_twelfths(self.total_twelfths() + rhs.total_twelfths())
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `ExtendedValueOutOfRange` if the difference leaves the extended range.
    pub fn checked_sub(self, rhs: Self) -> RomanResult<Self> {
        Self::from_total_twelfths(self.total_twelfths() - rhs.total_twelfths())
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to `f64`.
    ///
    /// Cannot fail: the normalized range is well inside what `f64` represents
    /// exactly in its integer part.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.twelfths) / f64::from(TWELFTHS_PER_UNIT) + f64::from(self.int_part)
    }

    /// Encode as an extended numeral (`NULLA` for zero).
    pub fn to_roman(self) -> crate::codec::ExtendedNumeral {
        crate::codec::encode_fraction(self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_twelfths().cmp(&other.total_twelfths())
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            int_part: -self.int_part,
            twelfths: -self.twelfths,
        }
    }
}

impl TryFrom<f64> for Fraction {
    type Error = RomanError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Self::from_f64(x)
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> Self {
        f.to_f64()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, {}/12)", self.int_part, self.twelfths)
    }
}

/// Pretty form: `N`, `p/q` or `N, p/q`, with `p/q` in lowest terms and the
/// sign repeated on the numerator.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.twelfths == 0 {
            return write!(f, "{}", self.int_part);
        }

        let (num, den) = self.reduced_twelfths();
        if self.int_part == 0 {
            write!(f, "{}/{}", num, den)
        } else {
            write!(f, "{}, {}/{}", self.int_part, num, den)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert from `rust_decimal::Decimal`, rounding to the nearest twelfth
    /// (midpoint away from zero).
    ///
    /// Decimal text such as `0.5` or `-0.000` converts exactly, which `f64`
    /// cannot promise.
    ///
    /// # Errors
    /// Returns `ExtendedValueOutOfRange` if the rounded value is out of range.
    pub fn from_decimal(d: Decimal) -> RomanResult<Self> {
        let int = d.trunc();
        let twelfths = ((d - int) * Decimal::from(TWELFTHS_PER_UNIT))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let int = int.to_i64().ok_or(RomanError::ExtendedValueOutOfRange)?;
        let twelfths = twelfths
            .to_i64()
            .ok_or(RomanError::ExtendedValueOutOfRange)?;

        let total = int
            .checked_mul(i64::from(TWELFTHS_PER_UNIT))
            .and_then(|t| t.checked_add(twelfths))
            .ok_or(RomanError::ExtendedValueOutOfRange)?;
        Self::from_total_twelfths(total)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Thirds and twelfths do not terminate in base ten; those are rounded
    /// to the 28 significant digits `Decimal` keeps.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.int_part)
            + Decimal::from(self.twelfths) / Decimal::from(TWELFTHS_PER_UNIT)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fraction {
    type Err = RomanError;

    /// Parse a numeral, e.g. `"-_MCM_LIS."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse(s)
    }
}

const fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ============================================================================
// Tests
// ============================================================================
