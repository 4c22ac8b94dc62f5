// ============================================================================
// Glyph Dictionary
// Roman glyphs in descending value order
// ============================================================================

#[cfg(feature = "serde")]
use serde::Serialize;

/// One dictionary entry: a 1- or 2-character glyph and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Glyph {
    /// Upper-case spelling
    pub chars: &'static str,
    /// Whole units for integer glyphs, twelfths for `S` and `.`
    pub value: i32,
    /// Maximum consecutive occurrences
    pub max_reps: u8,
    /// Index the scan resumes at once this glyph has been matched.
    ///
    /// For single-use glyphs this skips the entries of the same magnitude
    /// they exclude: after `CM` or `CD` nothing else of the hundreds may
    /// follow, after `D` only `C` may.
    pub resume: usize,
}

impl Glyph {
    const fn new(chars: &'static str, value: i32, max_reps: u8, resume: usize) -> Self {
        Self {
            chars,
            value,
            max_reps,
            resume,
        }
    }

    /// Case-insensitive prefix match.
    #[inline]
    pub fn matches(&self, input: &[u8]) -> bool {
        let chars = self.chars.as_bytes();
        input.len() >= chars.len() && input[..chars.len()].eq_ignore_ascii_case(chars)
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub const fn is_fractional(&self) -> bool {
        matches!(self.chars.as_bytes()[0], b'S' | b'.')
    }
}

/// The dictionary. Integer glyphs first, then the twelfths glyphs.
#[rustfmt::skip]
pub const GLYPHS: [Glyph; 15] = [
    Glyph::new("M",  1000, 3, 1),
    Glyph::new("CM",  900, 1, 5),
    Glyph::new("D",   500, 1, 4),
    Glyph::new("CD",  400, 1, 5),
    Glyph::new("C",   100, 3, 5),
    Glyph::new("XC",   90, 1, 9),
    Glyph::new("L",    50, 1, 8),
    Glyph::new("XL",   40, 1, 9),
    Glyph::new("X",    10, 3, 9),
    Glyph::new("IX",    9, 1, 13),
    Glyph::new("V",     5, 1, 12),
    Glyph::new("IV",    4, 1, 13),
    Glyph::new("I",     1, 3, 13),
    Glyph::new("S",     6, 1, 14),
    Glyph::new(".",     1, 5, 15),
];

/// Index of `M`
pub const THOUSANDS: usize = 0;

/// First glyph allowed after a closed vinculum (`CM`)
pub const AFTER_VINCULUM: usize = 1;

/// Index of `I`, the last integer glyph
pub const LAST_INTEGER: usize = 12;

/// Index of `S`, the first twelfths glyph
pub const FIRST_TWELFTHS: usize = 13;

/// Index of `.`, the last glyph
pub const LAST_TWELFTHS: usize = 14;

/// Letters that can start an integer glyph
#[inline]
pub fn is_integer_char(c: u8) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        b'M' | b'D' | b'C' | b'L' | b'X' | b'V' | b'I'
    )
}

/// `S` or `.`
#[inline]
pub fn is_twelfths_char(c: u8) -> bool {
    matches!(c.to_ascii_uppercase(), b'S' | b'.')
}

/// Anything that may appear in an extended numeral (other than `NULLA`)
#[inline]
pub fn is_extended_char(c: u8) -> bool {
    is_integer_char(c) || is_twelfths_char(c) || c == b'_' || c == b'-'
}
