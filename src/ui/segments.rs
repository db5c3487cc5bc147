//! Seven-segment glyph table.
//!
//! Segments are wired active-low, so a cleared bit lights a segment.
//! Layout (one digit bus):
//! ```text
//! Bit 0..6: segments a, b, c, d, e, f, g
//! Bit 7:    indicator LED owned by the controller (never touched here)
//! ```

/// Mask of the seven segment lines on a bus.
pub const SEGMENT_MASK: u8 = 0x7F;

/// Mask of the indicator line sharing the bus.
pub const INDICATOR_MASK: u8 = 0x80;

/// All segments dark.
pub const BLANK: u8 = 0x7F;

/// Patterns for digits 0..=9.
pub const DIGIT_PATTERNS: [u8; 10] = [
    0x40, // 0
    0x79, // 1
    0x24, // 2
    0x30, // 3
    0x19, // 4
    0x12, // 5
    0x03, // 6
    0x78, // 7
    0x00, // 8
    0x10, // 9
];

/// "E" of the error pair; also the fallback for anything unknown.
pub const ERROR_E: u8 = 0x06;

/// "r" of the error pair.
pub const ERROR_R: u8 = 0x2F;

/// Something one digit position can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Decimal digit. Values above 9 fall back to the "E" pattern.
    Digit(u8),
    /// Upper-case "E".
    E,
    /// Lower-case "r".
    R,
    /// Every segment off.
    Blank,
}

impl Glyph {
    /// Map a raw symbol code: `0..=9` are digits, `b'E'` and `b'r'` the
    /// error letters. Anything else is still a glyph; it renders as "E".
    pub const fn from_code(code: u8) -> Self {
        match code {
            b'E' => Glyph::E,
            b'r' => Glyph::R,
            d => Glyph::Digit(d),
        }
    }

    /// Low seven bits to drive for this glyph.
    pub const fn segments(self) -> u8 {
        match self {
            Glyph::Digit(d) if (d as usize) < DIGIT_PATTERNS.len() => DIGIT_PATTERNS[d as usize],
            Glyph::Digit(_) | Glyph::E => ERROR_E,
            Glyph::R => ERROR_R,
            Glyph::Blank => BLANK,
        }
    }
}

/// Encode a raw symbol code straight to its segment pattern.
pub const fn encode(code: u8) -> u8 {
    Glyph::from_code(code).segments()
}

/// Combine a new glyph with the indicator bit already on the bus.
pub const fn merge(current: u8, glyph: Glyph) -> u8 {
    (current & INDICATOR_MASK) | (glyph.segments() & SEGMENT_MASK)
}
