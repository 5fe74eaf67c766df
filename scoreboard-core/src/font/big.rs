//! Big digit font (8 columns × 16 rows)
//!
//! Used for scores below 20. Digit 1 is only 3 columns wide, which is why
//! the placement table shifts it to keep it optically centred.

use super::glyph::Glyph;

/// Digits 0-9
pub static DIGITS: [Glyph; 10] = [
    // 0
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0011_1100,
            0b0111_1110,
            0b1100_0011,
            0b1100_0011,
            0b1100_0111,
            0b1100_1111,
            0b1101_1011,
            0b1111_0011,
            0b1110_0011,
            0b1100_0011,
            0b1100_0011,
            0b0111_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 1
    Glyph::new(
        3,
        [
            0b0000_0000,
            0b0010_0000,
            0b0110_0000,
            0b1110_0000,
            0b1110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 2
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0011_1100,
            0b0111_1110,
            0b1100_0011,
            0b0000_0011,
            0b0000_0011,
            0b0000_0110,
            0b0000_1100,
            0b0001_1000,
            0b0011_0000,
            0b0110_0000,
            0b1100_0000,
            0b1111_1111,
            0b1111_1111,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 3
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0111_1110,
            0b1111_1111,
            0b0000_0011,
            0b0000_0011,
            0b0000_0110,
            0b0011_1100,
            0b0011_1110,
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b1100_0011,
            0b0111_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 4
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0000_0110,
            0b0000_1110,
            0b0001_1110,
            0b0011_0110,
            0b0110_0110,
            0b1100_0110,
            0b1100_0110,
            0b1111_1111,
            0b1111_1111,
            0b0000_0110,
            0b0000_0110,
            0b0000_0110,
            0b0000_0110,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 5
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b1111_1111,
            0b1111_1111,
            0b1100_0000,
            0b1100_0000,
            0b1111_1100,
            0b1111_1110,
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b1100_0011,
            0b0111_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 6
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0011_1100,
            0b0111_1100,
            0b1100_0000,
            0b1100_0000,
            0b1100_0000,
            0b1111_1100,
            0b1111_1110,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b0111_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 7
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b1111_1111,
            0b1111_1111,
            0b0000_0011,
            0b0000_0011,
            0b0000_0110,
            0b0000_0110,
            0b0000_1100,
            0b0000_1100,
            0b0001_1000,
            0b0001_1000,
            0b0011_0000,
            0b0011_0000,
            0b0011_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 8
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0011_1100,
            0b0111_1110,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b0111_1110,
            0b0111_1110,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b0111_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 9
    Glyph::new(
        8,
        [
            0b0000_0000,
            0b0011_1100,
            0b0111_1110,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b1100_0011,
            0b0111_1111,
            0b0011_1111,
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b0011_1110,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
];
