//! Medium digit font (6 columns × 16 rows)
//!
//! Every glyph is the full 6 columns wide, so two of them fit in one score
//! half without any per-digit adjustment.

use super::glyph::Glyph;

/// Digits 0-9
pub static DIGITS: [Glyph; 10] = [
    // 0
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_1100,
            0b1100_1100,
            0b1101_1100,
            0b1101_1100,
            0b1110_1100,
            0b1110_1100,
            0b1100_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 1
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0011_0000,
            0b0111_0000,
            0b1111_0000,
            0b0011_0000,
            0b0011_0000,
            0b0011_0000,
            0b0011_0000,
            0b0011_0000,
            0b0011_0000,
            0b1111_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 2
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_1100,
            0b0000_1100,
            0b0000_1100,
            0b0001_1000,
            0b0011_0000,
            0b0110_0000,
            0b1100_0000,
            0b1100_0000,
            0b1111_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 3
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_1100,
            0b0000_1100,
            0b0000_1100,
            0b0011_1000,
            0b0011_1000,
            0b0000_1100,
            0b0000_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 4
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0001_1000,
            0b0011_1000,
            0b0111_1000,
            0b1101_1000,
            0b1101_1000,
            0b1111_1100,
            0b0001_1000,
            0b0001_1000,
            0b0001_1000,
            0b0001_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 5
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b1111_1100,
            0b1100_0000,
            0b1100_0000,
            0b1111_1000,
            0b0000_1100,
            0b0000_1100,
            0b0000_1100,
            0b0000_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 6
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_0000,
            0b1100_0000,
            0b1111_1000,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 7
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b1111_1100,
            0b0000_1100,
            0b0000_1100,
            0b0001_1000,
            0b0001_1000,
            0b0011_0000,
            0b0011_0000,
            0b0110_0000,
            0b0110_0000,
            0b0110_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 8
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b0111_1000,
            0b0111_1000,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
    // 9
    Glyph::new(
        6,
        [
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b1100_1100,
            0b0111_1100,
            0b0000_1100,
            0b0000_1100,
            0b1100_1100,
            0b0111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    ),
];
