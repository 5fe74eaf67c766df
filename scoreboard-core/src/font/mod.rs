//! Digit font catalogs
//!
//! Two fixed catalogs cover digits 0-9: [`Font::Big`] for scores below 20
//! and [`Font::Medium`] for two-digit numbers from 20 up and for the time.
//! Lookups return a fresh [`PlacedGlyph`] at column 0 every time.

pub mod big;
pub mod glyph;
pub mod medium;

pub use glyph::{Glyph, PlacedGlyph, GLYPH_ROWS};

/// Font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 8 columns wide, digit 1 narrower
    Big,
    /// 6 columns wide, uniform
    Medium,
}

impl Font {
    fn catalog(self) -> &'static [Glyph; 10] {
        match self {
            Font::Big => &big::DIGITS,
            Font::Medium => &medium::DIGITS,
        }
    }

    /// Look up a digit
    ///
    /// # Panics
    ///
    /// If `digit` is not 0-9. Scores are clamped before rendering, so this
    /// only happens on a logic error.
    pub fn glyph(self, digit: u8) -> PlacedGlyph {
        assert!(digit <= 9, "no glyph for digit {}", digit);
        PlacedGlyph::new(&self.catalog()[digit as usize])
    }
}
