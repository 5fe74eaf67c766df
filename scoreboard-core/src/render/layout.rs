//! Digit placement for score halves and two-digit numbers
//!
//! Offsets are measured from the left edge of the panel (plus the caller's
//! horizontal shift). The left half spans columns 0-14, the delimiter sits
//! at 15-16 and the right half spans 17-31.

use heapless::Vec;

use crate::font::{Font, PlacedGlyph};
use crate::matrix::{Side, COLS_IN_MATRIX};

/// Single digit (0-9), any digit but 1
pub const ONE_DIGIT_X_OFFSET: i16 = 4;
/// Single digit 1, moved right to stay centred
pub const ONE_DIGIT_IS_1_X_OFFSET: i16 = 7;
/// Tens digit of 10-19
pub const FIRST_DIGIT_X_OFFSET: i16 = 2;
/// Ones digit of 10-19, any digit but 1
pub const SECOND_DIGIT_X_OFFSET: i16 = 6;
/// Ones digit 1 of 11
pub const SECOND_DIGIT_IS_1_X_OFFSET: i16 = 12;
/// Ones digit of a medium pair, relative to its tens digit
pub const SECOND_DIGIT_MEDIUM_FONT_X_OFFSET: i16 = COLS_IN_MATRIX as i16;
/// Right half shift for big-font layouts
pub const RIGHT_SIDE_X_OFFSET: i16 = 16;
/// Right half shift for the medium-font layout
pub const RIGHT_SIDE_MEDIUM_FONT_X_OFFSET: i16 = 18;

/// Glyphs making up one number
pub type Glyphs = Vec<PlacedGlyph, 2>;

/// How one half of the score is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalfLayout {
    /// 0-9, one big glyph
    OneDigit,
    /// 10-19, big "1" followed by a big ones digit
    Teen,
    /// Two medium glyphs
    MediumPair,
}

impl HalfLayout {
    /// Font the layout draws with
    pub fn font(self) -> Font {
        match self {
            HalfLayout::OneDigit | HalfLayout::Teen => Font::Big,
            HalfLayout::MediumPair => Font::Medium,
        }
    }
}

/// Whether a score forces the medium font on both halves
///
/// Any half at 20 or above switches both halves so the board stays
/// symmetric.
pub fn needs_medium_font(left: u8, right: u8) -> bool {
    left / 10 > 1 || right / 10 > 1
}

/// Layout for one half's value
pub fn half_layout(value: u8, medium: bool) -> HalfLayout {
    if medium {
        return HalfLayout::MediumPair;
    }
    match value / 10 {
        0 => HalfLayout::OneDigit,
        _ => HalfLayout::Teen,
    }
}

/// Place the glyphs of one score half
///
/// `value` must already be clamped to 0-99.
pub fn place_half(value: u8, side: Side, medium: bool, x_shift: i16) -> Glyphs {
    let (tens, ones) = (value / 10, value % 10);
    let mut glyphs = Glyphs::new();

    match half_layout(value, medium) {
        HalfLayout::OneDigit => {
            let offset = if ones == 1 {
                ONE_DIGIT_IS_1_X_OFFSET
            } else {
                ONE_DIGIT_X_OFFSET
            };
            let x = x_shift + offset + big_side_offset(side);
            let _ = glyphs.push(Font::Big.glyph(ones).shifted(x));
        }
        HalfLayout::Teen => {
            let ones_offset = if ones == 1 {
                SECOND_DIGIT_IS_1_X_OFFSET
            } else {
                SECOND_DIGIT_X_OFFSET
            };
            let base = x_shift + big_side_offset(side);
            let _ = glyphs.push(Font::Big.glyph(tens).shifted(base + FIRST_DIGIT_X_OFFSET));
            let _ = glyphs.push(Font::Big.glyph(ones).shifted(base + ones_offset));
        }
        HalfLayout::MediumPair => {
            let x = x_shift
                + match side {
                    Side::Left => 0,
                    Side::Right => RIGHT_SIDE_MEDIUM_FONT_X_OFFSET,
                };
            glyphs = place_medium_pair(value, x);
        }
    }

    glyphs
}

/// Two medium digits (leading zero kept) starting at column `x`
pub fn place_medium_pair(value: u8, x: i16) -> Glyphs {
    let (tens, ones) = (value / 10, value % 10);
    let mut glyphs = Glyphs::new();
    let _ = glyphs.push(Font::Medium.glyph(tens).shifted(x));
    let _ = glyphs.push(Font::Medium.glyph(ones).shifted(x + SECOND_DIGIT_MEDIUM_FONT_X_OFFSET));
    glyphs
}

fn big_side_offset(side: Side) -> i16 {
    match side {
        Side::Left => 0,
        Side::Right => RIGHT_SIDE_X_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{COLS, HALF_COLS};
    use proptest::prelude::*;

    fn span(glyphs: &Glyphs) -> (i16, i16) {
        let start = glyphs.iter().map(|g| g.columns().start).min().unwrap();
        let end = glyphs.iter().map(|g| g.columns().end).max().unwrap();
        (start, end)
    }

    #[test]
    fn test_single_digit_one_offset_delta() {
        let one = place_half(1, Side::Left, false, 0);
        let two = place_half(2, Side::Left, false, 0);
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 1);
        assert_eq!(
            one[0].x() - two[0].x(),
            ONE_DIGIT_IS_1_X_OFFSET - ONE_DIGIT_X_OFFSET
        );
    }

    #[test]
    fn test_teen_layout() {
        let glyphs = place_half(17, Side::Left, false, 0);
        assert_eq!(glyphs[0].x(), FIRST_DIGIT_X_OFFSET);
        assert_eq!(glyphs[1].x(), SECOND_DIGIT_X_OFFSET);

        let eleven = place_half(11, Side::Right, false, 0);
        assert_eq!(eleven[1].x(), SECOND_DIGIT_IS_1_X_OFFSET + RIGHT_SIDE_X_OFFSET);
    }

    #[test]
    fn test_font_switch_at_twenty() {
        assert!(!needs_medium_font(19, 0));
        assert!(needs_medium_font(20, 0));
        assert!(needs_medium_font(0, 21));

        assert_eq!(half_layout(19, needs_medium_font(19, 0)), HalfLayout::Teen);
        assert_eq!(half_layout(19, false).font(), Font::Big);
        assert_eq!(
            half_layout(20, needs_medium_font(20, 0)),
            HalfLayout::MediumPair
        );
        assert_eq!(half_layout(21, true).font(), Font::Medium);
    }

    #[test]
    fn test_medium_pair_steps_by_matrix_width() {
        let glyphs = place_half(42, Side::Right, true, 0);
        assert_eq!(glyphs[0].x(), RIGHT_SIDE_MEDIUM_FONT_X_OFFSET);
        assert_eq!(glyphs[1].x(), RIGHT_SIDE_MEDIUM_FONT_X_OFFSET + 8);
    }

    #[test]
    fn test_x_shift_moves_everything() {
        let base = place_half(15, Side::Right, false, 0);
        let moved = place_half(15, Side::Right, false, -9);
        for (a, b) in base.iter().zip(moved.iter()) {
            assert_eq!(a.x() - 9, b.x());
        }
    }

    proptest! {
        #[test]
        fn prop_halves_never_overlap(left in 0u8..=99, right in 0u8..=99) {
            let medium = needs_medium_font(left, right);
            for (value, side) in [(left, Side::Left), (right, Side::Right)] {
                let glyphs = place_half(value, side, medium, 0);

                if glyphs.len() == 2 {
                    let a = glyphs[0].columns();
                    let b = glyphs[1].columns();
                    prop_assert!(a.end <= b.start, "{} overlaps on {:?}", value, side);
                }

                let (start, end) = span(&glyphs);
                match side {
                    Side::Left => {
                        prop_assert!(start >= 0);
                        prop_assert!(end < HALF_COLS as i16);
                    }
                    Side::Right => {
                        prop_assert!(start > HALF_COLS as i16);
                        prop_assert!(end <= COLS as i16);
                    }
                }
            }
        }
    }
}
