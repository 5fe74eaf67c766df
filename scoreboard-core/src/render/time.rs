//! Time-of-day view

use super::layout::place_medium_pair;
use super::{Renderable, DELIMITER_WIDTH, DELIMITER_X};
use crate::matrix::Framebuffer;
use crate::traits::TimeSource;

/// Shift of the minutes pair relative to the hours pair
pub const MINUTES_X_SHIFT: i16 = 18;

/// Rows of the two colon dots
const COLON_ROWS: [i16; 4] = [4, 5, 10, 11];

/// Renders `HH:MM` with medium digits, reading the clock on every draw
pub struct TimeView<'a, T> {
    source: &'a T,
}

impl<'a, T> TimeView<'a, T> {
    /// Create a view over a time source
    pub const fn new(source: &'a T) -> Self {
        Self { source }
    }
}

impl<'a, T> Clone for TimeView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for TimeView<'a, T> {}

impl<'a, T: TimeSource> Renderable for TimeView<'a, T> {
    fn draw(&self, fb: &mut Framebuffer, x_shift: i16) {
        let now = self.source.time_of_day();

        for glyph in place_medium_pair(now.hours.min(99), x_shift) {
            glyph.draw(fb);
        }
        for row in COLON_ROWS {
            fb.hline(DELIMITER_X + x_shift, row, DELIMITER_WIDTH, true);
        }
        for glyph in place_medium_pair(now.minutes.min(99), x_shift + MINUTES_X_SHIFT) {
            glyph.draw(fb);
        }
    }
}
