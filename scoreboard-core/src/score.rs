//! Score model
//!
//! Holds the score of both teams and knows how to draw it, including the
//! short blink that acknowledges a newly set score.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal_async::delay::DelayNs;

use crate::matrix::{Framebuffer, Half, SharedPanel, Side};
use crate::render::layout::{needs_medium_font, place_half};
use crate::render::{Renderable, DELIMITER_WIDTH, DELIMITER_X};
use crate::traits::{MatrixPanel, PanelError, PanelExt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest score per side
pub const MIN_SCORE: u8 = 0;

/// Highest score per side
pub const MAX_SCORE: u8 = 99;

/// Rows of the delimiter bar between the halves
const DELIMITER_ROWS: [i16; 2] = [7, 8];

/// Pause after showing the old score, before blanking
pub const CHANGE_SETTLE_MS: u32 = 300;

/// How long the blank (or delimiter-less flash) stays visible
pub const CHANGE_COMMIT_MS: u32 = 400;

/// Saturate a raw value into the score range
pub fn clamp_score(value: i32) -> u8 {
    value.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

/// Score of both teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    /// Create a score, clamping both sides
    pub fn new(left: i32, right: i32) -> Self {
        Self {
            left: clamp_score(left),
            right: clamp_score(right),
        }
    }

    /// Which halves differ from `other`
    pub fn changed_halves(&self, other: &Score) -> Option<Half> {
        match (self.left != other.left, self.right != other.right) {
            (true, true) => Some(Half::LeftAndRight),
            (true, false) => Some(Half::Left),
            (false, true) => Some(Half::Right),
            (false, false) => None,
        }
    }
}

/// Shared score state
///
/// The score is mutated by command handling and read by the view loop;
/// every access is a short critical section on `M`.
pub struct ScoreModel<M: RawMutex> {
    score: Mutex<M, Cell<Score>>,
}

impl<M: RawMutex> Default for ScoreModel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> ScoreModel<M> {
    /// Create a model at 0:0
    pub const fn new() -> Self {
        Self {
            score: Mutex::new(Cell::new(Score { left: 0, right: 0 })),
        }
    }

    /// Point-in-time copy of the score
    pub fn score(&self) -> Score {
        self.score.lock(|s| s.get())
    }

    /// Set the left score, saturating to 0-99
    pub fn set_left(&self, value: i32) {
        self.score.lock(|s| {
            let mut score = s.get();
            score.left = clamp_score(value);
            s.set(score);
        });
    }

    /// Set the right score, saturating to 0-99
    pub fn set_right(&self, value: i32) {
        self.score.lock(|s| {
            let mut score = s.get();
            score.right = clamp_score(value);
            s.set(score);
        });
    }

    /// Set both scores, each saturating to 0-99
    pub fn set_score(&self, left: i32, right: i32) {
        self.score.lock(|s| s.set(Score::new(left, right)));
    }

    /// Draw the score, optionally without the delimiter bar
    pub fn draw_with(&self, fb: &mut Framebuffer, x_shift: i16, delimiter: bool) {
        draw_score(fb, self.score(), x_shift, delimiter);
    }

    /// Draw as one frame; see [`Renderable::render`]
    pub fn render_with<P: MatrixPanel>(
        &self,
        panel: &mut P,
        x_shift: i16,
        pre_clear: bool,
        redraw: bool,
        delimiter: bool,
    ) -> Result<(), PanelError> {
        if pre_clear {
            panel.fill(false);
        }
        self.draw_with(panel.framebuffer_mut(), x_shift, delimiter);
        if redraw {
            panel.redraw_twice()
        } else {
            Ok(())
        }
    }

    /// Show a new score with a short blink on the halves that change
    ///
    /// 1. the current score is shown for [`CHANGE_SETTLE_MS`];
    /// 2. both sides change: the panel goes blank; one side changes: that
    ///    half goes blank; nothing changes: the score flashes without its
    ///    delimiter;
    /// 3. the new score is committed;
    /// 4. after [`CHANGE_COMMIT_MS`] the new score is shown.
    ///
    /// The score is committed even if a flush fails; the first panel error
    /// is returned at the end.
    pub async fn render_change<MP, P, D>(
        &self,
        panel: &SharedPanel<MP, P>,
        delay: &mut D,
        left: i32,
        right: i32,
    ) -> Result<(), PanelError>
    where
        MP: RawMutex,
        P: MatrixPanel,
        D: DelayNs,
    {
        let mut status = panel.frame(|p| self.render_with(p, 0, true, true, true));
        delay.delay_ms(CHANGE_SETTLE_MS).await;

        let new = Score::new(left, right);
        let changed = new.changed_halves(&self.score());
        status = status.and(panel.frame(|p| match changed {
            Some(half) => {
                p.clear_half(half);
                p.redraw_twice()
            }
            None => self.render_with(p, 0, true, true, false),
        }));

        self.score.lock(|s| s.set(new));
        delay.delay_ms(CHANGE_COMMIT_MS).await;

        status.and(panel.frame(|p| self.render_with(p, 0, true, true, true)))
    }
}

impl<M: RawMutex> Renderable for ScoreModel<M> {
    fn draw(&self, fb: &mut Framebuffer, x_shift: i16) {
        self.draw_with(fb, x_shift, true);
    }
}

/// Draw a score into the framebuffer
pub fn draw_score(fb: &mut Framebuffer, score: Score, x_shift: i16, delimiter: bool) {
    let medium = needs_medium_font(score.left, score.right);

    for glyph in place_half(score.left, Side::Left, medium, x_shift) {
        glyph.draw(fb);
    }
    if delimiter {
        for row in DELIMITER_ROWS {
            fb.hline(DELIMITER_X + x_shift, row, DELIMITER_WIDTH, true);
        }
    }
    for glyph in place_half(score.right, Side::Right, medium, x_shift) {
        glyph.draw(fb);
    }
}
