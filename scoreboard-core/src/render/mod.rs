//! Renderable information items
//!
//! A [`Renderable`] draws itself into the framebuffer at a horizontal
//! shift. The view scheduler works with [`InfoItem`], a closed set of the
//! items the board can show; adding a variant (a date, for instance) only
//! needs a new arm here.

pub mod layout;
pub mod time;

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::matrix::Framebuffer;
use crate::score::ScoreModel;
use crate::traits::{MatrixPanel, PanelError, PanelExt, TimeSource};

pub use time::TimeView;

/// First column of the two-column delimiter between the halves
pub const DELIMITER_X: i16 = 15;

/// Width of every delimiter dot
pub const DELIMITER_WIDTH: u16 = 2;

/// Something that can draw itself on the panel
pub trait Renderable {
    /// Draw into the framebuffer, shifted `x_shift` columns to the right
    fn draw(&self, fb: &mut Framebuffer, x_shift: i16);

    /// Draw as one complete frame
    ///
    /// Optionally blanks the framebuffer first and optionally flushes it
    /// (twice) afterwards.
    fn render<P: MatrixPanel>(
        &self,
        panel: &mut P,
        x_shift: i16,
        pre_clear: bool,
        redraw: bool,
    ) -> Result<(), PanelError> {
        if pre_clear {
            panel.fill(false);
        }
        self.draw(panel.framebuffer_mut(), x_shift);
        if redraw {
            panel.redraw_twice()
        } else {
            Ok(())
        }
    }
}

/// An item the view scheduler can show
pub enum InfoItem<'a, M: RawMutex, T> {
    /// Current score of both teams
    Score(&'a ScoreModel<M>),
    /// Time of day
    Time(TimeView<'a, T>),
}

impl<'a, M: RawMutex, T> Clone for InfoItem<'a, M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: RawMutex, T> Copy for InfoItem<'a, M, T> {}

impl<'a, M: RawMutex, T: TimeSource> Renderable for InfoItem<'a, M, T> {
    fn draw(&self, fb: &mut Framebuffer, x_shift: i16) {
        match self {
            InfoItem::Score(score) => score.draw(fb, x_shift),
            InfoItem::Time(time) => time.draw(fb, x_shift),
        }
    }
}
