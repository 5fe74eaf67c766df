//! Matrix panel trait for the cascaded LED display

use crate::matrix::{Framebuffer, Half, Quarter, RowHalf};

/// Lowest intensity register value
pub const MIN_BRIGHTNESS: u8 = 0x00;

/// Highest intensity register value
pub const MAX_BRIGHTNESS: u8 = 0x0F;

/// Brightness programmed at power-on
pub const INITIAL_BRIGHTNESS: u8 = 0x03;

/// Errors that can occur when talking to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Bus write failed
    Bus,
    /// Chip-select line could not be driven
    ChipSelect,
}

/// Trait for a panel of cascaded matrix driver chips
///
/// The panel owns the framebuffer. Drawing only mutates memory; nothing
/// reaches the chips until [`redraw`](Self::redraw). Failed writes are not
/// retried and leave the framebuffer untouched, so the next redraw simply
/// sends it again.
pub trait MatrixPanel {
    /// Framebuffer mirroring the whole panel
    fn framebuffer(&self) -> &Framebuffer;

    /// Mutable framebuffer access (no I/O)
    fn framebuffer_mut(&mut self) -> &mut Framebuffer;

    /// Program every chip for matrix operation at the given brightness
    ///
    /// Safe to call again at any time to reset the chips after a fault.
    fn initialize(&mut self, brightness: u8) -> Result<(), PanelError>;

    /// Send the framebuffer to the chips
    fn redraw(&mut self) -> Result<(), PanelError>;

    /// Send the framebuffer twice in a row
    ///
    /// Both flushes are attempted; the first error is reported.
    fn redraw_twice(&mut self) -> Result<(), PanelError> {
        let first = self.redraw();
        let second = self.redraw();
        first.and(second)
    }

    /// Leave shutdown mode; the chips show their last content again
    fn turn_on(&mut self) -> Result<(), PanelError>;

    /// Enter shutdown mode without touching the framebuffer
    fn turn_off(&mut self) -> Result<(), PanelError>;

    /// Write the intensity register on every chip
    ///
    /// The caller is responsible for keeping `level` within
    /// [`MIN_BRIGHTNESS`]..=[`MAX_BRIGHTNESS`].
    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError>;

    /// Enable or disable the chips' display-test mode (all LEDs on)
    fn set_test_mode(&mut self, on: bool) -> Result<(), PanelError>;
}

/// Drawing helpers forwarding to the framebuffer
pub trait PanelExt: MatrixPanel {
    /// Set every pixel to `on`
    fn fill(&mut self, on: bool) {
        self.framebuffer_mut().fill(on);
    }

    /// Set or clear a single pixel
    fn set_pixel(&mut self, row: i16, col: i16, on: bool) {
        self.framebuffer_mut().set_pixel(row, col, on);
    }

    /// Draw a horizontal line
    fn hline(&mut self, x: i16, y: i16, length: u16, on: bool) {
        self.framebuffer_mut().hline(x, y, length, on);
    }

    /// Clear one or both halves
    fn clear_half(&mut self, half: Half) {
        self.framebuffer_mut().clear_half(half);
    }

    /// Clear the top or bottom chip row
    fn clear_row_half(&mut self, rows: RowHalf) {
        self.framebuffer_mut().clear_row_half(rows);
    }

    /// Clear a quarter of the panel
    fn clear_quarter(&mut self, quarter: Quarter) {
        self.framebuffer_mut().clear_quarter(quarter);
    }

    /// Blank the framebuffer and flush it
    fn blank(&mut self) -> Result<(), PanelError> {
        self.fill(false);
        self.redraw_twice()
    }
}

// Blanket implementation for all MatrixPanel types
impl<T: MatrixPanel> PanelExt for T {}
