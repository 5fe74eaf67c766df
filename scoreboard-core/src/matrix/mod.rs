//! Pixel grid and shared panel access
//!
//! The framebuffer is the single mutable resource shared by every
//! renderer. It is only ever touched inside [`SharedPanel::frame`], a
//! synchronous closure, so a frame is always complete before anything can
//! suspend.

pub mod framebuffer;
pub mod shared;

pub use framebuffer::{
    Framebuffer, Half, PixelAddress, Quarter, RowHalf, Side, CASCADED_MATRIXES, COLS,
    COLS_IN_MATRIX, HALF_COLS, MATRIXES_IN_COL, MATRIXES_IN_ROW, ROWS, ROWS_IN_MATRIX,
};
pub use shared::SharedPanel;
