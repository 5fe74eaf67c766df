//! Glyph bitmaps and per-render placement

use core::ops::Range;

use crate::matrix::{Framebuffer, ROWS};

/// Rows in every glyph bitmap (full panel height)
pub const GLYPH_ROWS: usize = ROWS;

/// An immutable digit bitmap
///
/// Each row is one byte with the leftmost column in the MSB. `width` is
/// the number of columns actually used, counted from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    /// Create a glyph from its row bitmaps
    pub const fn new(width: u8, rows: [u8; GLYPH_ROWS]) -> Self {
        Self { width, rows }
    }

    /// Columns used by the glyph
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Row bitmaps, leftmost column in the MSB
    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.rows
    }
}

/// A catalog glyph together with the column it is drawn at
///
/// Placement is a value: shifting returns a new `PlacedGlyph` and never
/// touches the catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    glyph: &'static Glyph,
    x: i16,
}

impl PlacedGlyph {
    /// Place a glyph at column 0
    pub const fn new(glyph: &'static Glyph) -> Self {
        Self { glyph, x: 0 }
    }

    /// The same glyph moved `dx` columns to the right
    pub const fn shifted(self, dx: i16) -> Self {
        Self {
            glyph: self.glyph,
            x: self.x + dx,
        }
    }

    /// Leftmost column
    pub const fn x(&self) -> i16 {
        self.x
    }

    /// Underlying catalog glyph
    pub fn glyph(&self) -> &'static Glyph {
        self.glyph
    }

    /// Columns claimed by the glyph at its current placement
    pub fn columns(&self) -> Range<i16> {
        self.x..self.x + self.glyph.width as i16
    }

    /// OR the glyph into the framebuffer
    pub fn draw(&self, fb: &mut Framebuffer) {
        for (row, &bits) in self.glyph.rows.iter().enumerate() {
            fb.blit_row(row as i16, self.x, bits);
        }
    }
}
