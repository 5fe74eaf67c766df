//! In-memory pixel grid for the cascaded matrix panel
//!
//! The logical grid is 16 rows × 32 columns. Each row is kept as a `u32`
//! with column 0 in the most significant bit, which makes half and quarter
//! clearing a single mask operation per row.
//!
//! Physically the grid is split into 8 chips of 8×8 pixels:
//!
//! ```text
//!        col 0-7   8-15   16-23  24-31
//! row 0-7  [0]      [1]     [2]    [3]
//! row 8-15 [4]      [5]     [6]    [7]
//! ```
//!
//! Chip 0 is the first chip in the cascade (closest to the controller).

/// Rows in a single chip
pub const ROWS_IN_MATRIX: usize = 8;

/// Columns in a single chip
pub const COLS_IN_MATRIX: usize = 8;

/// Chips along the horizontal axis
pub const MATRIXES_IN_ROW: usize = 4;

/// Chips along the vertical axis
pub const MATRIXES_IN_COL: usize = 2;

/// Total chips in the cascade
pub const CASCADED_MATRIXES: usize = MATRIXES_IN_ROW * MATRIXES_IN_COL;

/// Logical rows of the panel
pub const ROWS: usize = ROWS_IN_MATRIX * MATRIXES_IN_COL;

/// Logical columns of the panel
pub const COLS: usize = COLS_IN_MATRIX * MATRIXES_IN_ROW;

/// Width of one score half in columns
pub const HALF_COLS: usize = COLS / 2;

const LEFT_HALF_MASK: u32 = 0xFFFF_0000;
const RIGHT_HALF_MASK: u32 = 0x0000_FFFF;

/// Horizontal side of the scoreboard (one team each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Columns selected for clearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    Left,
    Right,
    LeftAndRight,
}

impl From<Side> for Half {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Half::Left,
            Side::Right => Half::Right,
        }
    }
}

impl Half {
    fn column_mask(self) -> u32 {
        match self {
            Half::Left => LEFT_HALF_MASK,
            Half::Right => RIGHT_HALF_MASK,
            Half::LeftAndRight => LEFT_HALF_MASK | RIGHT_HALF_MASK,
        }
    }
}

/// Vertical half of the panel (one chip row)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowHalf {
    Top,
    Bottom,
}

impl RowHalf {
    fn rows(self) -> core::ops::Range<usize> {
        match self {
            RowHalf::Top => 0..ROWS_IN_MATRIX,
            RowHalf::Bottom => ROWS_IN_MATRIX..ROWS,
        }
    }
}

/// Quarter of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quarter {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quarter {
    fn split(self) -> (RowHalf, Half) {
        match self {
            Quarter::TopLeft => (RowHalf::Top, Half::Left),
            Quarter::TopRight => (RowHalf::Top, Half::Right),
            Quarter::BottomLeft => (RowHalf::Bottom, Half::Left),
            Quarter::BottomRight => (RowHalf::Bottom, Half::Right),
        }
    }
}

/// Physical location of a logical pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelAddress {
    /// Chip index in the cascade (0 = first chip)
    pub chip: u8,
    /// Row inside the chip (0-7)
    pub row: u8,
    /// Column inside the chip (0-7, 0 = leftmost)
    pub col: u8,
}

impl PixelAddress {
    /// Map a logical pixel to its chip, or `None` if it is off the grid
    pub fn locate(row: i16, col: i16) -> Option<Self> {
        if !in_bounds(row, col) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let chip = (row / ROWS_IN_MATRIX) * MATRIXES_IN_ROW + col / COLS_IN_MATRIX;
        Some(Self {
            chip: chip as u8,
            row: (row % ROWS_IN_MATRIX) as u8,
            col: (col % COLS_IN_MATRIX) as u8,
        })
    }

    /// Logical (row, col) of this address
    pub fn logical(&self) -> (usize, usize) {
        let chip = self.chip as usize;
        let row = (chip / MATRIXES_IN_ROW) * ROWS_IN_MATRIX + self.row as usize;
        let col = (chip % MATRIXES_IN_ROW) * COLS_IN_MATRIX + self.col as usize;
        (row, col)
    }
}

fn in_bounds(row: i16, col: i16) -> bool {
    (0..ROWS as i16).contains(&row) && (0..COLS as i16).contains(&col)
}

fn column_bit(col: usize) -> u32 {
    1 << (COLS - 1 - col)
}

/// One bit per pixel over the whole panel
///
/// All drawing operations clip silently: content placed partly off the
/// grid (as happens while scrolling) only keeps its visible part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Framebuffer {
    rows: [u32; ROWS],
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self { rows: [0; ROWS] }
    }

    /// Read a pixel; off-grid pixels read as off
    pub fn pixel(&self, row: i16, col: i16) -> bool {
        if !in_bounds(row, col) {
            return false;
        }
        self.rows[row as usize] & column_bit(col as usize) != 0
    }

    /// Set or clear a single pixel
    pub fn set_pixel(&mut self, row: i16, col: i16, on: bool) {
        if !in_bounds(row, col) {
            return;
        }
        let bit = column_bit(col as usize);
        if on {
            self.rows[row as usize] |= bit;
        } else {
            self.rows[row as usize] &= !bit;
        }
    }

    /// Set every pixel to `on`
    pub fn fill(&mut self, on: bool) {
        let value = if on { u32::MAX } else { 0 };
        self.rows = [value; ROWS];
    }

    /// Draw a horizontal line of `length` pixels starting at (`x`, `y`)
    pub fn hline(&mut self, x: i16, y: i16, length: u16, on: bool) {
        for dx in 0..length as i16 {
            self.set_pixel(y, x.saturating_add(dx), on);
        }
    }

    /// Clear the columns of one or both halves across all rows
    pub fn clear_half(&mut self, half: Half) {
        let mask = half.column_mask();
        for row in &mut self.rows {
            *row &= !mask;
        }
    }

    /// Clear the top or bottom chip row across all columns
    pub fn clear_row_half(&mut self, rows: RowHalf) {
        for row in rows.rows() {
            self.rows[row] = 0;
        }
    }

    /// Clear one quarter of the panel
    pub fn clear_quarter(&mut self, quarter: Quarter) {
        let (rows, half) = quarter.split();
        let mask = half.column_mask();
        for row in rows.rows() {
            self.rows[row] &= !mask;
        }
    }

    /// OR an 8-pixel wide bit pattern into a row, MSB at column `x`
    ///
    /// Only the pixels that are set in `bits` are touched.
    pub fn blit_row(&mut self, row: i16, x: i16, bits: u8) {
        if !(0..ROWS as i16).contains(&row) || bits == 0 {
            return;
        }
        // Place the pattern in a wide window so negative offsets shift cleanly
        let window = (bits as u64) << 56;
        let shifted = if x >= 0 {
            window.checked_shr(x as u32).unwrap_or(0)
        } else {
            window.checked_shl(x.unsigned_abs() as u32).unwrap_or(0)
        };
        self.rows[row as usize] |= (shifted >> 32) as u32;
    }

    /// Raw bits of a logical row, column 0 in the MSB
    pub fn row_bits(&self, row: usize) -> u32 {
        self.rows[row]
    }

    /// Byte sent to `chip` for its local row `local_row` (MSB = leftmost column)
    pub fn chip_row(&self, chip: usize, local_row: usize) -> u8 {
        let row = (chip / MATRIXES_IN_ROW) * ROWS_IN_MATRIX + local_row;
        let block = chip % MATRIXES_IN_ROW;
        let shift = (MATRIXES_IN_ROW - 1 - block) * COLS_IN_MATRIX;
        (self.rows[row] >> shift) as u8
    }

    /// True if any pixel in the column is lit
    pub fn column_lit(&self, col: usize) -> bool {
        col < COLS && self.rows.iter().any(|row| row & column_bit(col) != 0)
    }

    /// True if no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=u32:#010x}", row);
        }
        defmt::write!(f, "]");
    }
}
