//! Physical wiring of the matrix.
//!
//! Cells are chained in a serpentine (boustrophedon) order: even rows run left
//! to right, odd rows run right to left, so the last cell of one row sits next
//! to the first cell of the following row.
//!
//! ```text
//!  0  1  2  3  4  5  6  7
//! 15 14 13 12 11 10  9  8
//! 16 17 18 19 20 21 22 23
//! ...
//! 63 62 61 60 59 58 57 56
//! ```

pub const ROWS: usize = 8;
pub const COLS: usize = 8;
pub const CELLS: usize = ROWS * COLS;

/// Drive index of cell (`row`, `col`).
///
/// Both coordinates must be below 8.
///
/// ```
/// use glyph_matrix_core::layout::serpentine_index;
///
/// assert_eq!(serpentine_index(0, 0), 0);
/// assert_eq!(serpentine_index(1, 0), 15);
/// assert_eq!(serpentine_index(7, 7), 56);
/// ```
pub const fn serpentine_index(row: usize, col: usize) -> u8 {
    debug_assert!(row < ROWS && col < COLS);
    let offset = if row % 2 == 0 { col } else { COLS - 1 - col };
    (row * COLS + offset) as u8
}
