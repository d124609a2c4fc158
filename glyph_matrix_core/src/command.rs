//! Drive commands for the serpentine matrix.
//!
//! Every lit cell becomes one `SET <index> <duty> <polarity>;` command. Even
//! rows drive the north pole with the even duty, odd rows the south pole with
//! the odd duty. Commands come out in raster scan order (row, then column),
//! not in index order.

use std::fmt;

use crate::bitmap::Bitmap;
use crate::layout::{serpentine_index, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Polarity {
    North = 0,
    South = 1,
}

impl Polarity {
    pub const fn for_row(row: usize) -> Self {
        if row % 2 == 0 {
            Self::North
        } else {
            Self::South
        }
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriveCommand {
    pub index: u8,
    pub duty: u32,
    pub polarity: Polarity,
}

impl fmt::Display for DriveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SET {} {} {};", self.index, self.duty, self.polarity.bit())
    }
}

/// Walk `bitmap` row by row and emit one command per lit cell.
///
/// ```
/// use glyph_matrix_core::{bitmap::Bitmap, command::{encode_commands, format_commands}};
///
/// let bitmap = Bitmap::new([0b1000_0000, 0, 0, 0, 0, 0, 0, 0b0000_0001]);
/// let commands = encode_commands(&bitmap, 0, 0);
/// assert_eq!(format_commands(&commands), "SET 0 0 0; SET 56 0 1;");
/// ```
pub fn encode_commands(bitmap: &Bitmap, duty_even: u32, duty_odd: u32) -> Vec<DriveCommand> {
    let mut commands = Vec::with_capacity(bitmap.lit_count() as usize);
    for row in 0..ROWS {
        let polarity = Polarity::for_row(row);
        let duty = match polarity {
            Polarity::North => duty_even,
            Polarity::South => duty_odd,
        };
        for col in 0..COLS {
            if !bitmap.is_on(row, col) {
                continue;
            }
            commands.push(DriveCommand {
                index: serpentine_index(row, col),
                duty,
                polarity,
            });
        }
    }
    commands
}

/// Join commands with single spaces; empty input gives an empty string.
pub fn format_commands(commands: &[DriveCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
