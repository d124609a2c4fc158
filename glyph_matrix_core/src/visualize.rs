//! Text-art rendering of a [`Bitmap`].

use crate::bitmap::Bitmap;
use crate::layout::{COLS, ROWS};

pub const FILLED: char = '█';
pub const EMPTY: char = ' ';

/// Render the bitmap as eight lines of eight cells, joined by `\n`.
///
/// ```
/// use glyph_matrix_core::{bitmap::Bitmap, visualize::render_text};
///
/// let text = render_text(&Bitmap::new([0x81, 0, 0, 0, 0, 0, 0, 0]));
/// assert_eq!(text.lines().next(), Some("█      █"));
/// ```
pub fn render_text(bitmap: &Bitmap) -> String {
    let mut out = String::with_capacity(ROWS * (COLS * FILLED.len_utf8() + 1));
    for row in 0..ROWS {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..COLS {
            out.push(if bitmap.is_on(row, col) { FILLED } else { EMPTY });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Raster;

    #[test]
    fn blank_renders_spaces() {
        let text = render_text(&Bitmap::BLANK);
        let lines: Vec<_> = text.split('\n').collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| *line == "        "));
    }

    #[test]
    fn solid_renders_blocks() {
        let text = render_text(&Raster::solid().pack());
        let lines: Vec<_> = text.split('\n').collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| *line == "████████"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn msb_is_leftmost() {
        let text = render_text(&Bitmap::new([0b1010_0000, 0, 0, 0, 0, 0, 0, 0b0000_0001]));
        let lines: Vec<_> = text.split('\n').collect();
        assert_eq!(lines[0], "█ █     ");
        assert_eq!(lines[7], "       █");
    }

    #[test]
    fn display_matches_render_text() {
        let bitmap = Bitmap::new([0x18, 0x24, 0x42, 0x7e, 0x42, 0x42, 0x42, 0x00]);
        assert_eq!(bitmap.to_string(), render_text(&bitmap));
    }
}
