//! Convert a character or an image into an 8×8 bitmap and the drive commands
//! for a serpentine-wired matrix.
//!
//! The packed types, text rendering and command encoding live in
//! [`glyph_matrix_core`] and are re-exported here.

pub mod convert;
pub mod rasterizer;

pub use convert::{convert, Conversion, ConvertOptions};
pub use glyph_matrix_core::{
    encode_commands, error, format_commands, render_text, Bitmap, DriveCommand, Error, Polarity,
    Raster,
};
pub use rasterizer::{rasterize, BuiltinFont, FontSource, DEFAULT_THRESHOLD};
