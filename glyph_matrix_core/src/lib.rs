//! Core of the 8×8 glyph matrix pipeline: the packed [`Bitmap`], its text
//! rendering and the serpentine drive commands derived from it.

pub mod bitmap;
pub mod command;
pub mod error;
pub mod layout;
pub mod visualize;

pub use bitmap::{Bitmap, Raster};
pub use command::{encode_commands, format_commands, DriveCommand, Polarity};
pub use error::Error;
pub use visualize::render_text;
