//! Turn a character or an image file into a packed 8×8 [`Bitmap`].
//!
//! # Examples
//! ```no_run
//! # use glyph_matrix::rasterizer::{rasterize, FontSource, DEFAULT_THRESHOLD};
//! // A single character is drawn with the builtin 5x8 font.
//! let glyph = rasterize("A", &FontSource::DEFAULT, DEFAULT_THRESHOLD).unwrap();
//!
//! // Anything that exists on disk is decoded as an image.
//! let picture = rasterize("heart.png", &FontSource::DEFAULT, 100).unwrap();
//! ```

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use embedded_graphics::{
    mono_font::{iso_8859_1, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use glyph_matrix_core::{
    bitmap::{Bitmap, Raster, HIGH, WIDTH},
    error::{Error, FontLoadError, ImageDecodeError, InvalidInputError},
};
use image::{
    imageops::{self, FilterType},
    ImageReader,
};
use tracing::debug;

pub const DEFAULT_THRESHOLD: u8 = 128;

/// Where the glyph's top-left corner lands on the canvas. One pixel up to
/// compensate for the empty ascent row of 8px fonts.
const GLYPH_ORIGIN: Point = Point::new(0, -1);

/// Font used for the character path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Builtin(BuiltinFont),
    /// A PC Screen Font (version 2) file.
    Psf2(PathBuf),
}

impl FontSource {
    pub const DEFAULT: FontSource = FontSource::Builtin(BuiltinFont::Font5x8);
}

impl Default for FontSource {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(font) => write!(f, "builtin {}", font.name()),
            Self::Psf2(path) => write!(f, "{}", path.display()),
        }
    }
}

/// ISO 8859-1 mono fonts bundled with embedded-graphics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BuiltinFont {
    #[value(name = "4x6")]
    Font4x6,
    #[value(name = "5x7")]
    Font5x7,
    #[default]
    #[value(name = "5x8")]
    Font5x8,
    #[value(name = "6x9")]
    Font6x9,
    #[value(name = "6x10")]
    Font6x10,
}

impl BuiltinFont {
    pub fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Font4x6 => &iso_8859_1::FONT_4X6,
            Self::Font5x7 => &iso_8859_1::FONT_5X7,
            Self::Font5x8 => &iso_8859_1::FONT_5X8,
            Self::Font6x9 => &iso_8859_1::FONT_6X9,
            Self::Font6x10 => &iso_8859_1::FONT_6X10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Font4x6 => "4x6",
            Self::Font5x7 => "5x7",
            Self::Font5x8 => "5x8",
            Self::Font6x9 => "6x9",
            Self::Font6x10 => "6x10",
        }
    }

    /// Printable ASCII and the upper half of Latin-1; every bundled cell size
    /// covers the same set.
    pub fn has_glyph(c: char) -> bool {
        matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}')
    }
}

/// How a raw input string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Char(char),
    Image(&'a Path),
}

impl<'a> Input<'a> {
    /// A lone character wins unless a file of that name exists.
    pub fn classify(input: &'a str) -> Result<Self, InvalidInputError> {
        let path = Path::new(input);
        let exists = path.exists();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !exists => Ok(Self::Char(c)),
            _ if exists => Ok(Self::Image(path)),
            _ => Err(InvalidInputError {
                input: input.to_owned(),
            }),
        }
    }
}

/// Rasterize `input` and pack it into eight row bytes.
///
/// `threshold` only applies to images: a grey level strictly above it is on.
pub fn rasterize(input: &str, font: &FontSource, threshold: u8) -> Result<Bitmap, Error> {
    let raster = match Input::classify(input)? {
        Input::Char(c) => {
            debug!(glyph = ?c, %font, "rendering glyph");
            render_glyph(c, font)?
        }
        Input::Image(path) => {
            debug!(path = %path.display(), threshold, "rendering image");
            render_image(path, threshold)?
        }
    };
    Ok(raster.pack())
}

pub fn render_glyph(c: char, font: &FontSource) -> Result<Raster, FontLoadError> {
    let mut raster = Raster::new();
    match font {
        FontSource::Builtin(builtin) => {
            if !BuiltinFont::has_glyph(c) {
                return Err(missing_glyph(font, c));
            }
            let style = MonoTextStyle::new(builtin.mono_font(), BinaryColor::On);
            let mut buf = [0; 4];
            Text::with_baseline(c.encode_utf8(&mut buf), GLYPH_ORIGIN, style, Baseline::Top)
                .draw(&mut raster)
                .unwrap_or_else(|never| match never {});
        }
        FontSource::Psf2(path) => {
            let data = fs::read(path).map_err(|e| FontLoadError {
                font: font.to_string(),
                reason: e.to_string(),
            })?;
            let psf = psf2::Font::new(data).map_err(|e| FontLoadError {
                font: font.to_string(),
                reason: format!("not a PSF2 font: {e:?}"),
            })?;
            let glyph = psf.get_unicode(c).ok_or_else(|| missing_glyph(font, c))?;
            let pixels = glyph.enumerate().flat_map(|(y, row)| {
                row.enumerate().filter(|&(_, on)| on).map(move |(x, _)| {
                    Pixel(GLYPH_ORIGIN + Point::new(x as i32, y as i32), BinaryColor::On)
                })
            });
            raster
                .draw_iter(pixels)
                .unwrap_or_else(|never| match never {});
        }
    }
    Ok(raster)
}

pub fn render_image(path: &Path, threshold: u8) -> Result<Raster, ImageDecodeError> {
    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| ImageDecodeError::new(path, e))?
        .decode()
        .map_err(|e| ImageDecodeError::new(path, e))?;
    debug!(width = img.width(), height = img.height(), "decoded");

    let gray = img.into_luma8();
    let small = imageops::resize(&gray, WIDTH, HIGH, FilterType::Triangle);
    Ok(Raster::from_fn(|row, col| {
        small.get_pixel(col as u32, row as u32).0[0] > threshold
    }))
}

fn missing_glyph(font: &FontSource, c: char) -> FontLoadError {
    FontLoadError {
        font: font.to_string(),
        reason: format!("no glyph for {c:?}"),
    }
}
