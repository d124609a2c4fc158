//! The 8×8 matrix in its two shapes.
//!
//! A [`Raster`] is the transient drawing surface: one boolean per cell, row 0 on
//! top. With the `embedded_graphics` feature it is a [`DrawTarget`] for
//! [`BinaryColor`], so fonts and primitives can be drawn straight onto it.
//!
//! A [`Bitmap`] is what the rest of the pipeline consumes: exactly eight bytes,
//! one per row, where bit `7 - col` holds the state of column `col`
//! (bit 7 is the leftmost pixel).
//!
//! [`DrawTarget`]: embedded_graphics_core::draw_target::DrawTarget
//! [`BinaryColor`]: embedded_graphics_core::pixelcolor::BinaryColor

use std::fmt;

pub const WIDTH: u32 = 8;
pub const HIGH: u32 = 8;

const SIDE: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Raster {
    pixels: [[bool; SIDE]; SIDE],
}

impl Raster {
    pub const fn new() -> Self {
        Self {
            pixels: [[false; SIDE]; SIDE],
        }
    }

    /// Every cell on.
    pub const fn solid() -> Self {
        Self {
            pixels: [[true; SIDE]; SIDE],
        }
    }

    /// Build a raster by asking `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut raster = Self::new();
        for (row, pixels) in raster.pixels.iter_mut().enumerate() {
            for (col, pixel) in pixels.iter_mut().enumerate() {
                *pixel = f(row, col);
            }
        }
        raster
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.pixels.get(row)?.get(col).copied()
    }

    /// Cells outside the matrix are ignored.
    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        if let Some(pixel) = self.pixels.get_mut(row).and_then(|r| r.get_mut(col)) {
            *pixel = on;
        }
    }

    /// Pack each row into one byte, leftmost column first.
    pub fn pack(&self) -> Bitmap {
        let mut rows = [0; SIDE];
        for (packed, pixels) in rows.iter_mut().zip(self.pixels.iter()) {
            let mut value = 0u8;
            for &on in pixels {
                value = (value << 1) | u8::from(on);
            }
            *packed = value;
        }
        Bitmap(rows)
    }
}

/// Eight packed rows of the matrix, top row first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitmap([u8; SIDE]);

impl Bitmap {
    pub const BLANK: Bitmap = Bitmap([0x00; SIDE]);
    pub const SOLID: Bitmap = Bitmap([0xff; SIDE]);

    pub const fn new(rows: [u8; SIDE]) -> Self {
        Self(rows)
    }

    pub const fn rows(&self) -> [u8; SIDE] {
        self.0
    }

    /// State of cell (`row`, `col`); `false` outside the matrix.
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        match self.0.get(row) {
            Some(&value) if col < SIDE => get_binary_from_value(7 - col as u8, value),
            _ => false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&row| row == 0)
    }

    pub fn lit_count(&self) -> u32 {
        self.0.iter().map(|row| row.count_ones()).sum()
    }

    pub fn unpack(&self) -> Raster {
        Raster::from_fn(|row, col| self.is_on(row, col))
    }
}

impl From<[u8; SIDE]> for Bitmap {
    fn from(rows: [u8; SIDE]) -> Self {
        Self(rows)
    }
}

impl From<Bitmap> for [u8; SIDE] {
    fn from(bitmap: Bitmap) -> Self {
        bitmap.0
    }
}

impl AsRef<[u8]> for Bitmap {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::visualize::render_text(self))
    }
}

fn get_binary_from_value(offset: u8, value: u8) -> bool {
    value & 1 << offset != 0
}

#[cfg(feature = "embedded_graphics")]
mod graphics {
    use std::convert::Infallible;

    use embedded_graphics_core::{image::GetPixel, pixelcolor::BinaryColor, prelude::*};

    use super::{Bitmap, Raster, HIGH, WIDTH};

    impl OriginDimensions for Raster {
        fn size(&self) -> Size {
            Size::new(WIDTH, HIGH)
        }
    }

    impl DrawTarget for Raster {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                let Some((row, col)) = cell(point) else {
                    continue;
                };
                self.pixels[row][col] = color.is_on();
            }
            Ok(())
        }
    }

    impl GetPixel for Raster {
        type Color = BinaryColor;

        fn pixel(&self, p: Point) -> Option<Self::Color> {
            let (row, col) = cell(p)?;
            Some(self.pixels[row][col].into())
        }
    }

    impl OriginDimensions for Bitmap {
        fn size(&self) -> Size {
            Size::new(WIDTH, HIGH)
        }
    }

    impl GetPixel for Bitmap {
        type Color = BinaryColor;

        fn pixel(&self, p: Point) -> Option<Self::Color> {
            let (row, col) = cell(p)?;
            Some(self.is_on(row, col).into())
        }
    }

    fn is_point_in_matrix(point: Point) -> bool {
        point.x >= 0 && point.x < WIDTH as i32 && point.y >= 0 && point.y < HIGH as i32
    }

    fn cell(point: Point) -> Option<(usize, usize)> {
        is_point_in_matrix(point).then(|| (point.y as usize, point.x as usize))
    }
}
