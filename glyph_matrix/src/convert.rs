//! The whole pipeline in one call: rasterize, render, encode.

use std::fmt;

use glyph_matrix_core::{
    bitmap::Bitmap,
    command::{encode_commands, format_commands, DriveCommand},
    error::Error,
    visualize::render_text,
};
use tracing::{debug, info};

use crate::rasterizer::{rasterize, FontSource, DEFAULT_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub threshold: u8,
    pub font: FontSource,
    /// Duty for even rows (north pole).
    pub duty_even: u32,
    /// Duty for odd rows (south pole).
    pub duty_odd: u32,
}

impl ConvertOptions {
    pub const DEFAULT: ConvertOptions = ConvertOptions {
        threshold: DEFAULT_THRESHOLD,
        font: FontSource::DEFAULT,
        duty_even: 0,
        duty_odd: 0,
    };
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything produced from one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub bitmap: Bitmap,
    pub text: String,
    pub commands: Vec<DriveCommand>,
}

impl Conversion {
    pub fn command_string(&self) -> String {
        format_commands(&self.commands)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bytes: {:?}", self.bitmap.rows())?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)?;
        writeln!(f, "Commands:")?;
        f.write_str(&self.command_string())
    }
}

/// Run `input` through the pipeline.
///
/// ```no_run
/// # use glyph_matrix::convert::{convert, ConvertOptions};
/// let conversion = convert("A", &ConvertOptions::DEFAULT).unwrap();
/// println!("{}", conversion.text);
/// println!("{}", conversion.command_string());
/// ```
pub fn convert(input: &str, options: &ConvertOptions) -> Result<Conversion, Error> {
    let bitmap = rasterize(input, &options.font, options.threshold)?;
    debug!(rows = ?bitmap.rows(), lit = bitmap.lit_count(), "rasterized");

    let text = render_text(&bitmap);
    let commands = encode_commands(&bitmap, options.duty_even, options.duty_odd);
    info!(input, commands = commands.len(), "converted");

    Ok(Conversion {
        bitmap,
        text,
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use glyph_matrix_core::command::Polarity;
    use image::{GrayImage, Luma};
    use tempfile::TempDir;

    #[test]
    fn glyph_outputs_agree() {
        let conversion = convert("A", &ConvertOptions::DEFAULT).unwrap();
        assert_eq!(conversion.text.split('\n').count(), 8);
        assert_eq!(
            conversion.commands.len(),
            conversion.bitmap.lit_count() as usize
        );
        assert_eq!(
            conversion.text.matches('█').count(),
            conversion.commands.len()
        );
    }

    #[test]
    fn duties_are_passed_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("white.bmp");
        GrayImage::from_pixel(8, 8, Luma([255])).save(&path).unwrap();

        let options = ConvertOptions {
            duty_even: 40,
            duty_odd: 60,
            ..ConvertOptions::DEFAULT
        };
        let conversion = convert(path.to_str().unwrap(), &options).unwrap();
        assert_eq!(conversion.commands.len(), 64);
        for cmd in &conversion.commands {
            match cmd.polarity {
                Polarity::North => assert_eq!(cmd.duty, 40),
                Polarity::South => assert_eq!(cmd.duty, 60),
            }
        }
        assert!(conversion.command_string().starts_with("SET 0 40 0; SET 1 40 0;"));
    }

    #[test]
    fn report_layout() {
        let conversion = Conversion {
            bitmap: Bitmap::new([0x80, 0, 0, 0, 0, 0, 0, 0x01]),
            text: render_text(&Bitmap::new([0x80, 0, 0, 0, 0, 0, 0, 0x01])),
            commands: encode_commands(&Bitmap::new([0x80, 0, 0, 0, 0, 0, 0, 0x01]), 0, 0),
        };
        let report = conversion.to_string();
        let lines: Vec<_> = report.split('\n').collect();
        assert_eq!(lines[0], "Bytes: [128, 0, 0, 0, 0, 0, 0, 1]");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "█       ");
        assert_eq!(lines[9], "       █");
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "Commands:");
        assert_eq!(lines[12], "SET 0 0 0; SET 56 0 1;");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn errors_abort_the_pipeline() {
        let err = convert("not a file", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
