use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glyph_matrix::{convert, BuiltinFont, ConvertOptions, FontSource, DEFAULT_THRESHOLD};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Turn a character or an image into drive commands for an 8x8 serpentine matrix.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// A single character, or the path of an image (png, jpeg, bmp, gif, ...)
    input: String,

    /// Grey level an image pixel must exceed to be lit
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Duty for even rows (north pole)
    #[arg(long, default_value_t = 0)]
    duty_even: u32,

    /// Duty for odd rows (south pole)
    #[arg(long, default_value_t = 0)]
    duty_odd: u32,

    /// Builtin font for characters
    #[arg(long, value_enum, default_value_t = BuiltinFont::default(), conflicts_with = "font_file")]
    font: BuiltinFont,

    /// PSF2 font file for characters
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Only print the command string
    #[arg(long)]
    commands_only: bool,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        let font = match &self.font_file {
            Some(path) => FontSource::Psf2(path.clone()),
            None => FontSource::Builtin(self.font),
        };
        ConvertOptions {
            threshold: self.threshold,
            font,
            duty_even: self.duty_even,
            duty_odd: self.duty_odd,
        }
    }
}

/// Typed entries lose surrounding whitespace; existing paths are kept verbatim.
fn entered_input(raw: &str) -> &str {
    if Path::new(raw).exists() {
        raw
    } else {
        raw.trim()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let input = entered_input(&args.input);
    if input.is_empty() {
        bail!("enter a character or an image path");
    }

    let conversion = convert(input, &args.options())
        .with_context(|| format!("failed to convert {input:?}"))?;
    if args.commands_only {
        println!("{}", conversion.command_string());
    } else {
        println!("{conversion}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_entry_is_trimmed() {
        assert_eq!(entered_input("  A \n"), "A");
        assert_eq!(entered_input("   "), "");
    }

    #[test]
    fn existing_path_keeps_whitespace() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("glyph.png ");
        std::fs::write(&path, b"").unwrap();
        let raw = path.to_str().unwrap();
        assert_eq!(entered_input(raw), raw);
    }

    #[test]
    fn defaults_match_library() {
        let args = Args::try_parse_from(["glyph_matrix", "A"]).unwrap();
        assert_eq!(args.options(), ConvertOptions::DEFAULT);
        assert!(!args.commands_only);
    }

    #[test]
    fn font_file_selects_psf2() {
        let args =
            Args::try_parse_from(["glyph_matrix", "A", "--font-file", "term.psf", "-t", "90"])
                .unwrap();
        let options = args.options();
        assert_eq!(options.font, FontSource::Psf2(PathBuf::from("term.psf")));
        assert_eq!(options.threshold, 90);
    }

    #[test]
    fn font_and_font_file_conflict() {
        let res = Args::try_parse_from([
            "glyph_matrix",
            "A",
            "--font",
            "6x10",
            "--font-file",
            "term.psf",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn duties_and_builtin_font() {
        let args = Args::try_parse_from([
            "glyph_matrix",
            "x",
            "--font",
            "4x6",
            "--duty-even",
            "512",
            "--duty-odd",
            "1023",
        ])
        .unwrap();
        let options = args.options();
        assert_eq!(options.font, FontSource::Builtin(BuiltinFont::Font4x6));
        assert_eq!((options.duty_even, options.duty_odd), (512, 1023));
    }
}
