//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pixeltone_core::{ColorFilter, EditParams, Rounding};

#[derive(Parser, Debug)]
#[command(name = "pixeltone")]
#[command(version, about = "Brightness, contrast and color filter editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adjust an image and write the result
    Apply {
        /// Input image (JPEG, PNG or BMP)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image; format follows the extension
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        #[command(flatten)]
        edit: EditArgs,

        /// Write the effective parameters to a preset file
        #[arg(long, value_name = "FILE")]
        save_preset: Option<PathBuf>,
    },

    /// Print image dimensions
    Info {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Edit parameters. Explicit flags override values from `--preset`.
#[derive(clap::Args, Debug, Default)]
pub struct EditArgs {
    /// Preset file with starting parameters
    #[arg(short, long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Brightness offset (-100 to 100, 0 = unchanged)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast (-100 to 100, 50 = unchanged)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub contrast: Option<i32>,

    /// Color filter to enable; repeat for several (red, blue, yellow, green, orange)
    #[arg(short, long = "filter", value_name = "NAME")]
    pub filters: Vec<ColorFilter>,

    /// Rounding for the contrast step: "truncate" (default) or "nearest"
    #[arg(long, value_name = "MODE")]
    pub rounding: Option<Rounding>,
}

impl EditArgs {
    /// Overlay the explicit flags onto `base`.
    pub fn apply_to(&self, mut base: EditParams) -> EditParams {
        if let Some(brightness) = self.brightness {
            base.tone.brightness = brightness;
        }
        if let Some(contrast) = self.contrast {
            base.tone.contrast = contrast;
        }
        if let Some(rounding) = self.rounding {
            base.tone.rounding = rounding;
        }
        if !self.filters.is_empty() {
            base.filters = self.filters.iter().copied().collect();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixeltone_core::{FilterSet, ToneParams};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_apply_with_flags() {
        let cli = parse(&[
            "pixeltone", "apply", "in.png", "-o", "out.jpg", "--brightness", "-20", "-c", "75",
            "-f", "orange", "--filter", "Red", "--rounding", "nearest",
        ]);
        let Commands::Apply { input, out, edit, save_preset } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(input, PathBuf::from("in.png"));
        assert_eq!(out, PathBuf::from("out.jpg"));
        assert!(save_preset.is_none());

        let params = edit.apply_to(EditParams::default());
        assert_eq!(params.tone, ToneParams::new(-20, 75).with_rounding(Rounding::Nearest));
        let expected: FilterSet = [ColorFilter::Red, ColorFilter::Orange].into_iter().collect();
        assert_eq!(params.filters, expected);
    }

    #[test]
    fn test_flags_override_only_what_they_name() {
        let base = EditParams::new(
            ToneParams::new(10, 30),
            [ColorFilter::Green].into_iter().collect(),
        );
        let edit = EditArgs {
            contrast: Some(90),
            ..EditArgs::default()
        };
        let params = edit.apply_to(base);
        assert_eq!(params.tone, ToneParams::new(10, 90));
        assert!(params.filters.contains(ColorFilter::Green));
    }

    #[test]
    fn test_unknown_filter_is_rejected() {
        let result = Cli::try_parse_from(["pixeltone", "apply", "a.png", "-o", "b.png", "-f", "cyan"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_rounding_is_rejected() {
        let result = Cli::try_parse_from([
            "pixeltone", "apply", "a.png", "-o", "b.png", "--rounding", "floor",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_info() {
        let cli = parse(&["pixeltone", "info", "photo.bmp"]);
        assert!(matches!(cli.command, Commands::Info { input } if input == PathBuf::from("photo.bmp")));
    }
}
