use std::path::PathBuf;

use clap::Parser;
use sc_core::palette::Palette;

/// spritescii — sprite-to-ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: PathBuf,

    /// Destination text file.
    #[arg(long)]
    pub out: PathBuf,

    /// Palette: default, low-contrast, high-contrast, high-contrast-two,
    /// high-color-range — or a numeric selector 0..=4.
    #[arg(long, default_value = "default")]
    pub palette: String,

    /// Trace an outline around opaque regions.
    #[arg(long, default_value_t = false)]
    pub outline: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Map the palette argument to a selector.
    ///
    /// Numeric arguments go through the defensive index boundary check;
    /// names go through the closed-name table.
    ///
    /// # Errors
    /// Returns an error for any name or index outside the registry.
    pub fn resolve_palette(&self) -> anyhow::Result<Palette> {
        if let Ok(index) = self.palette.parse::<usize>() {
            return Ok(Palette::from_index(index)?);
        }
        Palette::from_name(&self.palette).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown palette '{}'. Valid: default, low-contrast, high-contrast, \
                 high-contrast-two, high-color-range, or an index 0..=4.",
                self.palette
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_palette(palette: &str) -> Cli {
        Cli::parse_from([
            "spritescii",
            "--image",
            "in.png",
            "--out",
            "out.txt",
            "--palette",
            palette,
        ])
    }

    #[test]
    fn palette_accepts_names_and_indices() {
        assert_eq!(
            cli_with_palette("high-contrast").resolve_palette().unwrap(),
            Palette::HighContrast
        );
        assert_eq!(
            cli_with_palette("4").resolve_palette().unwrap(),
            Palette::HighColorRange
        );
    }

    #[test]
    fn palette_rejects_unknown_selectors() {
        assert!(cli_with_palette("sepia").resolve_palette().is_err());
        assert!(cli_with_palette("5").resolve_palette().is_err());
    }
}
