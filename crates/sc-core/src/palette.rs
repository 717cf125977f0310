use crate::error::CoreError;

/// Compact blocks — good default for icons and small sprites.
const RAMP_DEFAULT: &[char] = &[' ', '.', '░', '▒', '▓', '█'];

/// Stretched mid-tones — better for dark images / low contrast.
const RAMP_LOW_CONTRAST: &[char] = &[
    ' ', '.', '░', '▒', '▒', '▒', '▓', '▓', '▓', '█', '█', '█', '█',
];

/// Doubled dense block — better for high-contrast images.
const RAMP_HIGH_CONTRAST: &[char] = &[' ', '.', '░', '▒', '▓', '▓', '█'];

/// Doubled light block — alternative high-contrast ramp.
const RAMP_HIGH_CONTRAST_TWO: &[char] = &[' ', '.', '░', '░', '▒', '▓', '█'];

/// Wide ramp — better for images with a higher color range.
const RAMP_HIGH_COLOR_RANGE: &[char] = &[
    ' ', ' ', '.', '░', '░', '░', '░', '▒', '▒', '▒', '▒', '▓', '▓', '▓', '█', '█', '█', '█', '█',
    '█',
];

/// Near-dark glyph shared by every built-in ramp. The normalizer blanks it,
/// together with transparent cells, in the final image.
pub const FAINT_GLYPH: char = '.';

/// Built-in character ramp selector, ordered emptiest→densest.
///
/// Which ramp works best depends on the image; the variant names are
/// guidelines, not guarantees.
///
/// # Example
/// ```
/// use sc_core::palette::Palette;
/// let ramp = Palette::Default.ramp();
/// assert_eq!(ramp[0], ' ');
/// assert_eq!(ramp[ramp.len() - 1], '█');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// Compact blocks (for icons).
    #[default]
    Default,
    /// For dark images / low contrast.
    LowContrast,
    /// For high-contrast images.
    HighContrast,
    /// For high-contrast images, lighter mid-range.
    HighContrastTwo,
    /// For images with a higher color range.
    HighColorRange,
}

impl Palette {
    /// All selectors, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::LowContrast,
        Self::HighContrast,
        Self::HighContrastTwo,
        Self::HighColorRange,
    ];

    /// The character ramp for this selector. Every ramp has length ≥ 2.
    ///
    /// # Example
    /// ```
    /// use sc_core::palette::Palette;
    /// assert_eq!(Palette::LowContrast.ramp().len(), 13);
    /// ```
    #[must_use]
    pub const fn ramp(self) -> &'static [char] {
        match self {
            Self::Default => RAMP_DEFAULT,
            Self::LowContrast => RAMP_LOW_CONTRAST,
            Self::HighContrast => RAMP_HIGH_CONTRAST,
            Self::HighContrastTwo => RAMP_HIGH_CONTRAST_TWO,
            Self::HighColorRange => RAMP_HIGH_COLOR_RANGE,
        }
    }

    /// Boundary check for selectors arriving as untyped integers.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSelector`] for any index outside `0..=4`.
    ///
    /// # Example
    /// ```
    /// use sc_core::palette::Palette;
    /// assert_eq!(Palette::from_index(2).unwrap(), Palette::HighContrast);
    /// assert!(Palette::from_index(5).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidSelector { index })
    }

    /// Parse a kebab-case selector name. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "low-contrast" => Some(Self::LowContrast),
            "high-contrast" => Some(Self::HighContrast),
            "high-contrast-two" => Some(Self::HighContrastTwo),
            "high-color-range" => Some(Self::HighColorRange),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ramp_has_at_least_two_glyphs() {
        // Index arithmetic divides by len - 1.
        for palette in Palette::ALL {
            assert!(palette.ramp().len() >= 2, "{palette:?} ramp too short");
        }
    }

    #[test]
    fn every_ramp_starts_empty_and_ends_dense() {
        for palette in Palette::ALL {
            let ramp = palette.ramp();
            assert_eq!(ramp[0], ' ');
            assert_eq!(ramp[ramp.len() - 1], '█');
        }
    }

    #[test]
    fn from_index_covers_the_closed_enumeration() {
        for (i, palette) in Palette::ALL.iter().enumerate() {
            assert_eq!(Palette::from_index(i).unwrap(), *palette);
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        let err = Palette::from_index(5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelector { index: 5 }));
    }

    #[test]
    fn from_name_roundtrips_known_selectors() {
        assert_eq!(Palette::from_name("default"), Some(Palette::Default));
        assert_eq!(
            Palette::from_name("high-color-range"),
            Some(Palette::HighColorRange)
        );
        assert_eq!(Palette::from_name("sepia"), None);
    }
}
