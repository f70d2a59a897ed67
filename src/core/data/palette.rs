use crate::core::data::colour::Colour;
use crate::core::errors::ConfigError;

/// How escape counts are spread across the palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PaletteStyle {
    /// Index the palette by the integer escape count, no blending.
    #[default]
    Discrete,
    /// Rescale the smooth escape estimate over the whole iteration range and
    /// blend neighbouring entries.
    Continuous,
}

/// An ordered, non-empty list of colours.
///
/// Palettes are shared between requests behind an `Arc` and replaced as a
/// whole, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
    style: PaletteStyle,
}

impl Palette {
    pub fn new(colours: Vec<Colour>, style: PaletteStyle) -> Result<Self, ConfigError> {
        if colours.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        Ok(Self { colours, style })
    }

    /// Builds one of the built-in palettes, whose colour tables are never empty.
    pub(crate) fn from_static(colours: &'static [Colour], style: PaletteStyle) -> Self {
        debug_assert!(!colours.is_empty());

        Self {
            colours: colours.to_vec(),
            style,
        }
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> PaletteStyle {
        self.style
    }

    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.style == PaletteStyle::Continuous
    }

    /// Colour at `index`, wrapping around the palette length.
    #[inline]
    #[must_use]
    pub fn wrapped(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}
