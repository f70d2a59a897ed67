use crate::core::data::colour::Colour;
use crate::core::data::palette::{Palette, PaletteStyle};

const PERU: Colour = Colour::rgb(205, 133, 63);
const NAVY: Colour = Colour::rgb(0, 0, 128);
const ANTIQUE_WHITE: Colour = Colour::rgb(250, 235, 215);
const DARK_BLUE: Colour = Colour::rgb(0, 0, 139);
const YELLOW: Colour = Colour::rgb(255, 255, 0);
const MISTY_ROSE: Colour = Colour::rgb(255, 228, 225);
const ROYAL_BLUE: Colour = Colour::rgb(65, 105, 225);
const RED: Colour = Colour::rgb(255, 0, 0);
const ORANGE: Colour = Colour::rgb(255, 165, 0);
const GREEN: Colour = Colour::rgb(0, 128, 0);
const BLUE: Colour = Colour::rgb(0, 0, 255);
const INDIGO: Colour = Colour::rgb(75, 0, 130);
const VIOLET: Colour = Colour::rgb(238, 130, 238);
const TURQUOISE: Colour = Colour::rgb(64, 224, 208);
const INDIAN_RED: Colour = Colour::rgb(205, 92, 92);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Bands,
    YellowBlue,
    Rogybiv,
    Kayleigh,
    Zebra,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Bands,
        Self::YellowBlue,
        Self::Rogybiv,
        Self::Kayleigh,
        Self::Zebra,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bands => "Bands",
            Self::YellowBlue => "Yellow-blue",
            Self::Rogybiv => "ROGYBIV",
            Self::Kayleigh => "Kayleigh",
            Self::Zebra => "Zebra",
        }
    }

    #[must_use]
    pub const fn style(self) -> PaletteStyle {
        match self {
            Self::Bands | Self::Zebra => PaletteStyle::Discrete,
            Self::YellowBlue | Self::Rogybiv | Self::Kayleigh => PaletteStyle::Continuous,
        }
    }

    #[must_use]
    pub fn colours(self) -> &'static [Colour] {
        match self {
            Self::Bands => &[PERU, NAVY, ANTIQUE_WHITE],
            Self::YellowBlue => &[DARK_BLUE, YELLOW, MISTY_ROSE, ROYAL_BLUE],
            Self::Rogybiv => &[RED, ORANGE, GREEN, YELLOW, BLUE, INDIGO, VIOLET],
            Self::Kayleigh => &[TURQUOISE, INDIAN_RED, INDIAN_RED],
            Self::Zebra => &[Colour::WHITE, Colour::BLACK],
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        Palette::from_static(self.colours(), self.style())
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
