use std::num::NonZeroUsize;

use crate::core::data::colour::Colour;
use crate::core::data::viewport::{DEFAULT_MAX_ITERATIONS, Viewport};
use crate::core::errors::ConfigError;

pub const DEFAULT_PREVIEW_WIDTH: u32 = 256;

/// Engine-wide settings fixed for the lifetime of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Width of the preview stage; its height follows the target aspect ratio.
    pub preview_width: u32,
    /// Colour of points that never escaped. Not taken from any palette.
    pub interior_colour: Colour,
    /// `None` renders on rayon's global pool.
    pub worker_threads: Option<NonZeroUsize>,
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_WIDTH,
            interior_colour: Colour::BLACK,
            worker_threads: None,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Original,
    Nice1,
    Nice2,
    Nice3,
    Nice4,
}

impl Location {
    pub const ALL: &'static [Self] = &[
        Self::Original,
        Self::Nice1,
        Self::Nice2,
        Self::Nice3,
        Self::Nice4,
    ];

    /// `(centre_x, centre_y, scale)` of the preset.
    #[must_use]
    pub const fn coordinates(self) -> (f64, f64, f64) {
        match self {
            Self::Original => (0.0, 0.0, 1.0),
            Self::Nice1 => (-1.0079, 0.3112109, 1.953125e-3),
            Self::Nice2 => (-0.158010477642529, 1.03264985382091, 0.015625),
            Self::Nice3 => (-0.108625065165125, -0.901442828177505, 4.7675e-9),
            Self::Nice4 => (-1.09771751632127, -0.235023128485181, 1.52587890625e-5),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Nice1 => "Nice 1",
            Self::Nice2 => "Nice 2",
            Self::Nice3 => "Nice 3",
            Self::Nice4 => "Nice 4",
        }
    }

    pub fn viewport(self, max_iterations: u32) -> Result<Viewport, ConfigError> {
        let (centre_x, centre_y, scale) = self.coordinates();
        Viewport::new(centre_x, centre_y, scale, max_iterations)
    }

    pub fn default_viewport(self) -> Result<Viewport, ConfigError> {
        self.viewport(DEFAULT_MAX_ITERATIONS)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
