use crate::core::errors::ConfigError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// The region of the complex plane shown on screen.
///
/// Every constructor and mutator validates its input, so a `Viewport` always
/// has finite centre coordinates, `scale > 0` and `max_iterations >= 1`.
/// A failed mutation leaves the viewport unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    centre_x: f64,
    centre_y: f64,
    scale: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            centre_x: 0.0,
            centre_y: 0.0,
            scale: 1.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFiniteValue { field, value })
    }
}

impl Viewport {
    pub fn new(
        centre_x: f64,
        centre_y: f64,
        scale: f64,
        max_iterations: u32,
    ) -> Result<Self, ConfigError> {
        let centre_x = require_finite("centre_x", centre_x)?;
        let centre_y = require_finite("centre_y", centre_y)?;
        let scale = require_finite("scale", scale)?;

        if scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(scale));
        }

        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            centre_x,
            centre_y,
            scale,
            max_iterations,
        })
    }

    #[must_use]
    pub fn centre_x(&self) -> f64 {
        self.centre_x
    }

    #[must_use]
    pub fn centre_y(&self) -> f64 {
        self.centre_y
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Moves the centre by a normalised offset in `[-1, 1]` on each axis.
    ///
    /// The step is `offset * scale * 2`, expressed in units of `scale` rather
    /// than the exact pixel-to-plane factor, so a click re-centres the view
    /// only approximately. Positive `dy` moves the view down the screen.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<(), ConfigError> {
        if !(-1.0..=1.0).contains(&dx) || !(-1.0..=1.0).contains(&dy) {
            return Err(ConfigError::PanOutOfRange { dx, dy });
        }

        let centre_x = require_finite("centre_x", self.centre_x + dx * self.scale * 2.0)?;
        let centre_y = require_finite("centre_y", self.centre_y + dy * self.scale * 2.0)?;

        self.centre_x = centre_x;
        self.centre_y = centre_y;
        Ok(())
    }

    pub fn zoom_in(&mut self) -> Result<(), ConfigError> {
        let scale = self.scale / 2.0;

        if scale <= 0.0 {
            return Err(ConfigError::ScaleUnderflow { scale: self.scale });
        }

        self.scale = scale;
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), ConfigError> {
        let scale = self.scale * 2.0;

        if !scale.is_finite() {
            return Err(ConfigError::ScaleOverflow { scale: self.scale });
        }

        self.scale = scale;
        Ok(())
    }

    /// Returns to the whole-set view. The iteration cap is kept.
    pub fn reset(&mut self) {
        self.centre_x = 0.0;
        self.centre_y = 0.0;
        self.scale = 1.0;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }
}
