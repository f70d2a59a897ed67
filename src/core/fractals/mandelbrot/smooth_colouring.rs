use std::f64::consts::LN_2;
use std::sync::Arc;

use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;

/// Iterations applied past the escape point before the fractional count is
/// estimated. Letting `|z|` grow further keeps the estimate smooth across
/// iteration bands.
pub const EXTRA_ITERATIONS: u32 = 3;

/// Turns an escaped orbit into a colour.
///
/// Discrete palettes index directly by the escape count. Continuous palettes
/// map the fractional escape estimate onto the palette and blend the two
/// neighbouring colours.
#[derive(Debug, Clone)]
pub struct SmoothColouriser {
    palette: Arc<Palette>,
    max_iterations: u32,
}

impl SmoothColouriser {
    #[must_use]
    pub fn new(palette: Arc<Palette>, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fractional escape count `mu = n + 1 - ln(ln|z|²) / ln 2`.
    ///
    /// Falls back to the plain iteration count when the logarithm is not
    /// defined (`|z|² <= 1`) or the orbit overflowed, so the result is
    /// always finite.
    #[must_use]
    pub fn escape_estimate(&self, result: &EscapeResult, c: Complex) -> f64 {
        let mut z = result.z;
        for _ in 0..EXTRA_ITERATIONS {
            z = z.square_add(c);
        }

        let iterations = f64::from(result.iterations) + f64::from(EXTRA_ITERATIONS);
        let magnitude_squared = z.magnitude_squared();

        if !(magnitude_squared > 1.0) || !magnitude_squared.is_finite() {
            return iterations;
        }

        let mu = iterations + 1.0 - magnitude_squared.ln().ln() / LN_2;

        if mu.is_finite() { mu } else { iterations }
    }

    #[inline]
    #[must_use]
    pub fn colour(&self, result: &EscapeResult, c: Complex) -> Colour {
        if !self.palette.is_continuous() {
            return self.palette.wrapped(result.iterations as usize);
        }

        let len = self.palette.len();
        let mu = self.escape_estimate(result, c) / f64::from(self.max_iterations) * len as f64;
        let floor = mu.floor();
        let index = (floor as i64).rem_euclid(len as i64) as usize;
        let next = (index + 1) % len;
        let colours = self.palette.colours();

        colours[index].lerp(colours[next], mu - floor)
    }
}
