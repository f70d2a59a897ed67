use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::smooth_colouring::SmoothColouriser;
use crate::core::util::pixel_to_complex_coords::{PLANE_HALF_EXTENT, ViewportMapper};

pub const ESCAPE_RADIUS_SQUARED: f64 = PLANE_HALF_EXTENT * PLANE_HALF_EXTENT;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    /// `false` when the orbit used up the whole iteration budget, including
    /// an orbit that only leaves the radius-2 disk on the last allowed step;
    /// such points are treated as members of the set.
    pub escaped: bool,
    pub z: Complex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeIterator {
    max_iterations: u32,
}

impl EscapeIterator {
    /// `max_iterations` comes from a validated `Viewport` and is never zero.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterates `z <- z² + c` from zero until `|z|² >= 4` or the budget runs out.
    ///
    /// Reaching the budget counts as bounded even if the last step left the disk.
    #[inline]
    #[must_use]
    pub fn iterate(&self, c: Complex) -> EscapeResult {
        let mut z = Complex::ZERO;

        for iteration in 1..=self.max_iterations {
            z = z.square_add(c);

            if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
                return EscapeResult {
                    iterations: iteration,
                    escaped: iteration < self.max_iterations,
                    z,
                };
            }
        }

        EscapeResult {
            iterations: self.max_iterations,
            escaped: false,
            z,
        }
    }
}

/// Colour of a single pixel for one render request.
#[derive(Debug, Clone)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    mapper: ViewportMapper,
    escape: EscapeIterator,
    colouriser: SmoothColouriser,
    interior_colour: Colour,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn compute(&self, pixel: Point) -> Colour {
        let c = self.mapper.map(pixel);
        let result = self.escape.iterate(c);

        if result.escaped {
            self.colouriser.colour(&result, c)
        } else {
            self.interior_colour
        }
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(request: &RenderRequest, interior_colour: Colour) -> Self {
        let max_iterations = request.viewport.max_iterations();

        Self {
            resolution: request.resolution,
            mapper: ViewportMapper::new(&request.viewport, request.resolution),
            escape: EscapeIterator::new(max_iterations),
            colouriser: SmoothColouriser::new(request.palette.clone(), max_iterations),
            interior_colour,
        }
    }
}
