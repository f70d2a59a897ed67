use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel colouring for a fixed image size.
///
/// `compute` must depend on nothing but the pixel so that rows can be
/// rendered in any order and on any thread.
pub trait FractalAlgorithm {
    fn compute(&self, pixel: Point) -> Colour;

    fn resolution(&self) -> Resolution;
}
