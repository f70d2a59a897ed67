use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal::render_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Generates the grid in parallel using rayon's work-stealing scheduler.
///
/// Each task owns one row of the preallocated output, so workers never share
/// a mutable slot and no lock is held while iterating. Cancellation is checked
/// at the start of each row and periodically within rows; once one row
/// observes it, rayon stops handing out further rows and the partial buffer is
/// dropped.
///
/// Runs on the rayon pool the caller is currently installed in.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    C: CancelToken + ?Sized,
{
    let resolution = algorithm.resolution();
    let row_bytes = resolution.width() as usize * BYTES_PER_PIXEL;

    PixelBuffer::try_fill(resolution, |data| {
        data.par_chunks_mut(row_bytes)
            .enumerate()
            .try_for_each(|(y, row)| render_row(algorithm, y as u32, row, cancel))
    })
}
