use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;

/// Fills one row of RGB bytes, polling `cancel` at the row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. Never stops mid-pixel.
#[inline]
pub(crate) fn render_row<Alg, C>(
    algorithm: &Alg,
    y: u32,
    row: &mut [u8],
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
{
    for (i, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let colour = algorithm.compute(Point { x: i as u32, y });
        slot[0] = colour.r;
        slot[1] = colour.g;
        slot[2] = colour.b;
    }

    Ok(())
}

/// Renders the whole grid on the calling thread, row-major, top to bottom.
pub fn generate_fractal<Alg, C>(algorithm: &Alg, cancel: &C) -> Result<PixelBuffer, Cancelled>
where
    Alg: FractalAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
{
    let resolution = algorithm.resolution();
    let row_bytes = resolution.width() as usize * BYTES_PER_PIXEL;

    PixelBuffer::try_fill(resolution, |data| {
        data.chunks_exact_mut(row_bytes)
            .enumerate()
            .try_for_each(|(y, row)| render_row(algorithm, y as u32, row, cancel))
    })
}
