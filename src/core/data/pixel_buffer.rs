use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("resolution needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// A complete RGB image, row-major, top row first.
///
/// Only finished renders are wrapped in a `PixelBuffer`; the bytes are
/// immutable once constructed and ownership moves to the display side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = resolution_to_buffer_size(resolution);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    /// A zeroed buffer sized for `resolution`, for filling in place.
    #[must_use]
    pub fn blank_data(resolution: Resolution) -> PixelBufferData {
        vec![0; resolution_to_buffer_size(resolution)]
    }

    /// Allocates a blank buffer, lets `fill` write every byte in place and
    /// wraps the result. Nothing is returned if `fill` fails.
    pub fn try_fill<E, F>(resolution: Resolution, fill: F) -> Result<Self, E>
    where
        F: FnOnce(&mut [u8]) -> Result<(), E>,
    {
        let mut buffer = Self::blank_data(resolution);
        fill(&mut buffer)?;

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if point.x >= self.resolution.width() || point.y >= self.resolution.height() {
            return None;
        }

        let index = (point.y as usize * self.resolution.width() as usize + point.x as usize)
            * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_blank_data_has_three_bytes_per_pixel() {
        assert_eq!(PixelBuffer::blank_data(resolution(10, 10)).len(), 300);
        assert_eq!(PixelBuffer::blank_data(resolution(100, 50)).len(), 15000);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.resolution(), resolution(2, 2));
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.buffer_size(), 12);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 24
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];
        let buffer = PixelBuffer::from_data(resolution(3, 2), data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::rgb(1, 1, 1)));
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), Some(Colour::rgb(3, 3, 3)));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour::rgb(4, 4, 4)));
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some(Colour::rgb(6, 6, 6)));
    }

    #[test]
    fn test_try_fill_wraps_filled_bytes() {
        let buffer = PixelBuffer::try_fill(resolution(2, 1), |data| {
            data.copy_from_slice(&[1, 2, 3, 4, 5, 6]);
            Ok::<_, ()>(())
        })
        .unwrap();

        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour::rgb(4, 5, 6)));
    }

    #[test]
    fn test_try_fill_discards_on_failure() {
        let result = PixelBuffer::try_fill(resolution(2, 2), |_| Err("stopped"));

        assert_eq!(result, Err("stopped"));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::from_data(resolution(2, 2), vec![0; 12]).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 2 }), None);
    }
}
