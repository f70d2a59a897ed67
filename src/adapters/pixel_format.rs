//! Pixel format conversion at the accelerator boundary.

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Panics
/// Panics if `src` is not a multiple of 3 or `dst` does not hold exactly as
/// many RGBA pixels as `src` holds RGB pixels.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / BYTES_PER_PIXEL) * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

/// Copies RGBA pixel data to RGB format, dropping alpha.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or `dst` does not hold exactly as
/// many RGB pixels as `src` holds RGBA pixels.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % RGBA_BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / RGBA_BYTES_PER_PIXEL) * BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src
        .chunks_exact(RGBA_BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; (src.len() / 3) * 4];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_rgba_to_rgb_drops_alpha() {
        let src = vec![10, 20, 30, 0, 40, 50, 60, 128];
        let mut dst = vec![0; 6];

        copy_rgba_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_rgba_to_rgb_rejects_mismatched_lengths() {
        let src = vec![1, 2, 3, 4];
        let mut dst = vec![0; 6];

        copy_rgba_to_rgb(&src, &mut dst);
    }
}
