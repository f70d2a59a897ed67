use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Half-extent of the plane shown at `scale == 1`; also the escape radius.
pub const PLANE_HALF_EXTENT: f64 = 2.0;

/// Maps pixels to points of the complex plane for one viewport and resolution.
///
/// The shorter image side always spans `4 * scale` plane units. Rows grow
/// downwards while the imaginary axis grows upwards, so `y` is inverted and
/// the vertical centre enters with a negative sign: the centre pixel maps to
/// `(centre_x, -centre_y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportMapper {
    unit: f64,
    half_width: f64,
    half_height: f64,
    centre_x: f64,
    centre_y: f64,
}

impl ViewportMapper {
    #[must_use]
    pub fn new(viewport: &Viewport, resolution: Resolution) -> Self {
        let shorter_side = resolution.width().min(resolution.height());

        Self {
            unit: 2.0 * PLANE_HALF_EXTENT / f64::from(shorter_side) * viewport.scale(),
            half_width: f64::from(resolution.width() / 2),
            half_height: f64::from(resolution.height() / 2),
            centre_x: viewport.centre_x(),
            centre_y: viewport.centre_y(),
        }
    }

    /// Plane distance between horizontally or vertically adjacent pixels.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.unit
    }

    #[inline]
    #[must_use]
    pub fn map(&self, pixel: Point) -> Complex {
        Complex {
            real: (f64::from(pixel.x) - self.half_width) * self.unit + self.centre_x,
            imag: (self.half_height - f64::from(pixel.y)) * self.unit - self.centre_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(centre_x: f64, centre_y: f64, scale: f64, width: u32, height: u32) -> ViewportMapper {
        ViewportMapper::new(
            &Viewport::new(centre_x, centre_y, scale, 100).unwrap(),
            Resolution::new(width, height).unwrap(),
        )
    }

    #[test]
    fn test_centre_pixel_maps_to_viewport_centre() {
        for (width, height) in [(4, 4), (800, 600), (701, 333), (1, 1), (2, 9)] {
            let mapper = mapper(-0.75, 0.1, 0.5, width, height);
            let centre = mapper.map(Point {
                x: width / 2,
                y: height / 2,
            });

            assert_eq!(centre, Complex::new(-0.75, -0.1));
        }
    }

    #[test]
    fn test_unit_uses_shorter_side() {
        assert_eq!(mapper(0.0, 0.0, 1.0, 800, 400).unit(), 0.01);
        assert_eq!(mapper(0.0, 0.0, 1.0, 400, 800).unit(), 0.01);
        assert_eq!(mapper(0.0, 0.0, 0.5, 4, 4).unit(), 0.5);
    }

    #[test]
    fn test_axes_step_by_the_same_unit() {
        let mapper = mapper(0.0, 0.0, 1.0, 8, 8);
        let origin = mapper.map(Point { x: 4, y: 4 });
        let right = mapper.map(Point { x: 5, y: 4 });
        let down = mapper.map(Point { x: 4, y: 5 });

        assert_eq!(right.real - origin.real, mapper.unit());
        assert_eq!(origin.imag - down.imag, mapper.unit());
        assert_eq!(right.imag, origin.imag);
        assert_eq!(down.real, origin.real);
    }

    #[test]
    fn test_top_left_of_default_square_view() {
        let mapper = mapper(0.0, 0.0, 1.0, 4, 4);

        // unit = 4 / 4 = 1, so the top-left corner sits at (-2, 2)
        assert_eq!(mapper.map(Point { x: 0, y: 0 }), Complex::new(-2.0, 2.0));
        assert_eq!(mapper.map(Point { x: 3, y: 3 }), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_positive_centre_y_moves_view_down_the_plane() {
        let raised = mapper(0.0, 0.5, 1.0, 4, 4);

        assert_eq!(raised.map(Point { x: 2, y: 2 }).imag, -0.5);
    }
}
