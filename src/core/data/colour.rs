#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend: `self * (1 - t) + other * t`, rounded.
    ///
    /// `t` is clamped to `[0, 1]`; a NaN `t` yields `self`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) * (1.0 - t) + f64::from(to) * t;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Colour::rgb(10, 20, 30);
        let b = Colour::rgb(110, 220, 130);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        let result = Colour::BLACK.lerp(Colour::rgb(255, 1, 3), 0.5);

        assert_eq!(result, Colour::rgb(128, 1, 2));
    }

    #[test]
    fn test_lerp_clamps_out_of_range_and_nan() {
        let a = Colour::rgb(0, 0, 0);
        let b = Colour::rgb(200, 200, 200);

        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, f64::NAN), a);
    }
}
