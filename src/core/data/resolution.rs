use crate::core::errors::ConfigError;

/// Image dimensions in pixels. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Resolution of a render `width` pixels wide with this aspect ratio.
    #[must_use]
    pub fn scaled_to_width(&self, width: u32) -> Self {
        let width = width.max(1);
        let height = (u64::from(width) * u64::from(self.height) / u64::from(self.width)).max(1);

        Self {
            width,
            height: height.min(u64::from(u32::MAX)) as u32,
        }
    }
}
