use std::fmt;
use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStage {
    Preview,
    Final,
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preview => f.write_str("preview"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// A finished stage handed to the display, tagged with the request it satisfies.
#[derive(Debug)]
pub struct Frame {
    pub generation: u64,
    pub stage: RenderStage,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl Frame {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.pixel_buffer.resolution()
    }
}
