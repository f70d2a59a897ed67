use std::sync::Arc;

use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Name of the kernel that replaces the CPU pixel loop.
pub const MANDELBROT_KERNEL: &str = "Mandelbrot";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceleratorError {
    #[error("no accelerator device is available")]
    Unavailable,

    #[error("kernel failed to build: {0}")]
    Kernel(String),

    #[error("kernel failed while running: {0}")]
    Runtime(String),

    #[error("accelerator returned {actual} bytes, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Everything a kernel needs to colour one stage, snapshotted from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelJob {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub palette: Arc<Palette>,
    pub interior_colour: Colour,
}

/// An external device that can run a named kernel over an RGBA canvas.
///
/// The call is all-or-nothing: either a canvas of the same dimensions comes
/// back or an error does. Any error makes the caller render on the CPU. A
/// panic inside `run` is caught and handled like [`AcceleratorError::Runtime`].
pub trait Accelerator: Send + Sync {
    fn run(
        &self,
        kernel: &str,
        job: &KernelJob,
        rgba: Vec<u8>,
    ) -> Result<Vec<u8>, AcceleratorError>;
}
