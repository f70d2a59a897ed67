pub mod adapters;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::interactive::{
    DisplayPort, Frame, InteractiveSession, RenderScheduler, RenderStage, RenderState,
    ZoomDirection,
};
pub use crate::core::actions::render_image::ports::accelerator::{
    Accelerator, AcceleratorError, KernelJob, MANDELBROT_KERNEL,
};
pub use crate::core::actions::render_image::render_image::StageRenderer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::palette::{Palette, PaletteStyle};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::ConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{EngineConfig, Location};
pub use crate::core::fractals::mandelbrot::palettes::PaletteKind;
pub use crate::presenters::file::ppm::PpmFilePresenter;
