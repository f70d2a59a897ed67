use std::sync::Arc;

use crate::controllers::interactive::controller::RenderScheduler;
use crate::core::data::palette::Palette;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{DEFAULT_MAX_ITERATIONS, Viewport};
use crate::core::errors::ConfigError;
use crate::core::fractals::mandelbrot::mandelbrot_config::Location;
use crate::core::fractals::mandelbrot::palettes::PaletteKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Primary click: halve the scale.
    In,
    /// Secondary click: double the scale.
    Out,
}

/// Owns the navigable view and turns every successful navigation into a new
/// render request.
///
/// Each operation validates against a copy of the current state; on error
/// nothing changes and nothing is submitted. On success the new snapshot is
/// submitted, superseding any render in flight, and its generation returned.
pub struct InteractiveSession {
    viewport: Viewport,
    palette: Arc<Palette>,
    resolution: Resolution,
    scheduler: RenderScheduler,
}

impl InteractiveSession {
    /// Starts at the whole-set view with the default palette. Nothing is
    /// rendered until [`Self::render`] or a navigation call.
    #[must_use]
    pub fn new(scheduler: RenderScheduler, resolution: Resolution) -> Self {
        Self {
            viewport: Viewport::default(),
            palette: Arc::new(PaletteKind::default().palette()),
            resolution,
            scheduler,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn request(&self) -> RenderRequest {
        RenderRequest::new(self.viewport, self.resolution, Arc::clone(&self.palette))
    }

    /// Submits the current state as is.
    pub fn render(&self) -> u64 {
        self.scheduler.submit(self.request())
    }

    fn navigate<F>(&mut self, change: F) -> Result<u64, ConfigError>
    where
        F: FnOnce(&mut Viewport) -> Result<(), ConfigError>,
    {
        let mut viewport = self.viewport;
        change(&mut viewport)?;

        self.viewport = viewport;
        Ok(self.render())
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<u64, ConfigError> {
        self.navigate(|viewport| viewport.pan_by(dx, dy))
    }

    pub fn zoom_in(&mut self) -> Result<u64, ConfigError> {
        self.navigate(Viewport::zoom_in)
    }

    pub fn zoom_out(&mut self) -> Result<u64, ConfigError> {
        self.navigate(Viewport::zoom_out)
    }

    pub fn reset(&mut self) -> Result<u64, ConfigError> {
        self.navigate(|viewport| {
            viewport.reset();
            Ok(())
        })
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<u64, ConfigError> {
        self.navigate(|viewport| viewport.set_max_iterations(max_iterations))
    }

    /// Replaces centre, scale and iteration cap in one step.
    pub fn set_view(
        &mut self,
        centre_x: f64,
        centre_y: f64,
        scale: f64,
        max_iterations: u32,
    ) -> Result<u64, ConfigError> {
        let viewport = Viewport::new(centre_x, centre_y, scale, max_iterations)?;
        self.navigate(|current| {
            *current = viewport;
            Ok(())
        })
    }

    /// Pans towards the clicked pixel, then zooms. Submits a single request.
    pub fn click(&mut self, point: Point, direction: ZoomDirection) -> Result<u64, ConfigError> {
        let width = f64::from(self.resolution.width());
        let height = f64::from(self.resolution.height());
        let dx = f64::from(point.x) / width * 2.0 - 1.0;
        let dy = f64::from(point.y) / height * 2.0 - 1.0;

        self.navigate(|viewport| {
            viewport.pan_by(dx, dy)?;
            match direction {
                ZoomDirection::In => viewport.zoom_in(),
                ZoomDirection::Out => viewport.zoom_out(),
            }
        })
    }

    /// Jumps to a preset, keeping the current iteration cap.
    pub fn go_to(&mut self, location: Location) -> Result<u64, ConfigError> {
        let viewport = location.viewport(self.viewport.max_iterations())?;
        self.navigate(|current| {
            *current = viewport;
            Ok(())
        })
    }

    /// Jumps to the first nice preset at the default iteration cap.
    pub fn nice(&mut self) -> Result<u64, ConfigError> {
        let viewport = Location::Nice1.viewport(DEFAULT_MAX_ITERATIONS)?;
        self.navigate(|current| {
            *current = viewport;
            Ok(())
        })
    }

    pub fn set_palette(&mut self, kind: PaletteKind) -> u64 {
        self.set_custom_palette(kind.palette())
    }

    /// Swaps in a whole palette; renders already running keep the old one.
    pub fn set_custom_palette(&mut self, palette: Palette) -> u64 {
        self.palette = Arc::new(palette);
        self.render()
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> u64 {
        self.resolution = resolution;
        self.render()
    }
}
