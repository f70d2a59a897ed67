use std::sync::Arc;

use crate::core::data::palette::Palette;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// A snapshot of everything one render job needs.
///
/// The viewport is copied and the palette shared read-only, so later
/// navigation never reaches a render that is already running.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub palette: Arc<Palette>,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution, palette: Arc<Palette>) -> Self {
        Self {
            viewport,
            resolution,
            palette,
        }
    }

    /// The same request rendered at another resolution.
    #[must_use]
    pub fn at_resolution(&self, resolution: Resolution) -> Self {
        Self {
            resolution,
            ..self.clone()
        }
    }
}
