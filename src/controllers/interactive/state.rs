use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of the request the worker is currently handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RenderState {
    Idle = 0,
    PreviewRendering = 1,
    PreviewReady = 2,
    FinalRendering = 3,
    Done = 4,
    Cancelled = 5,
}

impl RenderState {
    #[must_use]
    pub fn is_rendering(self) -> bool {
        matches!(self, Self::PreviewRendering | Self::FinalRendering)
    }

    /// Whether the worker may move from `self` to `next`.
    ///
    /// A new job starts from `Idle` or `Done`, skipping the preview when the
    /// target is too small for one. `Cancelled` is only reached from a
    /// rendering state and always falls back to `Idle`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle | Self::Done, Self::PreviewRendering | Self::FinalRendering)
                | (Self::PreviewRendering, Self::PreviewReady)
                | (Self::PreviewReady, Self::FinalRendering)
                | (Self::FinalRendering, Self::Done)
                | (Self::PreviewRendering | Self::FinalRendering, Self::Cancelled)
                | (Self::Cancelled, Self::Idle)
        )
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::PreviewRendering,
            2 => Self::PreviewReady,
            3 => Self::FinalRendering,
            4 => Self::Done,
            5 => Self::Cancelled,
            _ => Self::Idle,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AtomicRenderState(AtomicU8);

impl AtomicRenderState {
    pub(crate) fn new(state: RenderState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    pub(crate) fn load(&self) -> RenderState {
        RenderState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Stores `next` and returns the previous state.
    pub(crate) fn swap(&self, next: RenderState) -> RenderState {
        RenderState::from_u8(self.0.swap(next as u8, Ordering::AcqRel))
    }
}
