use crate::controllers::interactive::data::frame_data::Frame;

/// Receives completed frames from the render worker.
///
/// Called on the worker thread; implementations should hand the frame off
/// rather than block.
pub trait DisplayPort: Send + Sync {
    fn present(&self, frame: Frame);
}
