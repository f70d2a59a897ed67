//! Interactive controller for progressive Mandelbrot rendering.
//!
//! # Architecture
//!
//! - **Input**: `InteractiveSession` navigation calls, each producing a
//!   `RenderRequest` snapshot
//! - **Output**: the `DisplayPort` trait, receiving preview and final `Frame`s
//! - **Core**: `StageRenderer` and the generators in `core/actions`

pub mod controller;
pub mod data;
pub mod ports;
pub mod session;
pub mod state;

pub use controller::RenderScheduler;
pub use data::frame_data::{Frame, RenderStage};
pub use ports::display::DisplayPort;
pub use session::{InteractiveSession, ZoomDirection};
pub use state::RenderState;
