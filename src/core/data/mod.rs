pub mod colour;
pub mod complex;
pub mod palette;
pub mod pixel_buffer;
pub mod point;
pub mod render_request;
pub mod resolution;
pub mod viewport;
