pub mod algorithm;
pub mod mandelbrot_config;
pub mod palettes;
pub mod smooth_colouring;
