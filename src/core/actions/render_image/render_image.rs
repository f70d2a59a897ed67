use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::adapters::pixel_format::{RGBA_BYTES_PER_PIXEL, copy_rgb_to_rgba, copy_rgba_to_rgb};
use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::{
    generate_fractal::generate_fractal,
    generate_fractal_parallel_rayon::generate_fractal_parallel_rayon,
};
use crate::core::actions::render_image::ports::accelerator::{
    Accelerator, AcceleratorError, KernelJob, MANDELBROT_KERNEL,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::mandelbrot_config::EngineConfig;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "accelerator panicked".to_string()
    }
}

fn build_pool(threads: Option<NonZeroUsize>) -> Option<ThreadPool> {
    let threads = threads?;

    match ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .thread_name(|index| format!("mandelbrot-render-{index}"))
        .build()
    {
        Ok(pool) => Some(pool),
        Err(err) => {
            log::warn!(
                "Could not build a {threads}-thread render pool, using the global pool: {err}"
            );
            None
        }
    }
}

/// Renders one stage of a request into a complete buffer.
///
/// Tries the accelerator first when one is installed, and falls back to the
/// CPU grid on any accelerator error or panic. An `Unavailable` error disables
/// the accelerator for the rest of the renderer's life.
pub struct StageRenderer {
    config: EngineConfig,
    pool: Option<ThreadPool>,
    accelerator: Option<Arc<dyn Accelerator>>,
    accelerator_enabled: AtomicBool,
}

impl StageRenderer {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            pool: build_pool(config.worker_threads),
            config,
            accelerator: None,
            accelerator_enabled: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_accelerator(config: EngineConfig, accelerator: Arc<dyn Accelerator>) -> Self {
        Self {
            pool: build_pool(config.worker_threads),
            config,
            accelerator: Some(accelerator),
            accelerator_enabled: AtomicBool::new(true),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn accelerator_enabled(&self) -> bool {
        self.accelerator_enabled.load(Ordering::Relaxed)
    }

    /// Renders `request` at its own resolution.
    ///
    /// Returns `Cancelled` if `cancel` fires before the buffer is complete;
    /// the partial buffer is dropped.
    pub fn render<C>(&self, request: &RenderRequest, cancel: &C) -> Result<PixelBuffer, Cancelled>
    where
        C: CancelToken + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        if let Some(buffer) = self.render_accelerated(request) {
            // the device call runs to completion, so supersession is only seen here
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }
            return Ok(buffer);
        }

        self.render_cpu(request, cancel)
    }

    fn render_cpu<C>(&self, request: &RenderRequest, cancel: &C) -> Result<PixelBuffer, Cancelled>
    where
        C: CancelToken + ?Sized,
    {
        let algorithm = MandelbrotAlgorithm::new(request, self.config.interior_colour);

        if !self.config.parallel {
            return generate_fractal(&algorithm, cancel);
        }

        match &self.pool {
            Some(pool) => pool.install(|| generate_fractal_parallel_rayon(&algorithm, cancel)),
            None => generate_fractal_parallel_rayon(&algorithm, cancel),
        }
    }

    fn render_accelerated(&self, request: &RenderRequest) -> Option<PixelBuffer> {
        let accelerator = self.accelerator.as_ref()?;

        if !self.accelerator_enabled() {
            return None;
        }

        match self.run_kernel(accelerator.as_ref(), request) {
            Ok(buffer) => Some(buffer),
            Err(AcceleratorError::Unavailable) => {
                self.accelerator_enabled.store(false, Ordering::Relaxed);
                log::warn!("Accelerator unavailable, rendering on the CPU from now on");
                None
            }
            Err(err) => {
                log::warn!("Accelerator failed, rendering this stage on the CPU: {err}");
                None
            }
        }
    }

    fn run_kernel(
        &self,
        accelerator: &dyn Accelerator,
        request: &RenderRequest,
    ) -> Result<PixelBuffer, AcceleratorError> {
        let resolution = request.resolution;
        let expected = resolution.pixel_count() * RGBA_BYTES_PER_PIXEL;

        let mut canvas = vec![0; expected];
        copy_rgb_to_rgba(&PixelBuffer::blank_data(resolution), &mut canvas);

        let job = KernelJob {
            viewport: request.viewport,
            resolution,
            palette: request.palette.clone(),
            interior_colour: self.config.interior_colour,
        };

        let rgba = panic::catch_unwind(AssertUnwindSafe(|| {
            accelerator.run(MANDELBROT_KERNEL, &job, canvas)
        }))
        .map_err(|payload| AcceleratorError::Runtime(panic_message(payload.as_ref())))??;

        if rgba.len() != expected {
            return Err(AcceleratorError::DimensionMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        PixelBuffer::try_fill(resolution, |rgb| {
            copy_rgba_to_rgb(&rgba, rgb);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;
    use crate::core::data::palette::{Palette, PaletteStyle};
    use crate::core::data::point::Point;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest::new(
            Viewport::new(-0.5, 0.0, 1.0, 100).unwrap(),
            Resolution::new(width, height).unwrap(),
            Arc::new(
                Palette::new(
                    vec![Colour::rgb(0, 0, 139), Colour::rgb(255, 255, 0)],
                    PaletteStyle::Continuous,
                )
                .unwrap(),
            ),
        )
    }

    enum Behaviour {
        Fill(Colour),
        Fail(AcceleratorError),
        Truncate,
        Panic,
    }

    struct StubAccelerator {
        behaviour: Behaviour,
        calls: AtomicUsize,
        kernels: Mutex<Vec<String>>,
    }

    impl StubAccelerator {
        fn new(behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                behaviour,
                calls: AtomicUsize::new(0),
                kernels: Mutex::new(Vec::new()),
            })
        }
    }

    impl Accelerator for StubAccelerator {
        fn run(
            &self,
            kernel: &str,
            _job: &KernelJob,
            mut rgba: Vec<u8>,
        ) -> Result<Vec<u8>, AcceleratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.kernels.lock().unwrap().push(kernel.to_string());

            match &self.behaviour {
                Behaviour::Fill(colour) => {
                    for pixel in rgba.chunks_exact_mut(4) {
                        pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
                    }
                    Ok(rgba)
                }
                Behaviour::Fail(err) => Err(err.clone()),
                Behaviour::Truncate => {
                    rgba.pop();
                    Ok(rgba)
                }
                Behaviour::Panic => panic!("device driver crashed"),
            }
        }
    }

    fn cpu_render(request: &RenderRequest) -> PixelBuffer {
        StageRenderer::new(EngineConfig::default())
            .render(request, &NeverCancel)
            .unwrap()
    }

    #[test]
    fn serial_and_parallel_renders_are_identical() {
        let request = request(37, 23);
        let serial = StageRenderer::new(EngineConfig {
            parallel: false,
            ..EngineConfig::default()
        });

        assert_eq!(serial.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
    }

    #[test]
    fn dedicated_pool_matches_global_pool() {
        let request = request(40, 30);
        let pooled = StageRenderer::new(EngineConfig {
            worker_threads: NonZeroUsize::new(2),
            ..EngineConfig::default()
        });

        assert_eq!(pooled.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
    }

    #[test]
    fn cancelled_before_start_renders_nothing() {
        let renderer = StageRenderer::new(EngineConfig::default());

        assert_eq!(renderer.render(&request(8, 8), &|| true), Err(Cancelled));
    }

    #[test]
    fn accelerator_output_is_used_when_it_succeeds() {
        let colour = Colour::rgb(9, 8, 7);
        let accelerator = StubAccelerator::new(Behaviour::Fill(colour));
        let renderer =
            StageRenderer::with_accelerator(EngineConfig::default(), accelerator.clone());

        let buffer = renderer.render(&request(5, 4), &NeverCancel).unwrap();

        assert_eq!(buffer.pixel(Point { x: 4, y: 3 }), Some(colour));
        assert_eq!(*accelerator.kernels.lock().unwrap(), vec!["Mandelbrot".to_string()]);
    }

    #[test]
    fn accelerator_result_is_dropped_when_superseded_during_the_call() {
        let accelerator = StubAccelerator::new(Behaviour::Fill(Colour::WHITE));
        let renderer =
            StageRenderer::with_accelerator(EngineConfig::default(), accelerator.clone());
        let polls = AtomicUsize::new(0);
        let superseded_after_first_poll = || polls.fetch_add(1, Ordering::SeqCst) >= 1;

        let result = renderer.render(&request(5, 4), &superseded_after_first_poll);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(accelerator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn runtime_failure_falls_back_to_cpu_and_retries_next_time() {
        let accelerator = StubAccelerator::new(Behaviour::Fail(AcceleratorError::Runtime(
            "lost device".into(),
        )));
        let renderer =
            StageRenderer::with_accelerator(EngineConfig::default(), accelerator.clone());
        let request = request(12, 9);

        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(accelerator.calls.load(Ordering::SeqCst), 2);
        assert!(renderer.accelerator_enabled());
    }

    #[test]
    fn unavailable_accelerator_is_disabled_for_the_session() {
        let accelerator = StubAccelerator::new(Behaviour::Fail(AcceleratorError::Unavailable));
        let renderer =
            StageRenderer::with_accelerator(EngineConfig::default(), accelerator.clone());
        let request = request(12, 9);

        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(accelerator.calls.load(Ordering::SeqCst), 1);
        assert!(!renderer.accelerator_enabled());
    }

    #[test]
    fn wrongly_sized_accelerator_output_falls_back_to_cpu() {
        let accelerator = StubAccelerator::new(Behaviour::Truncate);
        let renderer = StageRenderer::with_accelerator(EngineConfig::default(), accelerator);
        let request = request(6, 6);

        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
    }

    #[test]
    fn panicking_accelerator_falls_back_to_cpu() {
        let accelerator = StubAccelerator::new(Behaviour::Panic);
        let renderer =
            StageRenderer::with_accelerator(EngineConfig::default(), accelerator.clone());
        let request = request(7, 5);

        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(renderer.render(&request, &NeverCancel).unwrap(), cpu_render(&request));
        assert_eq!(accelerator.calls.load(Ordering::SeqCst), 2);
        assert!(renderer.accelerator_enabled());
    }

    #[test]
    fn panic_payload_becomes_the_error_message() {
        let from_str: Box<dyn Any + Send> = Box::new("kernel crashed");
        let from_string: Box<dyn Any + Send> = Box::new(String::from("out of memory"));
        let opaque: Box<dyn Any + Send> = Box::new(7_u32);

        assert_eq!(panic_message(from_str.as_ref()), "kernel crashed");
        assert_eq!(panic_message(from_string.as_ref()), "out of memory");
        assert_eq!(panic_message(opaque.as_ref()), "accelerator panicked");
    }

    #[test]
    fn renderer_without_accelerator_reports_it_disabled() {
        assert!(!StageRenderer::new(EngineConfig::default()).accelerator_enabled());
    }
}
