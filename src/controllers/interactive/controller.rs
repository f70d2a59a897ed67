use crate::controllers::interactive::data::frame_data::{Frame, RenderStage};
use crate::controllers::interactive::ports::display::DisplayPort;
use crate::controllers::interactive::state::{AtomicRenderState, RenderState};
use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_image::ports::accelerator::Accelerator;
use crate::core::actions::render_image::render_image::StageRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::mandelbrot_config::EngineConfig;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resolution of the preview stage, or `None` when the target is too narrow
/// for a preview to pay off.
#[must_use]
pub fn preview_resolution(preview_width: u32, target: Resolution) -> Option<Resolution> {
    if preview_width == 0 || preview_width.saturating_mul(2) >= target.width() {
        return None;
    }

    Some(target.scaled_to_width(preview_width))
}

struct SharedState {
    generation: AtomicU64,
    last_delivered_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    final_delivered: Mutex<u64>,
    final_ready: Condvar,
    shutdown: AtomicBool,
    state: AtomicRenderState,
    renderer: StageRenderer,
    display: Arc<dyn DisplayPort>,
}

/// Runs progressive renders on a dedicated worker thread.
///
/// Every submission bumps a generation counter. The worker only ever picks up
/// the newest request; an in-flight render polls the counter at row
/// boundaries and abandons its buffer once superseded. Frames are delivered
/// only while their generation is still current, so a superseded request can
/// never deliver after its successor.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(display: Arc<dyn DisplayPort>, config: EngineConfig) -> Self {
        Self::start(display, StageRenderer::new(config))
    }

    pub fn with_accelerator(
        display: Arc<dyn DisplayPort>,
        config: EngineConfig,
        accelerator: Arc<dyn Accelerator>,
    ) -> Self {
        Self::start(display, StageRenderer::with_accelerator(config, accelerator))
    }

    fn start(display: Arc<dyn DisplayPort>, renderer: StageRenderer) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_delivered_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            final_delivered: Mutex::new(0),
            final_ready: Condvar::new(),
            shutdown: AtomicBool::new(false),
            state: AtomicRenderState::new(RenderState::Idle),
            renderer,
            display,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, superseding anything queued or rendering, and
    /// returns its generation. Never waits for the worker.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        log::debug!(
            "Submitted generation {generation} at {}x{}",
            request.resolution.width(),
            request.resolution.height()
        );

        {
            let mut guard = lock(&self.shared.latest_request);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.shared.state.load()
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_delivered_generation(&self) -> u64 {
        self.shared.last_delivered_generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.shared.renderer.config()
    }

    /// Blocks until a final frame for `generation` or a later one has been
    /// delivered. Returns `false` on timeout.
    pub fn wait_for_final(&self, generation: u64, timeout: Duration) -> bool {
        let guard = lock(&self.shared.final_delivered);
        let (guard, _) = self
            .shared
            .final_ready
            .wait_timeout_while(guard, timeout, |delivered| *delivered < generation)
            .unwrap_or_else(PoisonError::into_inner);

        *guard >= generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = lock(&shared.latest_request);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            if Self::run_job(shared, job_generation, &request, &cancel_token).is_err() {
                log::debug!("Generation {job_generation} cancelled");
                Self::transition(shared, RenderState::Cancelled);
                Self::transition(shared, RenderState::Idle);
            }
        }
    }

    fn run_job<C: CancelToken>(
        shared: &SharedState,
        job_generation: u64,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let preview_width = shared.renderer.config().preview_width;

        if let Some(resolution) = preview_resolution(preview_width, request.resolution) {
            Self::transition(shared, RenderState::PreviewRendering);
            Self::render_stage(
                shared,
                job_generation,
                RenderStage::Preview,
                &request.at_resolution(resolution),
                cancel,
            )?;
            Self::transition(shared, RenderState::PreviewReady);
        }

        Self::transition(shared, RenderState::FinalRendering);
        Self::render_stage(shared, job_generation, RenderStage::Final, request, cancel)?;
        Self::transition(shared, RenderState::Done);

        Ok(())
    }

    fn render_stage<C: CancelToken>(
        shared: &SharedState,
        job_generation: u64,
        stage: RenderStage,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let start = Instant::now();
        let pixel_buffer = shared.renderer.render(request, cancel)?;
        let render_duration = start.elapsed();

        Self::deliver(shared, job_generation, stage, pixel_buffer, render_duration)
    }

    fn deliver(
        shared: &SharedState,
        job_generation: u64,
        stage: RenderStage,
        pixel_buffer: PixelBuffer,
        render_duration: Duration,
    ) -> Result<(), Cancelled> {
        let current_generation = shared.generation.load(Ordering::Acquire);

        if job_generation != current_generation || shared.shutdown.load(Ordering::Acquire) {
            return Err(Cancelled);
        }

        let resolution = pixel_buffer.resolution();
        log::info!(
            "Rendered {stage} frame for generation {job_generation} at {}x{} in {:.1?}",
            resolution.width(),
            resolution.height(),
            render_duration
        );

        shared.display.present(Frame {
            generation: job_generation,
            stage,
            pixel_buffer,
            render_duration,
        });

        shared
            .last_delivered_generation
            .store(job_generation, Ordering::Release);

        if stage == RenderStage::Final {
            *lock(&shared.final_delivered) = job_generation;
            shared.final_ready.notify_all();
        }

        Ok(())
    }

    fn transition(shared: &SharedState, next: RenderState) {
        let previous = shared.state.swap(next);
        debug_assert!(
            previous.can_transition_to(next),
            "invalid render state transition {previous:?} -> {next:?}"
        );
        log::debug!("Render state {previous:?} -> {next:?}");
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
