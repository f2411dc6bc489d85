use crate::controllers::render_scheduler::events::{Frame, RenderEvent, RenderFailure};
use crate::controllers::render_scheduler::ports::frame_sink::FrameSink;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::view_kind::ViewKind;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

#[derive(Default)]
struct Queue {
    pending: HashMap<ViewKind, (u64, RenderRequest)>,
    latest: HashMap<ViewKind, u64>,
    shutdown: bool,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    queue: Mutex<Queue>,
    wake: Condvar,
    sink: Arc<dyn FrameSink>,
}

impl SharedState {
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders on a worker thread, coalescing requests per view.
///
/// Each view has at most one pending request; submitting replaces it. A
/// render in flight always runs to completion, but its result is dropped
/// if a newer request for the same view arrived meanwhile. The two views
/// never displace each other.
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(renderer: Box<dyn GridRenderer>, sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            queue: Mutex::new(Queue::default()),
            wake: Condvar::new(),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, renderer);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request for the same view that has
    /// not started. Returns the request's generation.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let view = request.view;

        {
            let mut queue = self.shared.lock();
            queue.latest.insert(view, generation);
            queue.pending.insert(view, (generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.lock().shutdown = true;
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if let Err(panic) = handle.join() {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());

                log::error!("render worker panicked: {}", message);
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, mut renderer: Box<dyn GridRenderer>) {
        loop {
            let (generation, request) = {
                let mut queue = shared.lock();
                loop {
                    if queue.shutdown {
                        return;
                    }

                    let next = ViewKind::ALL
                        .iter()
                        .find_map(|view| queue.pending.remove(view));

                    if let Some(job) = next {
                        break job;
                    }

                    queue = shared.wake.wait(queue).unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let result = renderer.render(&request);
            let render_duration = start.elapsed();

            if shared.lock().latest.get(&request.view) != Some(&generation) {
                log::debug!("dropping stale {} frame {}", request.view, generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(Frame {
                    generation,
                    view: request.view,
                    pixel_buffer,
                    render_duration,
                }),
                Err(err) => {
                    log::warn!("{} render {} failed: {}", request.view, generation, err);
                    RenderEvent::Error(RenderFailure {
                        generation,
                        view: request.view,
                        message: err.to_string(),
                    })
                }
            };

            shared.sink.submit(event);
            shared
                .last_completed_generation
                .fetch_max(generation, Ordering::AcqRel);
        }
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_grid::cpu_grid_renderer::CpuGridRenderer;
    use crate::core::actions::render_grid::errors::RenderError;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::colour_mapping::lookup_table::ColourLookupTable;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::formula::FormulaId;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[derive(Default)]
    struct MockFrameSink {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockFrameSink {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl FrameSink for MockFrameSink {
        fn submit(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockFrameSink, count: usize) -> Vec<RenderEvent> {
        let start = Instant::now();
        let mut events = Vec::new();
        while events.len() < count && start.elapsed() < TIMEOUT {
            events.extend(sink.take_events());
            thread::sleep(Duration::from_millis(10));
        }
        events
    }

    /// Reports each render's cap, then blocks until released.
    struct GatedRenderer {
        started: Sender<u32>,
        release: Receiver<()>,
    }

    impl GridRenderer for GatedRenderer {
        fn backend_name(&self) -> &'static str {
            "gated"
        }

        fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
            let _ = self.started.send(request.max_iterations);
            let _ = self.release.recv_timeout(TIMEOUT);
            CpuGridRenderer.render(request)
        }
    }

    fn request(view: ViewKind, max_iterations: u32) -> RenderRequest {
        RenderRequest {
            resolution: Resolution::new(4).unwrap(),
            domain: ComplexRect::default(),
            formula: FormulaId::Standard,
            view,
            fixed: Complex::ORIGIN,
            max_iterations,
            colour_table: Arc::new(ColourLookupTable::build(ColourMapKind::Aqua, 10).unwrap()),
        }
    }

    fn scheduler_with_sink(renderer: Box<dyn GridRenderer>) -> (RenderScheduler, Arc<MockFrameSink>) {
        let sink = Arc::new(MockFrameSink::default());
        let scheduler = RenderScheduler::new(renderer, Arc::clone(&sink) as Arc<dyn FrameSink>);
        (scheduler, sink)
    }

    #[test]
    fn test_submit_emits_frame() {
        let (mut scheduler, sink) = scheduler_with_sink(Box::new(CpuGridRenderer));

        let generation = scheduler.submit(request(ViewKind::Julia, 10));
        let events = wait_for_events(&sink, 1);

        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.view, ViewKind::Julia);
                assert_eq!(frame.pixel_buffer.buffer_size(), 4 * 4 * 4);
            }
            RenderEvent::Error(failure) => panic!("unexpected render error: {}", failure.message),
        }
        assert_eq!(scheduler.last_completed_generation(), generation);

        scheduler.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (mut scheduler, _sink) = scheduler_with_sink(Box::new(CpuGridRenderer));

        assert_eq!(scheduler.last_completed_generation(), 0);

        scheduler.shutdown();
    }

    #[test]
    fn test_latest_request_wins_and_skipped_requests_never_render() {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let renderer = GatedRenderer {
            started: started_tx,
            release: release_rx,
        };
        let (mut scheduler, sink) = scheduler_with_sink(Box::new(renderer));

        scheduler.submit(request(ViewKind::Mandelbrot, 1));
        assert_eq!(started_rx.recv_timeout(TIMEOUT), Ok(1));

        scheduler.submit(request(ViewKind::Mandelbrot, 2));
        let newest = scheduler.submit(request(ViewKind::Mandelbrot, 3));
        release_tx.send(()).unwrap();

        // The request for cap 2 was replaced before it started.
        assert_eq!(started_rx.recv_timeout(TIMEOUT), Ok(3));
        release_tx.send(()).unwrap();

        let events = wait_for_events(&sink, 1);
        thread::sleep(Duration::from_millis(50));
        let late_events = sink.take_events();

        assert_eq!(events.len(), 1);
        assert!(late_events.is_empty());
        assert_eq!(events[0].generation(), newest);

        scheduler.shutdown();
    }

    #[test]
    fn test_views_do_not_displace_each_other() {
        let (mut scheduler, sink) = scheduler_with_sink(Box::new(CpuGridRenderer));

        let mandelbrot = scheduler.submit(request(ViewKind::Mandelbrot, 10));
        let julia = scheduler.submit(request(ViewKind::Julia, 10));
        let mut events = wait_for_events(&sink, 2);
        events.sort_by_key(RenderEvent::generation);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].generation(), mandelbrot);
        assert_eq!(events[0].view(), ViewKind::Mandelbrot);
        assert_eq!(events[1].generation(), julia);
        assert_eq!(events[1].view(), ViewKind::Julia);

        scheduler.shutdown();
    }

    #[test]
    fn test_render_error_is_reported() {
        struct FailingRenderer;

        impl GridRenderer for FailingRenderer {
            fn backend_name(&self) -> &'static str {
                "failing"
            }

            fn render(&mut self, _: &RenderRequest) -> Result<PixelBuffer, RenderError> {
                Err(RenderError::Accelerated("device lost".into()))
            }
        }

        let (mut scheduler, sink) = scheduler_with_sink(Box::new(FailingRenderer));

        let generation = scheduler.submit(request(ViewKind::Julia, 10));
        let events = wait_for_events(&sink, 1);

        assert_eq!(
            events,
            vec![RenderEvent::Error(RenderFailure {
                generation,
                view: ViewKind::Julia,
                message: "accelerated backend error: device lost".to_string(),
            })]
        );

        scheduler.shutdown();
    }

    #[test]
    fn test_shutdown_after_renderer_panic_returns() {
        struct PanickingRenderer;

        impl GridRenderer for PanickingRenderer {
            fn backend_name(&self) -> &'static str {
                "panicking"
            }

            fn render(&mut self, _: &RenderRequest) -> Result<PixelBuffer, RenderError> {
                panic!("renderer exploded");
            }
        }

        let (mut scheduler, sink) = scheduler_with_sink(Box::new(PanickingRenderer));

        scheduler.submit(request(ViewKind::Mandelbrot, 10));
        thread::sleep(Duration::from_millis(100));
        scheduler.shutdown();

        assert!(sink.take_events().is_empty());
        assert_eq!(scheduler.last_completed_generation(), 0);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (mut scheduler, _sink) = scheduler_with_sink(Box::new(CpuGridRenderer));

        scheduler.shutdown();
        scheduler.shutdown();
    }
}
