use crate::controllers::render_scheduler::events::RenderEvent;

/// Receives finished renders. Called from the scheduler's worker thread.
pub trait FrameSink: Send + Sync {
    fn submit(&self, event: RenderEvent);
}
