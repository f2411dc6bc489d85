pub mod events;
pub mod ports;
pub mod scheduler;

pub use events::{Frame, RenderEvent, RenderFailure};
pub use ports::frame_sink::FrameSink;
pub use scheduler::RenderScheduler;
