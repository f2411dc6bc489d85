use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::view_kind::ViewKind;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    pub view: ViewKind,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub generation: u64,
    pub view: ViewKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Frame(Frame),
    Error(RenderFailure),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(failure) => failure.generation,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewKind {
        match self {
            Self::Frame(frame) => frame.view,
            Self::Error(failure) => failure.view,
        }
    }
}
