//! Accelerated grid renderer on wgpu compute shaders.

mod colour_texture;
mod device;
mod error;
mod pipeline;
mod renderer;
mod uniforms;

pub use colour_texture::ColourTexture;
pub use device::{GpuAvailability, GpuContext};
pub use error::GpuError;
pub use pipeline::GpuPipeline;
pub use renderer::GpuGridRenderer;
pub use uniforms::Uniforms;
