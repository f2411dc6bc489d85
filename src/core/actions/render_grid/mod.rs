pub mod cpu_grid_renderer;
pub mod errors;
pub mod parallel_cpu_grid_renderer;
pub mod ports;

pub use cpu_grid_renderer::CpuGridRenderer;
pub use errors::RenderError;
pub use parallel_cpu_grid_renderer::ParallelCpuGridRenderer;
pub use ports::grid_renderer::GridRenderer;
