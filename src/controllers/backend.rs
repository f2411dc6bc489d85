//! Backend preference and renderer selection.
//!
//! The accelerated backend is chosen only when asked for and available;
//! anything else falls back to the sequential CPU renderer with a warning.

use crate::core::actions::render_grid::cpu_grid_renderer::CpuGridRenderer;
use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::parallel_cpu_grid_renderer::ParallelCpuGridRenderer;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    UnknownBackend(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBackend(name) => {
                write!(f, "unknown backend '{}', expected cpu, parallel or gpu", name)
            }
        }
    }
}

impl Error for BackendError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendPreference {
    #[default]
    Cpu,
    Parallel,
    Gpu,
}

impl BackendPreference {
    pub const ALL: &'static [Self] = &[Self::Cpu, Self::Parallel, Self::Gpu];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Parallel => "parallel",
            Self::Gpu => "gpu",
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).id())
    }
}

impl FromStr for BackendPreference {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.id() == normalised)
            .ok_or_else(|| BackendError::UnknownBackend(s.to_string()))
    }
}

/// Builds the renderer for `preference`.
#[must_use]
pub fn select_renderer(preference: BackendPreference) -> Box<dyn GridRenderer> {
    let renderer: Box<dyn GridRenderer> = match preference {
        BackendPreference::Cpu => Box::new(CpuGridRenderer),
        BackendPreference::Parallel => Box::new(ParallelCpuGridRenderer),
        BackendPreference::Gpu => accelerated_or_cpu(),
    };

    log::info!("rendering with the {} backend", renderer.backend_name());

    renderer
}

#[cfg(feature = "gpu")]
fn accelerated_or_cpu() -> Box<dyn GridRenderer> {
    match crate::gpu::GpuGridRenderer::try_new_blocking() {
        Ok(renderer) => Box::new(FallbackGridRenderer::new(renderer, CpuGridRenderer)),
        Err(err) => {
            log::warn!("accelerated backend unavailable, falling back to cpu: {}", err);
            Box::new(CpuGridRenderer)
        }
    }
}

#[cfg(not(feature = "gpu"))]
fn accelerated_or_cpu() -> Box<dyn GridRenderer> {
    log::warn!("built without the gpu feature, falling back to cpu");
    Box::new(CpuGridRenderer)
}

/// Retries a render on `fallback` when `primary` reports an accelerated
/// backend failure. Other errors pass through unchanged.
#[derive(Debug)]
pub struct FallbackGridRenderer<P, F> {
    primary: P,
    fallback: F,
}

impl<P: GridRenderer, F: GridRenderer> FallbackGridRenderer<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: GridRenderer, F: GridRenderer> GridRenderer for FallbackGridRenderer<P, F> {
    fn backend_name(&self) -> &'static str {
        self.primary.backend_name()
    }

    fn render(&mut self, request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
        match self.primary.render(request) {
            Err(RenderError::Accelerated(err)) => {
                log::warn!(
                    "{} render failed ({}), retrying on {}",
                    self.primary.backend_name(),
                    err,
                    self.fallback.backend_name()
                );
                self.fallback.render(request)
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::colour_mapping::lookup_table::ColourLookupTable;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::formula::FormulaId;
    use crate::core::fractals::view_kind::ViewKind;
    use std::sync::Arc;

    struct BrokenDevice;

    impl GridRenderer for BrokenDevice {
        fn backend_name(&self) -> &'static str {
            "broken"
        }

        fn render(&mut self, _: &RenderRequest) -> Result<PixelBuffer, RenderError> {
            Err(RenderError::Accelerated("device lost".into()))
        }
    }

    fn request() -> RenderRequest {
        RenderRequest {
            resolution: Resolution::new(8).unwrap(),
            domain: ComplexRect::default(),
            formula: FormulaId::Standard,
            view: ViewKind::Mandelbrot,
            fixed: Complex::ORIGIN,
            max_iterations: 20,
            colour_table: Arc::new(ColourLookupTable::build(ColourMapKind::DarkRed, 10).unwrap()),
        }
    }

    #[test]
    fn parses_every_id() {
        for &backend in BackendPreference::ALL {
            assert_eq!(backend.id().parse(), Ok(backend));
        }
        assert_eq!(" GPU ".parse(), Ok(BackendPreference::Gpu));
    }

    #[test]
    fn unknown_backend_fails() {
        assert_eq!(
            "opencl".parse::<BackendPreference>(),
            Err(BackendError::UnknownBackend("opencl".to_string()))
        );
    }

    #[test]
    fn cpu_preferences_select_cpu_renderers() {
        assert_eq!(select_renderer(BackendPreference::Cpu).backend_name(), "cpu");
        assert_eq!(
            select_renderer(BackendPreference::Parallel).backend_name(),
            "parallel"
        );
    }

    #[test]
    fn gpu_preference_always_yields_a_working_renderer() {
        let mut renderer = select_renderer(BackendPreference::Gpu);

        assert!(renderer.render(&request()).is_ok());
    }

    #[test]
    fn fallback_renders_on_cpu_after_accelerated_failure() {
        let mut renderer = FallbackGridRenderer::new(BrokenDevice, CpuGridRenderer);

        let result = renderer.render(&request()).unwrap();

        assert_eq!(result, CpuGridRenderer.render(&request()).unwrap());
        assert_eq!(renderer.backend_name(), "broken");
    }
}
