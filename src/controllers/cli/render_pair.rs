use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::Session;
use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::view_kind::ViewKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Renders both views of a session once and writes them to disk.
pub struct RenderPairController<P: FilePresenterPort> {
    presenter: P,
    renderer: Box<dyn GridRenderer>,
    frames: Vec<(ViewKind, PixelBuffer)>,
}

impl<P: FilePresenterPort> RenderPairController<P> {
    pub fn new(presenter: P, renderer: Box<dyn GridRenderer>) -> Self {
        Self {
            presenter,
            renderer,
            frames: Vec::new(),
        }
    }

    pub fn generate(&mut self, session: &Session) -> Result<(), RenderError> {
        self.frames.clear();

        for &view in ViewKind::ALL {
            let start = Instant::now();
            let buffer = session.render(view, self.renderer.as_mut())?;

            log::info!(
                "{} view rendered by {} backend in {:?}",
                view,
                self.renderer.backend_name(),
                start.elapsed()
            );

            self.frames.push((view, buffer));
        }

        Ok(())
    }

    #[must_use]
    pub fn frame(&self, view: ViewKind) -> Option<&PixelBuffer> {
        self.frames
            .iter()
            .find(|(kind, _)| *kind == view)
            .map(|(_, buffer)| buffer)
    }

    /// Writes one file per rendered view into `output_dir`, named after the
    /// view. Returns the written paths.
    pub fn write(&self, output_dir: impl AsRef<Path>) -> std::io::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.frames.len());

        for (view, buffer) in &self.frames {
            let filepath = output_dir
                .as_ref()
                .join(format!("{}.{}", view.id(), self.presenter.extension()));

            self.presenter.present(buffer, &filepath)?;
            written.push(filepath);
        }

        Ok(written)
    }
}
