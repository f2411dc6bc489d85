pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod presenters;

pub use crate::controllers::backend::{BackendPreference, select_renderer};
pub use crate::controllers::cli::render_pair::RenderPairController;
pub use crate::controllers::render_scheduler::{FrameSink, RenderEvent, RenderScheduler};
pub use crate::controllers::session::{Session, SessionConfig};
pub use crate::core::actions::render_grid::{GridRenderer, RenderError};
pub use crate::core::colour_mapping::ColourMapKind;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::fractals::{FormulaId, ViewKind};
pub use crate::presenters::file::ppm::PpmFilePresenter;
