use crate::core::colour_mapping::lookup_table::ColourLookupTable;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::formula::FormulaId;
use crate::core::fractals::view_kind::ViewKind;
use std::sync::Arc;

/// Everything a grid renderer needs to produce one view.
///
/// `fixed` is `z0` for the Mandelbrot view and `c` for the Julia view. The
/// colour table is shared, never mutated, so a request can be handed to
/// another thread while the session builds a replacement table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub resolution: Resolution,
    pub domain: ComplexRect,
    pub formula: FormulaId,
    pub view: ViewKind,
    pub fixed: Complex,
    pub max_iterations: u32,
    pub colour_table: Arc<ColourLookupTable>,
}
