//! Session state shared by the two linked views.
//!
//! A session owns everything the UI layer can change: one domain per view,
//! the parameter `c`, the orbit pointer `z`, the formula, the iteration cap
//! and the active colour table. Core functions only ever see values copied
//! out of it through [`Session::request`].

use crate::controllers::backend::BackendPreference;
use crate::core::actions::render_grid::errors::RenderError;
use crate::core::actions::render_grid::ports::grid_renderer::GridRenderer;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::lookup_table::{ColourLookupTable, DEFAULT_TABLE_LENGTH};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::errors::FormulaError;
use crate::core::fractals::formula::FormulaId;
use crate::core::fractals::orbit::step_orbit;
use crate::core::fractals::view_kind::ViewKind;
use crate::core::util::pixel_to_complex_coords::{pixel_to_plane, plane_to_pixel};
use crate::core::util::zoom::zoom;
use std::sync::Arc;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub formula: FormulaId,
    pub colour_map: ColourMapKind,
    pub table_length: usize,
    pub backend: BackendPreference,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            formula: FormulaId::default(),
            colour_map: ColourMapKind::default(),
            table_length: DEFAULT_TABLE_LENGTH,
            backend: BackendPreference::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    resolution: Resolution,
    max_iterations: u32,
    formula: FormulaId,
    colour_table: Arc<ColourLookupTable>,
    backend: BackendPreference,
    mandelbrot_domain: ComplexRect,
    julia_domain: ComplexRect,
    c: Complex,
    z: Complex,
    c_locked: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ColourMapError> {
        let colour_table = ColourLookupTable::build(config.colour_map, config.table_length)?;

        Ok(Self {
            resolution: config.resolution,
            max_iterations: config.max_iterations,
            formula: config.formula,
            colour_table: Arc::new(colour_table),
            backend: config.backend,
            mandelbrot_domain: ComplexRect::default(),
            julia_domain: ComplexRect::default(),
            c: Complex::ORIGIN,
            z: Complex::ORIGIN,
            c_locked: true,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn formula(&self) -> FormulaId {
        self.formula
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapKind {
        self.colour_table.kind()
    }

    #[must_use]
    pub fn colour_table(&self) -> &Arc<ColourLookupTable> {
        &self.colour_table
    }

    #[must_use]
    pub fn backend(&self) -> BackendPreference {
        self.backend
    }

    #[must_use]
    pub fn domain(&self, view: ViewKind) -> ComplexRect {
        match view {
            ViewKind::Mandelbrot => self.mandelbrot_domain,
            ViewKind::Julia => self.julia_domain,
        }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn z(&self) -> Complex {
        self.z
    }

    #[must_use]
    pub fn is_c_locked(&self) -> bool {
        self.c_locked
    }

    /// A cap of 0 is accepted and renders every pixel black.
    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = max_iterations;
    }

    pub fn set_formula(&mut self, formula: FormulaId) {
        self.formula = formula;
    }

    /// Selects a formula by name. An unknown name leaves the current
    /// formula in place.
    pub fn set_formula_by_name(&mut self, name: &str) -> Result<(), FormulaError> {
        self.formula = name.parse()?;
        Ok(())
    }

    /// Builds the new table before swapping it in. Requests already handed
    /// out keep the table they were created with.
    pub fn set_colour_map(&mut self, kind: ColourMapKind) -> Result<(), ColourMapError> {
        self.rebuild_colour_table(kind, self.colour_table.length())
    }

    pub fn set_table_length(&mut self, table_length: usize) -> Result<(), ColourMapError> {
        self.rebuild_colour_table(self.colour_table.kind(), table_length)
    }

    fn rebuild_colour_table(
        &mut self,
        kind: ColourMapKind,
        table_length: usize,
    ) -> Result<(), ColourMapError> {
        let table = ColourLookupTable::build(kind, table_length)?;
        self.colour_table = Arc::new(table);
        Ok(())
    }

    pub fn set_backend(&mut self, backend: BackendPreference) {
        self.backend = backend;
    }

    pub fn set_c(&mut self, c: Complex) {
        self.c = c;
    }

    pub fn set_z(&mut self, z: Complex) {
        self.z = z;
    }

    /// The render request for `view` as the session stands now.
    ///
    /// The Mandelbrot view starts every orbit at the origin; the Julia view
    /// uses `c` as its parameter.
    #[must_use]
    pub fn request(&self, view: ViewKind) -> RenderRequest {
        let fixed = match view {
            ViewKind::Mandelbrot => Complex::ORIGIN,
            ViewKind::Julia => self.c,
        };

        RenderRequest {
            resolution: self.resolution,
            domain: self.domain(view),
            formula: self.formula,
            view,
            fixed,
            max_iterations: self.max_iterations,
            colour_table: Arc::clone(&self.colour_table),
        }
    }

    pub fn render(
        &self,
        view: ViewKind,
        renderer: &mut dyn GridRenderer,
    ) -> Result<PixelBuffer, RenderError> {
        let request = self.request(view);

        log::debug!(
            "rendering {} view of {} over {} at {} iterations",
            view,
            request.formula,
            request.domain,
            request.max_iterations
        );

        renderer.render(&request)
    }

    #[must_use]
    pub fn pixel_to_plane(&self, view: ViewKind, pixel: Point) -> Complex {
        pixel_to_plane(pixel, self.domain(view), self.resolution)
    }

    #[must_use]
    pub fn plane_to_pixel(&self, view: ViewKind, point: Complex) -> Point {
        plane_to_pixel(point, self.domain(view), self.resolution)
    }

    /// Where the view's pointer sits on its grid: `c` on the Mandelbrot
    /// view, `z` on the Julia view. May lie off the grid.
    #[must_use]
    pub fn pointer_pixel(&self, view: ViewKind) -> Point {
        self.plane_to_pixel(view, self.pointer(view))
    }

    /// Whether the view's pointer lies inside its current domain, so a
    /// crosshair at [`Session::pointer_pixel`] would be on screen.
    #[must_use]
    pub fn is_pointer_visible(&self, view: ViewKind) -> bool {
        self.domain(view).contains_point(self.pointer(view))
    }

    fn pointer(&self, view: ViewKind) -> Complex {
        match view {
            ViewKind::Mandelbrot => self.c,
            ViewKind::Julia => self.z,
        }
    }

    /// Hover over the Mandelbrot view. Moves `c` only while unlocked and
    /// returns whether it moved, in which case the Julia view is stale.
    pub fn track_pointer(&mut self, pixel: Point) -> bool {
        if self.c_locked {
            return false;
        }

        self.c = self.pixel_to_plane(ViewKind::Mandelbrot, pixel);
        true
    }

    /// Click on the Mandelbrot view: pins `c` there and locks it.
    pub fn select_c_at_pixel(&mut self, pixel: Point) -> Complex {
        self.c_locked = true;
        self.c = self.pixel_to_plane(ViewKind::Mandelbrot, pixel);
        self.c
    }

    /// Click on the Julia view: moves the orbit pointer.
    pub fn select_z_at_pixel(&mut self, pixel: Point) -> Complex {
        self.z = self.pixel_to_plane(ViewKind::Julia, pixel);
        self.z
    }

    /// Returns the new lock state.
    pub fn toggle_c_lock(&mut self) -> bool {
        self.c_locked = !self.c_locked;
        self.c_locked
    }

    /// Advances `z` one step along its orbit under the current formula and `c`.
    pub fn iterate_pointer(&mut self) -> Complex {
        self.z = step_orbit(self.z, self.c, self.formula);
        self.z
    }

    /// Scales the view's domain by `factor` about its pointer.
    pub fn zoom_view(&mut self, view: ViewKind, factor: f64) -> Result<(), ComplexRectError> {
        let zoomed = zoom(self.domain(view), factor, self.pointer(view))?;

        match view {
            ViewKind::Mandelbrot => self.mandelbrot_domain = zoomed,
            ViewKind::Julia => self.julia_domain = zoomed,
        }

        Ok(())
    }

    pub fn reset_view(&mut self, view: ViewKind) {
        match view {
            ViewKind::Mandelbrot => self.mandelbrot_domain = ComplexRect::default(),
            ViewKind::Julia => self.julia_domain = ComplexRect::default(),
        }
    }

    /// Restores both domains and returns `c` and `z` to the origin.
    pub fn reset(&mut self) {
        self.z = Complex::ORIGIN;
        self.c = Complex::ORIGIN;
        self.reset_view(ViewKind::Mandelbrot);
        self.reset_view(ViewKind::Julia);
    }
}
