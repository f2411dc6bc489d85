use crate::core::data::render_request::RenderRequest;
use bytemuck::{Pod, Zeroable};

/// Per-render parameters, laid out to match `Params` in `escape_time.wgsl`.
///
/// Plane values are narrowed to `f32`; the device evaluates in single
/// precision, which limits useful zoom depth well before the CPU backends.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub re_min: f32,
    pub re_max: f32,
    pub im_min: f32,
    pub im_max: f32,
    pub fixed_re: f32,
    pub fixed_im: f32,
    pub escape_radius_sq: f32,
    pub _pad: f32,
    pub resolution: u32,
    pub max_iterations: u32,
    pub formula: u32,
    pub is_julia: u32,
}

impl Uniforms {
    #[must_use]
    pub fn from_request(request: &RenderRequest) -> Self {
        let [re_min, re_max] = request.domain.real_interval();
        let [im_min, im_max] = request.domain.imag_interval();

        Self {
            re_min: re_min as f32,
            re_max: re_max as f32,
            im_min: im_min as f32,
            im_max: im_max as f32,
            fixed_re: request.fixed.real as f32,
            fixed_im: request.fixed.imag as f32,
            escape_radius_sq: request.formula.escape_radius_squared() as f32,
            _pad: 0.0,
            resolution: request.resolution.get(),
            max_iterations: request.max_iterations,
            formula: request.formula.shader_tag(),
            is_julia: u32::from(request.view.is_julia()),
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

    #[test]
    fn size_is_a_multiple_of_sixteen() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 48);
    }

    #[test]
    fn from_request_copies_every_parameter() {
        let request = RenderRequest {
            resolution: Resolution::new(256).unwrap(),
            domain: ComplexRect::from_intervals([-1.5, 0.5], [-1.0, 1.0]).unwrap(),
            formula: FormulaId::Hyperbolic,
            view: ViewKind::Julia,
            fixed: Complex::new(0.25, -0.5),
            max_iterations: 300,
            colour_table: Arc::new(ColourLookupTable::build(ColourMapKind::Aqua, 16).unwrap()),
        };

        let uniforms = Uniforms::from_request(&request);

        assert_eq!(
            uniforms,
            Uniforms {
                re_min: -1.5,
                re_max: 0.5,
                im_min: -1.0,
                im_max: 1.0,
                fixed_re: 0.25,
                fixed_im: -0.5,
                escape_radius_sq: 100.0,
                _pad: 0.0,
                resolution: 256,
                max_iterations: 300,
                formula: 1,
                is_julia: 1,
            }
        );
    }
}
