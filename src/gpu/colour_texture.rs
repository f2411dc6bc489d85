use crate::core::colour_mapping::lookup_table::ColourLookupTable;
use crate::core::data::pixel_buffer::OPAQUE;
use crate::gpu::error::GpuError;
use std::sync::Arc;

/// A colour lookup table resident on the device.
///
/// Uploaded as a `length × 1` RGBA texture; compute shaders cannot sample
/// one-dimensional textures with an explicit level, so a single-row 2D
/// texture stands in. The source table is kept so a renderer can tell
/// whether a request still uses the uploaded copy.
pub struct ColourTexture {
    table: Arc<ColourLookupTable>,
    _texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl ColourTexture {
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        table: &Arc<ColourLookupTable>,
    ) -> Result<Self, GpuError> {
        let length = table.length();
        let max = device.limits().max_texture_dimension_2d;
        let width = u32::try_from(length)
            .ok()
            .filter(|&width| width <= max)
            .ok_or(GpuError::TableTooLong { length, max })?;

        let size = wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("colour_table"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba_texels(table),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        log::debug!("uploaded {} colour table ({} texels)", table.kind(), width);

        Ok(Self {
            table: Arc::clone(table),
            _texture: texture,
            view,
        })
    }

    /// True if this texture was uploaded from exactly `table`.
    #[must_use]
    pub fn is_for(&self, table: &Arc<ColourLookupTable>) -> bool {
        Arc::ptr_eq(&self.table, table)
    }
}

/// Table entries as opaque RGBA bytes, in table order.
#[must_use]
pub fn rgba_texels(table: &ColourLookupTable) -> Vec<u8> {
    table
        .entries()
        .iter()
        .flat_map(|colour| [colour.r, colour.g, colour.b, OPAQUE])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::ColourMapKind;

    #[test]
    fn texels_follow_table_order() {
        let table = ColourLookupTable::build(ColourMapKind::Viridis, 3).unwrap();
        let texels = rgba_texels(&table);

        assert_eq!(texels.len(), 12);
        assert_eq!(&texels[0..4], &[0, 0, 255, 255]);
        assert_eq!(&texels[8..12], &[255, 255, 0, 255]);
    }
}
