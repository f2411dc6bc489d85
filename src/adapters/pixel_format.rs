//! Pixel format conversion helpers for presentation adapters.

/// Drops the alpha channel from RGBA pixel data.
///
/// # Arguments
/// * `src` - Source buffer with RGBA data (4 bytes per pixel)
///
/// Trailing bytes that do not form a whole pixel are ignored.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity((src.len() / 4) * 3);

    for pixel in src.chunks_exact(4) {
        dst.extend_from_slice(&pixel[..3]);
    }

    dst
}
