use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let side = buffer.resolution().get();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", side, side)?;
        writeln!(file, "255")?;
        file.write_all(&rgba_to_rgb(buffer.buffer()))?;
        file.flush()?;

        Ok(())
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::GridPoint;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_present_writes_header_and_rgb_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let mut buffer = PixelBuffer::new(Resolution::new(2).unwrap());
        buffer
            .set_pixel(GridPoint { x: 1, y: 0 }, Colour::new(10, 20, 30))
            .unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);

        let payload = &bytes[header.len()..];
        assert_eq!(payload.len(), 2 * 2 * 3);
        assert_eq!(&payload[..6], &[0, 0, 0, 10, 20, 30]);
        assert!(payload[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_present_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");
        let buffer = PixelBuffer::new(Resolution::new(1).unwrap());

        assert!(PpmFilePresenter::new().present(&buffer, path).is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(PpmFilePresenter::default().extension(), "ppm");
    }
}
