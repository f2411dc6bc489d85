use crate::core::data::colour::Colour;
use crate::core::data::point::GridPoint;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;
pub const OPAQUE: u8 = 255;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * CHANNELS
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: GridPoint,
        resolution: Resolution,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but the buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {} grid",
                    pixel.x, pixel.y, resolution
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A square RGBA image, row-major, ready for direct display.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// An opaque black image.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        let buffer = [0, 0, 0, OPAQUE].repeat(resolution.pixel_count());

        Self { resolution, buffer }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    fn index_of(&self, pixel: GridPoint) -> Result<usize, PixelBufferError> {
        if !self.resolution.contains(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        let side = self.resolution.get() as usize;

        Ok((pixel.y as usize * side + pixel.x as usize) * CHANNELS)
    }

    pub fn set_pixel(&mut self, pixel: GridPoint, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE;

        Ok(())
    }

    pub fn pixel(&self, pixel: GridPoint) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
