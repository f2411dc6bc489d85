use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
    /// The accelerated backend failed mid-render. Callers may retry on a
    /// CPU renderer.
    Accelerated(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Accelerated(err) => write!(f, "accelerated backend error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Accelerated(err) => Some(err.as_ref()),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<GeneratePixelBufferError<Infallible>> for RenderError {
    fn from(err: GeneratePixelBufferError<Infallible>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(never) => match never {},
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}
