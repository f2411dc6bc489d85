use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    CHANNELS, OPAQUE, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours row-major `input` into an RGBA buffer with alpha fixed at 255.
///
/// `input` must hold exactly one value per pixel of `resolution`.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * CHANNELS);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b, OPAQUE]);
    }

    Ok(PixelBuffer::from_data(resolution, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        type T = u8;
        type Failure = StubError;

        fn map(&self, value: u8) -> Result<Colour, StubError> {
            Ok(Colour::new(value, value, value))
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        type T = u8;
        type Failure = StubError;

        fn map(&self, _: u8) -> Result<Colour, StubError> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let resolution = Resolution::new(2).unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255];

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, resolution).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.resolution(), resolution);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let results =
            generate_pixel_buffer(input, &StubColourMapFailure {}, Resolution::new(2).unwrap());

        assert_eq!(results, Err(GeneratePixelBufferError::ColourMap(StubError {})));
    }

    #[test]
    fn test_resolution_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results =
            generate_pixel_buffer(input, &StubColourMapSuccess {}, Resolution::new(2).unwrap());

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_size: 16,
                    buffer_size: 24
                }
            ))
        );
    }

    #[test]
    fn test_displays_colour_map_error() {
        let err: GeneratePixelBufferError<StubError> =
            GeneratePixelBufferError::ColourMap(StubError {});

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
