use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use std::convert::Infallible;

pub const DEFAULT_TABLE_LENGTH: usize = 1000;

/// A colour gradient sampled at evenly spaced points of `[0, 1]`.
///
/// Entry `i` holds `gradient(i / (length - 1))`, so the first and last
/// entries are the gradient's endpoints. Tables are immutable once built;
/// switching colour map means building a new table and swapping it in.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourLookupTable {
    kind: ColourMapKind,
    entries: Vec<Colour>,
}

impl ColourLookupTable {
    pub fn build(kind: ColourMapKind, length: usize) -> Result<Self, ColourMapError> {
        if length < 2 {
            return Err(ColourMapError::TableTooShort(length));
        }

        let gradient = colour_map_factory(kind);
        let last = (length - 1) as f64;
        let entries = (0..length)
            .map(|i| gradient.colour_at(i as f64 / last))
            .collect();

        log::debug!("built {} colour table with {} entries", kind, length);

        Ok(Self { kind, entries })
    }

    #[must_use]
    pub fn kind(&self) -> ColourMapKind {
        self.kind
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Table index for an escape count, or `None` when the pixel is black.
    ///
    /// `round(n / max * (length - 1))`, clamped so `n >= max` lands on the
    /// last entry.
    #[must_use]
    pub fn index_for(&self, iterations: u32, max_iterations: u32) -> Option<usize> {
        if iterations == 0 || max_iterations == 0 {
            return None;
        }

        let last = self.entries.len() - 1;
        let t = (f64::from(iterations) / f64::from(max_iterations)).min(1.0);
        let index = (t * last as f64).round() as usize;

        Some(index.min(last))
    }

    #[must_use]
    pub fn lookup(&self, iterations: u32, max_iterations: u32) -> Colour {
        self.index_for(iterations, max_iterations)
            .map_or(Colour::BLACK, |index| self.entries[index])
    }

    /// Binds the table to an iteration cap for pixel buffer generation.
    #[must_use]
    pub fn for_max_iterations(&self, max_iterations: u32) -> EscapeColourMap<'_> {
        EscapeColourMap {
            table: self,
            max_iterations,
        }
    }
}

/// Maps escape counts to colours for one iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct EscapeColourMap<'a> {
    table: &'a ColourLookupTable,
    max_iterations: u32,
}

impl ColourMap for EscapeColourMap<'_> {
    type T = u32;
    type Failure = Infallible;

    fn map(&self, iterations: u32) -> Result<Colour, Infallible> {
        Ok(self.table.lookup(iterations, self.max_iterations))
    }
}
