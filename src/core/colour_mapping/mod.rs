pub mod errors;
pub mod factory;
pub mod gradient;
pub mod kinds;
pub mod lookup_table;
pub mod maps;

pub use errors::ColourMapError;
pub use kinds::ColourMapKind;
pub use lookup_table::{ColourLookupTable, DEFAULT_TABLE_LENGTH};
