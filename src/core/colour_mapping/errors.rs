use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    UnknownColourMap(String),
    TableTooShort(usize),
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColourMap(name) => write!(f, "unknown colour map '{}'", name),
            Self::TableTooShort(length) => {
                write!(
                    f,
                    "colour lookup table needs at least 2 entries, got {}",
                    length
                )
            }
        }
    }
}

impl Error for ColourMapError {}
