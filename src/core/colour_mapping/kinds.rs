use crate::core::colour_mapping::errors::ColourMapError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    Aqua,
    #[default]
    DarkRed,
    Viridis,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::DarkRed, Self::Aqua, Self::Viridis];

    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Aqua => "aqua",
            Self::DarkRed => "dark_red",
            Self::Viridis => "viridis",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aqua => "Aqua",
            Self::DarkRed => "Dark red",
            Self::Viridis => "Viridis",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKind {
    type Err = ColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == normalised)
            .ok_or_else(|| ColourMapError::UnknownColourMap(s.to_string()))
    }
}
