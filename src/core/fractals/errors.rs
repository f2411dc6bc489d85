use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    UnknownFormula(String),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormula(id) => {
                write!(f, "unknown fractal formula '{}'", id)
            }
        }
    }
}

impl Error for FormulaError {}
