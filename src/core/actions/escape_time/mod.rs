pub mod algorithm;
pub mod escape_time;

pub use algorithm::EscapeTimeAlgorithm;
pub use escape_time::escape_time;
