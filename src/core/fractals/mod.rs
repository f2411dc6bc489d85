pub mod errors;
pub mod formula;
pub mod orbit;
pub mod view_kind;

pub use errors::FormulaError;
pub use formula::FormulaId;
pub use view_kind::ViewKind;
