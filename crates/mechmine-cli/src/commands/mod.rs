//! Command implementations.

mod precision;
mod refine;
mod score;
mod select;

pub use precision::execute_precision;
pub use refine::execute_refine;
pub use score::execute_score;
pub use select::execute_select;
