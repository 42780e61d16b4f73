//! Error types

mod parse;
mod validation;

pub use parse::*;
pub use validation::*;
