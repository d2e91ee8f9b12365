mod format;
mod readers;
mod writers;

pub use crate::parser::ParseError;
pub use format::*;
pub use readers::dimacs_reader::*;
pub use readers::formula_reader::*;
pub use writers::dimacs_writer::*;
pub use writers::formula_writer::*;
