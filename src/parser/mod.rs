mod formula_parser;
mod infix_printer;

pub use formula_parser::ParseError;
pub(crate) use formula_parser::parse;
pub(crate) use infix_printer::to_infix;
