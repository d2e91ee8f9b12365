pub mod dimacs_reader;
pub mod formula_reader;
