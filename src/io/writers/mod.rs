pub mod dimacs_writer;
pub mod formula_writer;
