#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Transformations as cacheable, cancellable units of work.
pub mod computation;
/// Variable maps, named and indexed assignments, clauses, and clause lists.
pub mod datastructures;
/// Types to represent and inspect expression trees.
pub mod formulas;
/// Handlers for more control during some calculations.
pub mod handlers;
/// Functions for reading and writing formulas and clause lists.
pub mod io;
mod log;
/// Predicates and transformations for formulas.
pub mod operations;
mod parser;
/// The solver boundary.
pub mod solver;
/// Additional utility.
pub mod util;
