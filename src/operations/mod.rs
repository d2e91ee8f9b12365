/// A transformation takes a formula as input and returns another formula or
/// a clause list, thus transforming the input formula. Examples for
/// transformations are normal form conversions like NNF, CNF, or DNF.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula is in a certain normal form like NNF, CNF,
/// or DNF.
pub mod predicates;
