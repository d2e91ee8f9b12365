use crate::formulas::Expression;
use crate::operations::transformations::NormalForm;

use super::{is_clausal, NormalFormTester};

/// CNF predicate. Indicates whether a formula is in CNF or not.
///
/// Constants, literals and predicates are in CNF, as are conjunctions of
/// disjunctions of these. A formula in CNF need not be in clausal CNF.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use clausal::formulas::Expression;
/// # use clausal::operations::predicates::{is_clausal_cnf, is_cnf};
/// let formula1: Expression = "a".parse().unwrap();
/// let formula2: Expression = "a & ~b & (b | c)".parse().unwrap();
/// let formula3: Expression = "a | b | c".parse().unwrap();
/// let formula4: Expression = "a & ~b => (b | c)".parse().unwrap();
/// let formula5: Expression = "(a | ~b) & (b | c)".parse().unwrap();
///
/// assert_eq!(is_cnf(&formula1), true);
/// assert_eq!(is_cnf(&formula2), true);
/// assert_eq!(is_cnf(&formula3), true);
/// assert_eq!(is_cnf(&formula4), false);
/// assert_eq!(is_clausal_cnf(&formula2), false);
/// assert_eq!(is_clausal_cnf(&formula5), true);
/// ```
pub fn is_cnf(formula: &Expression) -> bool {
    NormalFormTester::new(formula, NormalForm::Cnf).is_normal_form()
}

/// Clausal CNF predicate. Indicates whether a formula is a conjunction of
/// disjunctions of atoms.
pub fn is_clausal_cnf(formula: &Expression) -> bool {
    is_clausal(formula, NormalForm::Cnf)
}
