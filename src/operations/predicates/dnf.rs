use crate::formulas::Expression;
use crate::operations::transformations::NormalForm;

use super::{is_clausal, NormalFormTester};

/// DNF predicate. Indicates whether a formula is in DNF or not.
///
/// # Example
///
/// ```
/// # use clausal::formulas::Expression;
/// # use clausal::operations::predicates::is_dnf;
/// let formula1: Expression = "a | ~b & c".parse().unwrap();
/// let formula2: Expression = "(a | b) & c".parse().unwrap();
///
/// assert!(is_dnf(&formula1));
/// assert!(!is_dnf(&formula2));
/// ```
pub fn is_dnf(formula: &Expression) -> bool {
    NormalFormTester::new(formula, NormalForm::Dnf).is_normal_form()
}

/// Clausal DNF predicate. Indicates whether a formula is a disjunction of
/// conjunctions of atoms.
pub fn is_clausal_dnf(formula: &Expression) -> bool {
    is_clausal(formula, NormalForm::Dnf)
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::formulas::Expression;
    use crate::util::test_util::F;

    use super::{is_clausal_dnf, is_dnf};

    #[test]
    fn test() {
        let F = F::new();
        assert!(is_dnf(&F.TRUE));
        assert!(is_dnf(&F.FALSE));
        assert!(is_dnf(&F.A));
        assert!(is_dnf(&F.NA));
        assert!(is_dnf(&F.OR1));
        assert!(is_dnf(&F.AND1));
        assert!(is_dnf(&F.OR3));
        assert!(is_dnf(&Expression::or([F.AND1.clone(), F.AND2.clone(), F.A.clone(), F.NY.clone()]).unwrap()));
        assert!(!is_dnf(&F.AND3));
        assert!(!is_dnf(&F.IMP1));
        assert!(!is_dnf(&F.EQ1));
        assert!(!is_dnf(&F.NOT1));
        assert!(!is_dnf(&F.NOT2));
        assert!(!is_dnf(&Expression::or([F.AND1.clone(), F.EQ1.clone()]).unwrap()));
    }

    #[test]
    fn test_clausal() {
        let F = F::new();
        assert!(is_clausal_dnf(&Expression::or([F.AND1.clone(), F.AND2.clone()]).unwrap()));
        assert!(!is_clausal_dnf(&F.AND1));
        assert!(is_clausal_dnf(&F.OR3));
        assert!(!is_clausal_dnf(&F.AND3));
    }
}
