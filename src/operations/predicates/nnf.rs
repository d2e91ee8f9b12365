use crate::formulas::{Expression, ExpressionKind};

/// NNF predicate. Indicates whether a formula is in negation normal form,
/// i.e. it consists only of atoms, conjunctions and disjunctions.
///
/// # Example
///
/// ```
/// # use clausal::formulas::Expression;
/// # use clausal::operations::predicates::is_nnf;
/// let formula1: Expression = "~a & (b | x > 1)".parse().unwrap();
/// let formula2: Expression = "~(a & b)".parse().unwrap();
/// let formula3: Expression = "a => b".parse().unwrap();
///
/// assert!(is_nnf(&formula1));
/// assert!(!is_nnf(&formula2));
/// assert!(!is_nnf(&formula3));
/// ```
pub fn is_nnf(formula: &Expression) -> bool {
    let mut pending = vec![formula];
    while let Some(node) = pending.pop() {
        match node.kind() {
            ExpressionKind::And | ExpressionKind::Or => pending.extend(node.children()),
            _ if node.is_atom() => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::formulas::Expression;
    use crate::util::test_util::F;

    use super::is_nnf;

    #[test]
    fn test() {
        let F = F::new();
        assert!(is_nnf(&F.TRUE));
        assert!(is_nnf(&F.FALSE));
        assert!(is_nnf(&F.A));
        assert!(is_nnf(&F.NA));
        assert!(is_nnf(&F.OR1));
        assert!(is_nnf(&F.AND1));
        assert!(is_nnf(&F.AND3));
        assert!(is_nnf(&F.OR3));
        assert!(is_nnf(&F.LE1));
        assert!(!is_nnf(&F.IMP1));
        assert!(!is_nnf(&F.EQ1));
        assert!(!is_nnf(&F.NOT1));
        assert!(!is_nnf(&F.NOT2));
        assert!(!is_nnf(&Expression::add([Expression::int(1)]).unwrap()));
    }
}
