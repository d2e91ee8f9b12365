use crate::formulas::{Expression, ExpressionKind};

/// Constructs the _NNF_ form of `formula`.
///
/// Negations are pushed down to the atoms: negated literals flip their
/// sign, negated constants swap, and negated predicates invert their
/// comparison. Implications and equivalences are replaced by conjunctions
/// and disjunctions. Terms are returned unchanged.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use clausal::formulas::Expression;
/// # use clausal::operations::transformations::nnf;
/// let formula: Expression = "~(a => b) | ~(x <= 2)".parse().unwrap();
/// assert_eq!(nnf(&formula).to_string(), "a & ~b | x > 2");
/// ```
pub fn nnf(formula: &Expression) -> Expression {
    let mut pending = vec![Frame::Visit(formula, true)];
    let mut results: Vec<Expression> = Vec::new();
    while let Some(frame) = pending.pop() {
        match frame {
            Frame::Build(kind, arity) => {
                let children = results.split_off(results.len() - arity);
                results.push(Expression::new_unchecked(kind, children));
            }
            Frame::Visit(node, polarity) => visit(node, polarity, &mut pending, &mut results),
        }
    }
    results.pop().expect("the root yields exactly one result")
}

enum Frame<'a> {
    Visit(&'a Expression, bool),
    Build(ExpressionKind, usize),
}

fn visit<'a>(node: &'a Expression, polarity: bool, pending: &mut Vec<Frame<'a>>, results: &mut Vec<Expression>) {
    let children = node.children();
    match node.kind() {
        ExpressionKind::True | ExpressionKind::False | ExpressionKind::Literal { .. } | ExpressionKind::Predicate(_) => {
            results.push(if polarity { node.clone() } else { negate_atom(node) });
        }
        kind if kind.is_term() => results.push(node.clone()),
        ExpressionKind::Not => pending.push(Frame::Visit(&children[0], !polarity)),
        ExpressionKind::And | ExpressionKind::Or => {
            let conjunction = matches!(node.kind(), ExpressionKind::And) == polarity;
            pending.push(Frame::Build(junctor(conjunction), children.len()));
            pending.extend(children.iter().rev().map(|child| Frame::Visit(child, polarity)));
        }
        ExpressionKind::Implies => {
            let (left, right) = (&children[0], &children[1]);
            pending.push(Frame::Build(junctor(!polarity), 2));
            pending.push(Frame::Visit(right, polarity));
            pending.push(Frame::Visit(left, !polarity));
        }
        ExpressionKind::BiImplies => {
            let (left, right) = (&children[0], &children[1]);
            pending.push(Frame::Build(ExpressionKind::And, 2));
            pending.push(Frame::Build(ExpressionKind::Or, 2));
            pending.push(Frame::Visit(right, !polarity));
            pending.push(Frame::Visit(left, true));
            pending.push(Frame::Build(ExpressionKind::Or, 2));
            pending.push(Frame::Visit(right, polarity));
            pending.push(Frame::Visit(left, false));
        }
        _ => unreachable!("all formula kinds are handled"),
    }
}

const fn junctor(conjunction: bool) -> ExpressionKind {
    if conjunction {
        ExpressionKind::And
    } else {
        ExpressionKind::Or
    }
}

/// Negates a constant, a literal or a predicate.
pub(crate) fn negate_atom(atom: &Expression) -> Expression {
    match atom.kind() {
        ExpressionKind::True => Expression::falsum(),
        ExpressionKind::False => Expression::verum(),
        ExpressionKind::Literal { name, positive } => Expression::literal(name.as_str(), !positive),
        ExpressionKind::Predicate(cmp) => {
            Expression::new_unchecked(ExpressionKind::Predicate(cmp.invert()), atom.children().to_vec())
        }
        _ => unreachable!("only atoms are negated"),
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas::Expression;
    use crate::operations::predicates::is_nnf;
    use crate::util::test_util::{parse, F};

    use super::nnf;

    fn assert_nnf(input: &str, expected: &str) {
        let result = nnf(&parse(input));
        assert_eq!(result, parse(expected), "{input}");
        assert!(is_nnf(&result));
    }

    #[test]
    fn test_constants_and_literals() {
        let f = F::new();
        assert_eq!(nnf(&f.TRUE), f.TRUE);
        assert_eq!(nnf(&f.FALSE), f.FALSE);
        assert_eq!(nnf(&f.A), f.A);
        assert_eq!(nnf(&f.NA), f.NA);
        assert_nnf("~$true", "$false");
        assert_nnf("~~a", "a");
        assert_nnf("~(~a)", "a");
        assert_nnf("~~~a", "~a");
    }

    #[test]
    fn test_binary_operators() {
        let f = F::new();
        assert_eq!(nnf(&f.IMP1), parse("~a | b"));
        assert_eq!(nnf(&f.EQ1), parse("(~a | b) & (a | ~b)"));
        assert_nnf("~(a => b)", "a & ~b");
        assert_nnf("~(a <=> b)", "(~a | ~b) & (a | b)");
        assert_nnf("~a <=> ~b", "(a | ~b) & (~a | b)");
    }

    #[test]
    fn test_nary_operators() {
        assert_nnf("~(a & ~b & c)", "~a | b | ~c");
        assert_nnf("~(a | (b & ~c))", "~a & (~b | c)");
        assert_nnf("~((a => b) | ~(c <=> d))", "(a & ~b) & ((~c | d) & (c | ~d))");
    }

    #[test]
    fn test_predicates() {
        assert_nnf("~(x <= 3)", "x > 3");
        assert_nnf("~(x + y = 2 * z)", "x + y != 2 * z");
        assert_nnf("~(a & x < 1)", "~a | x >= 1");
    }

    #[test]
    fn test_terms_are_unchanged() {
        let term = Expression::add([Expression::int_variable("x"), Expression::int(1)]).unwrap();
        assert_eq!(nnf(&term), term);
    }
}
