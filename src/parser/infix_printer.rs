use crate::formulas::{Expression, ExpressionKind};

const EQUIVALENCE: u8 = 1;
const IMPLICATION: u8 = 2;
const DISJUNCTION: u8 = 3;
const CONJUNCTION: u8 = 4;
const SUM: u8 = 5;
const PRODUCT: u8 = 6;
const ATOM: u8 = 7;

struct Printed {
    text: String,
    precedence: u8,
}

impl Printed {
    const fn atom(text: String) -> Self {
        Self { text, precedence: ATOM }
    }

    /// Operands binding no tighter than their operator are parenthesized,
    /// so nested junctions and implications keep their structure.
    fn operand(self, precedence: u8) -> String {
        if self.precedence <= precedence {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

/// Prints an expression in the notation the formula parser reads.
///
/// An empty conjunction prints as `$true`, an empty disjunction as `$false`
/// and a junction with a single operand as the operand.
pub(crate) fn to_infix(expression: &Expression) -> String {
    expression.reduce(print_node).text
}

fn print_node(node: &Expression, mut children: Vec<Printed>) -> Printed {
    match node.kind() {
        ExpressionKind::True => Printed::atom("$true".to_owned()),
        ExpressionKind::False => Printed::atom("$false".to_owned()),
        ExpressionKind::Literal { name, positive: true } => Printed::atom(quote(name)),
        ExpressionKind::Literal { name, positive: false } => Printed::atom(format!("~{}", quote(name))),
        ExpressionKind::Variable(name) => Printed::atom(quote(name)),
        ExpressionKind::Constant(value) => Printed::atom(value.to_string()),
        ExpressionKind::Not => {
            let operand = children.remove(0);
            let bare = matches!(
                node.children()[0].kind(),
                ExpressionKind::Literal { positive: false, .. } | ExpressionKind::Not | ExpressionKind::True | ExpressionKind::False
            );
            Printed::atom(if bare { format!("~{}", operand.text) } else { format!("~({})", operand.text) })
        }
        ExpressionKind::And if children.is_empty() => Printed::atom("$true".to_owned()),
        ExpressionKind::Or if children.is_empty() => Printed::atom("$false".to_owned()),
        ExpressionKind::And | ExpressionKind::Or if children.len() == 1 => children.remove(0),
        ExpressionKind::And => junction(children, " & ", CONJUNCTION),
        ExpressionKind::Or => junction(children, " | ", DISJUNCTION),
        ExpressionKind::Implies => junction(children, " => ", IMPLICATION),
        ExpressionKind::BiImplies => junction(children, " <=> ", EQUIVALENCE),
        ExpressionKind::Add => junction(children, " + ", SUM),
        ExpressionKind::Multiply => junction(children, " * ", PRODUCT),
        ExpressionKind::Predicate(cmp) => {
            let right = children.pop().map(|c| c.text).unwrap_or_default();
            let left = children.pop().map(|c| c.text).unwrap_or_default();
            Printed::atom(format!("{left} {} {right}", cmp.symbol()))
        }
    }
}

fn junction(children: Vec<Printed>, separator: &str, precedence: u8) -> Printed {
    let operands: Vec<String> = children.into_iter().map(|child| child.operand(precedence)).collect();
    Printed { text: operands.join(separator), precedence }
}

fn quote(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '@')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@'));
    if plain {
        name.to_owned()
    } else {
        format!("\"{name}\"")
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas::Expression;
    use crate::util::test_util::{parse, F};

    use super::to_infix;

    #[test]
    fn test_fixture() {
        let f = F::new();
        assert_eq!(to_infix(&f.TRUE), "$true");
        assert_eq!(to_infix(&f.NA), "~a");
        assert_eq!(to_infix(&f.AND1), "a & b");
        assert_eq!(to_infix(&f.OR3), "a & b | ~a & ~b");
        assert_eq!(to_infix(&f.IMP3), "a & b => x | y");
        assert_eq!(to_infix(&f.EQ4), "a => b <=> ~a => ~b");
        assert_eq!(to_infix(&f.NOT1), "~(a & b)");
        assert_eq!(to_infix(&f.LE1), "x + 1 <= y");
    }

    #[test]
    fn test_parentheses() {
        for text in ["a & (b | c)", "(a => b) => c", "a & (b & c)", "(x + 1) * y >= 2 * z", "x + (y + z) = 0"] {
            assert_eq!(to_infix(&parse(text)), text);
        }
        assert_eq!(to_infix(&parse("((a)) | (b & c)")), "a | b & c");
        assert_eq!(to_infix(&parse("a => b => c")), "a => (b => c)");
    }

    #[test]
    fn test_negations() {
        for text in ["~(a)", "~~a", "~~(a)", "~$false", "~(x < 1)", "~(a <=> b)"] {
            assert_eq!(to_infix(&parse(text)), text);
        }
    }

    #[test]
    fn test_degenerate_junctions() {
        assert_eq!(to_infix(&Expression::and([] as [Expression; 0]).unwrap()), "$true");
        assert_eq!(to_infix(&Expression::or([] as [Expression; 0]).unwrap()), "$false");
        let single = Expression::and([parse("a | b")]).unwrap();
        assert_eq!(to_infix(&Expression::and([single, parse("c")]).unwrap()), "(a | b) & c");
    }

    #[test]
    fn test_names() {
        assert_eq!(to_infix(&Expression::variable("a b")), "\"a b\"");
        assert_eq!(to_infix(&Expression::literal("1", false)), "~\"1\"");
        assert_eq!(parse(&to_infix(&Expression::variable("x-y"))), Expression::variable("x-y"));
    }
}
