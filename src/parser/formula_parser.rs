use std::fmt::{Display, Formatter};
use std::str::FromStr;

use pest::iterators::Pair;
use pest::Parser;

use crate::formulas::{Comparison, Expression, ExpressionError};

#[derive(Parser)]
#[grammar = "parser/formula.pest"]
struct FormulaParser;

/// Errors raised when a text is not a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not match the grammar. Carries the message of the
    /// parser.
    Syntax(String),
    /// The text matches the grammar, but describes an invalid expression.
    Expression(ExpressionError),
    /// An integer constant does not fit into 64 bits.
    Number(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Syntax(message) => format!("syntax error: {message}"),
            Self::Expression(error) => format!("invalid expression: {error}"),
            Self::Number(number) => format!("integer out of range: {number}"),
        };
        f.write_str(&msg)
    }
}

impl std::error::Error for ParseError {}

impl From<ExpressionError> for ParseError {
    fn from(error: ExpressionError) -> Self {
        Self::Expression(error)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    /// Parses the infix notation, see [`InfixFormat`](crate::io::InfixFormat).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(input: &str) -> Result<Expression, ParseError> {
    let mut parsed = FormulaParser::parse(Rule::formula, input).map_err(|e| ParseError::Syntax(e.to_string()))?;
    let mut formula = Expression::verum();
    for pair in next(&mut parsed).into_inner() {
        match pair.as_rule() {
            Rule::equivalence => formula = parse_equivalence(pair)?,
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }
    Ok(formula)
}

/// The grammar guarantees every pair this is called for.
fn next<'i>(pairs: &mut impl Iterator<Item = Pair<'i, Rule>>) -> Pair<'i, Rule> {
    pairs.next().expect("grammar guarantees the operand")
}

fn parse_equivalence(equivalence: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut implications = equivalence.into_inner().rev();
    let mut formula = parse_implication(next(&mut implications))?;
    for implication in implications {
        formula = Expression::bi_implies(parse_implication(implication)?, formula)?;
    }
    Ok(formula)
}

fn parse_implication(implication: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut disjunctions = implication.into_inner().rev();
    let mut formula = parse_disjunction(next(&mut disjunctions))?;
    for disjunction in disjunctions {
        formula = Expression::implies(parse_disjunction(disjunction)?, formula)?;
    }
    Ok(formula)
}

fn parse_disjunction(disjunction: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut operands = disjunction.into_inner().map(parse_conjunction).collect::<Result<Vec<_>, _>>()?;
    if operands.len() == 1 {
        Ok(operands.remove(0))
    } else {
        Ok(Expression::or(operands)?)
    }
}

fn parse_conjunction(conjunction: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut operands = conjunction.into_inner().map(parse_unary).collect::<Result<Vec<_>, _>>()?;
    if operands.len() == 1 {
        Ok(operands.remove(0))
    } else {
        Ok(Expression::and(operands)?)
    }
}

/// The innermost `~` in front of a name negates the literal, all others
/// become negation nodes.
fn parse_unary(unary: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut tokens = unary.into_inner();
    let mut negations = 0_usize;
    let mut x = next(&mut tokens);
    while x.as_rule() == Rule::negation {
        negations += 1;
        x = next(&mut tokens);
    }
    let mut formula = match x.as_rule() {
        Rule::verum => Expression::verum(),
        Rule::falsum => Expression::falsum(),
        Rule::comparison => parse_comparison(x)?,
        Rule::name if negations > 0 => {
            negations -= 1;
            Expression::literal(parse_name(x), false)
        }
        Rule::name => Expression::variable(parse_name(x)),
        Rule::equivalence => parse_equivalence(x)?,
        _ => unreachable!(),
    };
    for _ in 0..negations {
        formula = Expression::not(formula)?;
    }
    Ok(formula)
}

fn parse_comparison(comparison: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut tokens = comparison.into_inner();
    let left = parse_sum(next(&mut tokens))?;
    let comparator = match next(&mut tokens).as_rule() {
        Rule::eq => Comparison::Equal,
        Rule::ne => Comparison::NotEqual,
        Rule::lt => Comparison::LessThan,
        Rule::le => Comparison::LessEqual,
        Rule::gt => Comparison::GreaterThan,
        Rule::ge => Comparison::GreaterEqual,
        _ => unreachable!(),
    };
    let right = parse_sum(next(&mut tokens))?;
    Ok(Expression::predicate(comparator, left, right)?)
}

fn parse_sum(sum: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut operands = sum.into_inner().map(parse_product).collect::<Result<Vec<_>, _>>()?;
    if operands.len() == 1 {
        Ok(operands.remove(0))
    } else {
        Ok(Expression::add(operands)?)
    }
}

fn parse_product(product: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut operands = product.into_inner().map(parse_factor).collect::<Result<Vec<_>, _>>()?;
    if operands.len() == 1 {
        Ok(operands.remove(0))
    } else {
        Ok(Expression::multiply(operands)?)
    }
}

fn parse_factor(factor: Pair<Rule>) -> Result<Expression, ParseError> {
    match factor.as_rule() {
        Rule::number => {
            let text = factor.as_str();
            text.parse().map(Expression::int).map_err(|_| ParseError::Number(text.to_owned()))
        }
        Rule::name => Ok(Expression::int_variable(parse_name(factor))),
        Rule::sum => parse_sum(factor),
        _ => unreachable!(),
    }
}

fn parse_name(name: Pair<Rule>) -> String {
    let mut inner = name.into_inner();
    next(&mut inner).as_str().to_owned()
}
