use crate::formulas::Expression;
use crate::parser::{parse, to_infix, ParseError};

/// A textual notation of formulas.
///
/// Parsing what a format serialized yields a formula with the same logical
/// structure.
pub trait FormulaFormat {
    /// The name of the format.
    fn name(&self) -> &'static str;

    /// The usual extension of files in this format, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Parses a formula.
    fn parse(&self, text: &str) -> Result<Expression, ParseError>;

    /// Serializes a formula.
    fn serialize(&self, formula: &Expression) -> String;
}

/// The infix notation, which is also used by [`Display`](std::fmt::Display)
/// and [`FromStr`](std::str::FromStr) of [`Expression`].
///
/// | Syntax | Meaning |
/// | --- | --- |
/// | `$true`, `$false` | constants |
/// | `a`, `_b1`, `"any name"` | boolean variables, or integer variables inside comparisons |
/// | `~`, `&`, `\|`, `=>`, `<=>` | connectives, from the strongest to the weakest binding one |
/// | `+`, `*` | sums and products of integer terms |
/// | `=`, `!=`, `<`, `<=`, `>`, `>=` | comparisons of two integer terms |
///
/// `=>` and `<=>` associate to the right. A `~` directly in front of a name
/// negates the literal instead of creating a negation node. An empty
/// text is `$true`.
///
/// ```
/// # use clausal::io::{FormulaFormat, InfixFormat};
/// let formula = InfixFormat.parse("~(a | b) => 2 * x + 1 >= y").unwrap();
/// assert_eq!(InfixFormat.serialize(&formula), "~(a | b) => 2 * x + 1 >= y");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InfixFormat;

impl FormulaFormat for InfixFormat {
    fn name(&self) -> &'static str {
        "infix"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn parse(&self, text: &str) -> Result<Expression, ParseError> {
        parse(text)
    }

    fn serialize(&self, formula: &Expression) -> String {
        to_infix(formula)
    }
}
