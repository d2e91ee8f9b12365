use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::formulas::Expression;
use crate::io::{FormulaFormat, InfixFormat};

/// Reads a formula in [`InfixFormat`] from a file.
///
/// Every non-blank line holds one formula. A file with several formulas
/// yields their conjunction, a file with a single formula yields this
/// formula, and a file without any yields `$true`.
///
/// If the file cannot be read or contains an invalid formula, a respective
/// [`io::Error`] is returned. Syntax errors have the kind
/// [`io::ErrorKind::InvalidData`] and name the offending line.
///
/// # Examples
///
/// Assume there is a file `path/to/my-formula.txt` with the contents:
/// ```text
/// a | b
/// ~(c => a)
/// x + 2 <= y
/// ```
///
/// ```no_run
/// # use clausal::formulas::Expression;
/// # use clausal::io::read_formula;
/// let formula = read_formula("path/to/my-formula.txt").expect("Something went wrong");
/// let expected: Expression = "(a | b) & ~(c => a) & x + 2 <= y".parse().unwrap();
/// assert_eq!(formula, expected)
/// ```
pub fn read_formula<P: AsRef<Path>>(path: P) -> io::Result<Expression> {
    read_formula_with_format(path, &InfixFormat)
}

/// Like [`read_formula`], but parses every line with `format`.
pub fn read_formula_with_format<P: AsRef<Path>>(path: P, format: &dyn FormulaFormat) -> io::Result<Expression> {
    let reader = BufReader::new(File::open(path)?);
    let mut operands = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let operand = format
            .parse(&line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {e}", number + 1)))?;
        operands.push(operand);
    }
    match operands.len() {
        0 => Ok(Expression::verum()),
        1 => Ok(operands.remove(0)),
        _ => Expression::and(operands).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}
