use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::formulas::{Expression, ExpressionKind};
use crate::io::{FormulaFormat, InfixFormat};

/// Writes a formula in [`InfixFormat`] to a file. If the file already
/// exists, its contents will be overridden.
///
/// If the formula is a conjunction, each of its operands will be written in
/// a separate line, so [`read_formula`](crate::io::read_formula) reads it
/// back.
///
/// If any error occurs when creating or writing the file, a respective
/// [`io::Error`] is returned.
///
/// # Examples
///
/// If you run the following code:
///
/// ```no_run
/// # use clausal::formulas::Expression;
/// # use clausal::io::write_formula;
/// let formula: Expression = "(a | b) & ~(c => a) & e".parse().unwrap();
/// write_formula("path/to/my-formula.txt", &formula).expect("Something went wrong");
/// ```
///
/// the contents of the file `path/to/my-formula.txt` will be as follows:
///
/// ```text
/// a | b
/// ~(c => a)
/// e
/// ```
pub fn write_formula<P: AsRef<Path>>(path: P, formula: &Expression) -> io::Result<()> {
    write_formula_with_format(path, formula, &InfixFormat)
}

/// Like [`write_formula`], but serializes with `format`.
pub fn write_formula_with_format<P: AsRef<Path>>(
    path: P,
    formula: &Expression,
    format: &dyn FormulaFormat,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let lines = if *formula.kind() == ExpressionKind::And { formula.children() } else { std::slice::from_ref(formula) };
    for line in lines {
        writeln!(writer, "{}", format.serialize(line))?;
    }
    writer.flush()
}
