use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::datastructures::{BooleanClauseList, BooleanRepresentation, VariableMap};

/// Writes a clause list as DIMACS CNF file. If the file already exists, its
/// contents will be overridden.
///
/// Every name of `map` is written as a `c <index> <name>` comment, followed
/// by the problem line and one line per clause, so
/// [`read_dimacs`](crate::io::read_dimacs) restores both the clauses and
/// the names.
///
/// ```no_run
/// # use clausal::datastructures::{BooleanClauseList, VariableMap};
/// # use clausal::io::write_dimacs;
/// let map = VariableMap::from_names(["a", "b"]);
/// let clauses = BooleanClauseList::of([vec![1, -2], vec![2]]).unwrap();
/// write_dimacs("path/to/formula.cnf", &clauses, &map).expect("Something went wrong");
/// ```
///
/// writes
///
/// ```text
/// c 1 a
/// c 2 b
/// p cnf 2 2
/// -2 1 0
/// 2 0
/// ```
pub fn write_dimacs<P: AsRef<Path>>(path: P, clauses: &BooleanClauseList, map: &VariableMap) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for index in map.indices() {
        if let Some(name) = map.name_of(index) {
            writeln!(writer, "c {index} {name}")?;
        }
    }
    let variables = clauses.max_index().max(map.max_index());
    writeln!(writer, "p cnf {variables} {}", clauses.len())?;
    for clause in clauses {
        let literals = clause.as_slice().iter().map(ToString::to_string).chain(["0".to_owned()]);
        writeln!(writer, "{}", literals.format(" "))?;
    }
    writer.flush()
}
