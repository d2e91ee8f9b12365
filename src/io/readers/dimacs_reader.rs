use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::datastructures::{BooleanClause, BooleanClauseList, BooleanRepresentation, VariableMap};
use crate::log::targets::CONVERSION;

/// A reader for DIMACS CNF files.
///
/// Every clause is in its own line and ends with `0`. Lines starting with
/// `c` are comments and the problem line starting with `p` is skipped, so
/// the clauses are read independent of the numbers given there. A comment
/// of the form `c <index> <name>`, as written by
/// [`write_dimacs`](crate::io::write_dimacs), names a variable. Every other
/// index occurring in the clauses is named `v<index>`.
///
/// The result is the list of clauses together with the variable map naming
/// their indices. If the file cannot be read, a line does not end with `0`,
/// a literal is no number or `-2147483648`, or the names do not form a bijection, a
/// respective [`io::Error`] is returned.
///
/// # Example
///
/// Assume there is the following DIMACS CNF file at `path/to/formula.cnf`
/// with the contents:
///
/// ```text
/// c Some description
/// c 1 door_open
/// p cnf 3 3
/// -3 1 0
/// 2 -1 0
/// -3 0
/// ```
///
/// ```no_run
/// # use clausal::datastructures::BooleanClauseList;
/// # use clausal::io::read_dimacs;
/// let (clauses, map) = read_dimacs("path/to/formula.cnf").expect("Could not read the file");
/// assert_eq!(clauses, BooleanClauseList::of([vec![-3, 1], vec![2, -1], vec![-3]]).unwrap());
/// assert_eq!(map.name_of(1), Some("door_open"));
/// assert_eq!(map.name_of(3), Some("v3"));
/// ```
pub fn read_dimacs<P: AsRef<Path>>(path: P) -> io::Result<(BooleanClauseList, VariableMap)> {
    let separator = Regex::new(r"[ \t]+").expect("valid separator pattern");
    let reader = BufReader::new(File::open(path)?);
    let mut clauses = BooleanClauseList::new();
    let mut map = VariableMap::new();
    for line in reader.lines() {
        let line = line?;
        let content = line.trim();
        if content.starts_with('c') {
            if let Some((index, name)) = variable_comment(&separator, content) {
                map.insert(name, index).map_err(invalid_data)?;
            }
        } else if !content.starts_with('p') && !content.is_empty() {
            clauses.push(read_clause(&separator, content)?);
        }
    }
    let occurring: BTreeSet<i32> = clauses.iter().flat_map(|c| c.as_slice().iter().map(|l| l.abs())).collect();
    for index in occurring {
        if !map.contains_index(index) {
            map.insert(&format!("v{index}"), index).map_err(invalid_data)?;
        }
    }
    debug!(target: CONVERSION, "Read {} DIMACS clauses over {} variables", clauses.len(), map.len());
    Ok((clauses, map))
}

/// Index and name of a `c <index> <name>` comment.
fn variable_comment<'a>(separator: &Regex, comment: &'a str) -> Option<(i32, &'a str)> {
    let mut parts = separator.splitn(comment, 3);
    if parts.next()? != "c" {
        return None;
    }
    let index = parts.next()?.parse::<i32>().ok().filter(|&i| i > 0)?;
    let name = parts.next()?.trim();
    (!name.is_empty()).then_some((index, name))
}

fn read_clause(separator: &Regex, line: &str) -> io::Result<BooleanClause> {
    let split: Vec<&str> = separator.split(line).collect();
    let Some((&"0", literals)) = split.split_last() else {
        return Err(invalid_data(format!("line {line} did not end with 0")));
    };
    let literals = literals
        .iter()
        .map(|literal| literal.parse::<i32>().map_err(|e| invalid_data(format!("invalid literal {literal}: {e}"))))
        .collect::<io::Result<Vec<_>>>()?;
    BooleanClause::new(literals).map_err(invalid_data)
}

fn invalid_data<E>(error: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}
