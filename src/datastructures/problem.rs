use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::formulas::{Value, ValueType};

/// A single reason why a conversion or an evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Problem {
    /// A variable name has no index in the variable map.
    UnresolvedName {
        /// The name of the variable.
        name: String,
    },
    /// A variable index has no name in the variable map.
    UnresolvedIndex {
        /// The absolute value of the literal.
        index: i32,
    },
    /// A boolean representation was built with the index `0`.
    ZeroIndex {
        /// Position of the `0` in the input.
        position: usize,
    },
    /// A boolean representation was built with `i32::MIN`, whose variable
    /// index is out of range.
    LiteralOutOfRange {
        /// Position of the literal in the input.
        position: usize,
    },
    /// A value of a variable is not a truth value, so it has no literal.
    NonBooleanValue {
        /// The name of the variable.
        name: String,
        /// The value which could not be converted.
        value: Value,
    },
    /// A name was assigned two different values or indices.
    DuplicateName {
        /// The name of the variable.
        name: String,
    },
    /// An index was assigned two different names.
    DuplicateIndex {
        /// The index.
        index: i32,
    },
    /// A clause of a normal form contains something other than a literal or
    /// a constant.
    NotClausal {
        /// The operator found in the clause.
        operator: &'static str,
    },
    /// A variable of an evaluated expression has no value.
    UnassignedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A variable of an evaluated expression has a value of the wrong type.
    MistypedVariable {
        /// The name of the variable.
        name: String,
        /// The type the expression requires.
        expected: ValueType,
        /// The type of the assigned value.
        actual: ValueType,
    },
    /// A node could not be evaluated from the values of its children.
    Unevaluable {
        /// Name of the operator of the node.
        operator: &'static str,
    },
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::UnresolvedName { name } => format!("no index for variable {name}"),
            Self::UnresolvedIndex { index } => format!("no variable for index {index}"),
            Self::ZeroIndex { position } => format!("index 0 at position {position}"),
            Self::LiteralOutOfRange { position } => format!("literal out of range at position {position}"),
            Self::NonBooleanValue { name, value } => format!("variable {name} has the non-boolean value {value}"),
            Self::DuplicateName { name } => format!("variable {name} is assigned twice"),
            Self::DuplicateIndex { index } => format!("index {index} is assigned twice"),
            Self::NotClausal { operator } => format!("{operator} can not be part of a clause"),
            Self::UnassignedVariable { name } => format!("variable {name} is unassigned"),
            Self::MistypedVariable { name, expected, actual } => {
                format!("variable {name} must be of type {expected}, but is of type {actual}")
            }
            Self::Unevaluable { operator } => format!("{operator} can not be evaluated"),
        };
        f.write_str(&msg)
    }
}

impl std::error::Error for Problem {}

/// All problems of a failed conversion or evaluation, in the order they were
/// found. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Problems(Vec<Problem>);

impl Problems {
    /// Collects the given problems, which must not be empty.
    pub(crate) fn new(problems: Vec<Problem>) -> Self {
        assert!(!problems.is_empty(), "a failure needs at least one problem");
        Self(problems)
    }

    /// The problems in the order they were found.
    pub fn as_slice(&self) -> &[Problem] {
        &self.0
    }

    /// The number of problems.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the problems.
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.0.iter()
    }

    /// Returns the problems.
    pub fn into_vec(self) -> Vec<Problem> {
        self.0
    }
}

impl From<Problem> for Problems {
    fn from(problem: Problem) -> Self {
        Self(vec![problem])
    }
}

impl IntoIterator for Problems {
    type Item = Problem;
    type IntoIter = std::vec::IntoIter<Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Problems {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Problems {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.iter().join("; "))
    }
}

impl std::error::Error for Problems {}

/// Collects the successful values, or all problems if there are any.
pub(crate) fn collect_all<T, I>(results: I) -> Result<Vec<T>, Problems>
where
    I: IntoIterator<Item = Result<T, Problem>>,
{
    let mut values = Vec::new();
    let mut problems = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(problem) => problems.push(problem),
        }
    }
    if problems.is_empty() {
        Ok(values)
    } else {
        Err(Problems(problems))
    }
}

/// Like [`collect_all`] for results which carry several problems each.
pub(crate) fn collect_all_problems<T, I>(results: I) -> Result<Vec<T>, Problems>
where
    I: IntoIterator<Item = Result<T, Problems>>,
{
    let mut values = Vec::new();
    let mut problems = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(failed) => problems.extend(failed),
        }
    }
    if problems.is_empty() {
        Ok(values)
    } else {
        Err(Problems(problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_all_keeps_every_problem() {
        let results = vec![
            Ok(1),
            Err(Problem::UnresolvedName { name: "a".into() }),
            Ok(2),
            Err(Problem::UnresolvedIndex { index: 7 }),
        ];
        let problems = collect_all(results).unwrap_err();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems.to_string(), "no index for variable a; no variable for index 7");
    }

    #[test]
    fn test_problems_are_never_empty() {
        let single = Problems::from(Problem::LiteralOutOfRange { position: 2 });
        assert!(!single.is_empty());
        assert_eq!(single.to_string(), "literal out of range at position 2");
        let none: Vec<Result<i32, Problem>> = Vec::new();
        assert_eq!(collect_all(none).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_collect_all_success() {
        let results: Vec<Result<i32, Problem>> = vec![Ok(1), Ok(2)];
        assert_eq!(collect_all(results).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_collect_all_problems_flattens() {
        let results: Vec<Result<i32, Problems>> = vec![
            Err(Problems::new(vec![Problem::ZeroIndex { position: 0 }, Problem::ZeroIndex { position: 3 }])),
            Ok(4),
            Err(Problem::DuplicateName { name: "x".into() }.into()),
        ];
        let problems = collect_all_problems(results).unwrap_err();
        assert_eq!(problems.into_vec(), vec![
            Problem::ZeroIndex { position: 0 },
            Problem::ZeroIndex { position: 3 },
            Problem::DuplicateName { name: "x".into() },
        ]);
    }
}
