use std::collections::HashSet;

use super::problem::collect_all;
use super::{Problem, Problems, ValueAssignment, ValueClause, ValueRepresentation, ValueSolution, VariableMap};

/// The shape shared by [`BooleanAssignment`], [`BooleanClause`] and
/// [`BooleanSolution`]: a sequence of non-zero literals, where the absolute
/// value is the index of a variable in a [`VariableMap`] and the sign is
/// its truth value.
pub trait BooleanRepresentation: Sized {
    /// The named counterpart of this representation.
    type Value: ValueRepresentation<Boolean = Self>;

    /// The literals of this representation.
    fn as_slice(&self) -> &[i32];

    /// Builds this representation from non-zero literals, establishing its
    /// ordering.
    fn from_literals_unchecked(literals: Vec<i32>) -> Self;

    /// The number of literals.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no literals.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The position of `literal`.
    fn index_of(&self, literal: i32) -> Option<usize> {
        self.as_slice().iter().position(|&l| l == literal)
    }

    /// Returns `true` if `literal` occurs.
    fn contains(&self, literal: i32) -> bool {
        self.index_of(literal).is_some()
    }

    /// Returns `true` if all `literals` occur.
    fn contains_all(&self, literals: &[i32]) -> bool {
        literals.iter().all(|&l| self.contains(l))
    }

    /// Returns `true` if any of `literals` occurs.
    fn contains_any(&self, literals: &[i32]) -> bool {
        literals.iter().any(|&l| self.contains(l))
    }

    /// Returns `true` if the variable `index` occurs with any sign.
    fn contains_variable(&self, index: i32) -> bool {
        self.contains(index) || self.contains(-index)
    }

    /// The number of positive literals.
    fn count_positives(&self) -> usize {
        self.as_slice().iter().filter(|&&l| l > 0).count()
    }

    /// The number of negative literals.
    fn count_negatives(&self) -> usize {
        self.as_slice().iter().filter(|&&l| l < 0).count()
    }

    /// The positive literals in order.
    fn positives(&self) -> Vec<i32> {
        self.as_slice().iter().copied().filter(|&l| l > 0).collect()
    }

    /// The negative literals in order.
    fn negatives(&self) -> Vec<i32> {
        self.as_slice().iter().copied().filter(|&l| l < 0).collect()
    }

    /// Flips the sign of every literal.
    #[must_use]
    fn negate(&self) -> Self {
        Self::from_literals_unchecked(self.as_slice().iter().map(|l| -l).collect())
    }

    /// Removes repeated literals, keeping the first occurrence. Returns
    /// `None` if a variable occurs with both signs.
    fn clean(&self) -> Option<Self> {
        let mut seen = HashSet::with_capacity(self.len());
        let mut literals = Vec::with_capacity(self.len());
        for &literal in self.as_slice() {
            if seen.contains(&-literal) {
                return None;
            }
            if seen.insert(literal) {
                literals.push(literal);
            }
        }
        Some(Self::from_literals_unchecked(literals))
    }

    /// Rewrites the indices from the numbering of `from` to the numbering
    /// of `to` by name. Fails with every literal which can not be rewritten.
    fn adapt(&self, from: &VariableMap, to: &VariableMap) -> Result<Self, Problems> {
        let literals = collect_all(self.as_slice().iter().map(|&literal| {
            let name = from
                .name_of_literal(literal)
                .ok_or(Problem::UnresolvedIndex { index: literal.saturating_abs() })?;
            to.literal_of(name, literal > 0)
        }))?;
        Ok(Self::from_literals_unchecked(literals))
    }

    /// Rewrites this representation into a named one. Fails with every
    /// index without a name in `map`.
    fn to_value(&self, map: &VariableMap) -> Result<Self::Value, Problems> {
        let pairs = collect_all(self.as_slice().iter().map(|&literal| {
            map.name_of_literal(literal)
                .map(|name| (name, crate::formulas::Value::Bool(literal > 0)))
                .ok_or(Problem::UnresolvedIndex { index: literal.saturating_abs() })
        }))?;
        Self::Value::from_pairs(pairs)
    }
}

fn check_literals<I: IntoIterator<Item = i32>>(literals: I) -> Result<Vec<i32>, Problems> {
    collect_all(literals.into_iter().enumerate().map(|(position, literal)| match literal {
        0 => Err(Problem::ZeroIndex { position }),
        i32::MIN => Err(Problem::LiteralOutOfRange { position }),
        _ => Ok(literal),
    }))
}

/// An indexed partial assignment. The literals keep the order they were
/// given in, repetitions are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BooleanAssignment {
    literals: Vec<i32>,
}

impl BooleanAssignment {
    /// Creates an assignment, failing with every position holding `0`
    /// or `i32::MIN`.
    pub fn new<I: IntoIterator<Item = i32>>(literals: I) -> Result<Self, Problems> {
        check_literals(literals).map(|literals| Self { literals })
    }
}

impl BooleanRepresentation for BooleanAssignment {
    type Value = ValueAssignment;

    fn as_slice(&self) -> &[i32] {
        &self.literals
    }

    fn from_literals_unchecked(literals: Vec<i32>) -> Self {
        Self { literals }
    }
}

/// An indexed clause. The literals are sorted in ascending order, so all
/// negative literals precede the positive ones.
///
/// ```
/// # use clausal::datastructures::{BooleanClause, BooleanRepresentation};
/// let clause = BooleanClause::new([3, -2, 1]).unwrap();
/// assert_eq!(clause.as_slice(), &[-2, 1, 3]);
/// assert_eq!(clause.negate().as_slice(), &[-3, -1, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BooleanClause {
    literals: Vec<i32>,
}

impl BooleanClause {
    /// Creates a clause, failing with every position holding `0`
    /// or `i32::MIN`.
    pub fn new<I: IntoIterator<Item = i32>>(literals: I) -> Result<Self, Problems> {
        check_literals(literals).map(Self::from_literals_unchecked)
    }
}

impl BooleanRepresentation for BooleanClause {
    type Value = ValueClause;

    fn as_slice(&self) -> &[i32] {
        &self.literals
    }

    fn from_literals_unchecked(mut literals: Vec<i32>) -> Self {
        literals.sort_unstable();
        Self { literals }
    }

    fn index_of(&self, literal: i32) -> Option<usize> {
        self.literals.binary_search(&literal).ok()
    }

    fn negate(&self) -> Self {
        Self { literals: self.literals.iter().rev().map(|l| -l).collect() }
    }

    fn clean(&self) -> Option<Self> {
        let mut literals = self.literals.clone();
        literals.dedup();
        let clause = Self { literals };
        if clause.literals.iter().any(|&l| l > 0 && clause.contains(-l)) {
            None
        } else {
            Some(clause)
        }
    }
}

/// An indexed solution. The literals are ordered by their variable index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BooleanSolution {
    literals: Vec<i32>,
}

impl BooleanSolution {
    /// Creates a solution, failing with every position holding `0`
    /// or `i32::MIN`.
    pub fn new<I: IntoIterator<Item = i32>>(literals: I) -> Result<Self, Problems> {
        check_literals(literals).map(Self::from_literals_unchecked)
    }

    /// The truth value of the variable `index`.
    pub fn value_of(&self, index: i32) -> Option<bool> {
        let position = self.literals.binary_search_by_key(&index.checked_abs()?, |l| l.abs()).ok()?;
        Some(self.literals[position] > 0)
    }

    /// Uses this solution as an assignment.
    pub fn to_assignment(&self) -> BooleanAssignment {
        BooleanAssignment { literals: self.literals.clone() }
    }
}

impl BooleanRepresentation for BooleanSolution {
    type Value = ValueSolution;

    fn as_slice(&self) -> &[i32] {
        &self.literals
    }

    fn from_literals_unchecked(mut literals: Vec<i32>) -> Self {
        literals.sort_unstable_by_key(|l| (l.abs(), *l));
        Self { literals }
    }

    fn index_of(&self, literal: i32) -> Option<usize> {
        let position = self.literals.binary_search_by_key(&(literal.abs(), literal), |l| (l.abs(), *l)).ok()?;
        Some(position)
    }
}

impl From<BooleanSolution> for BooleanAssignment {
    fn from(solution: BooleanSolution) -> Self {
        Self { literals: solution.literals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::Value;

    #[test]
    fn test_clause_is_sorted() {
        let clause = BooleanClause::new([4, -1, 2, -7, 2]).unwrap();
        assert_eq!(clause.as_slice(), &[-7, -1, 2, 2, 4]);
        assert_eq!(clause.index_of(2).map(|p| clause.as_slice()[p]), Some(2));
        assert!(clause.contains(-7));
        assert!(!clause.contains(7));
        assert!(clause.contains_variable(7));
        assert_eq!(clause.count_negatives(), 2);
        assert_eq!(clause.count_positives(), 3);
    }

    #[test]
    fn test_zero_is_rejected() {
        let problems = BooleanAssignment::new([1, 0, 2, 0]).unwrap_err();
        assert_eq!(problems.as_slice(), &[Problem::ZeroIndex { position: 1 }, Problem::ZeroIndex { position: 3 }]);
        assert!(BooleanClause::new([0]).is_err());
        assert!(BooleanSolution::new([0]).is_err());
    }

    #[test]
    fn test_minimum_literal_is_rejected() {
        let problems = BooleanClause::new([i32::MIN, 1, 0]).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::LiteralOutOfRange { position: 0 },
            Problem::ZeroIndex { position: 2 },
        ]);
        assert_eq!(problems.to_string(), "literal out of range at position 0; index 0 at position 2");
        assert!(BooleanAssignment::new([i32::MIN]).is_err());
        assert!(BooleanSolution::new([2, i32::MIN]).is_err());
        let clause = BooleanClause::new([i32::MIN + 1, i32::MAX]).unwrap();
        assert_eq!(clause.negate().as_slice(), &[-i32::MAX, i32::MAX]);
        assert!(clause.clean().is_none());
    }

    #[test]
    fn test_negate() {
        let clause = BooleanClause::new([-2, 1, 3]).unwrap();
        assert_eq!(clause.negate().as_slice(), &[-3, -1, 2]);
        assert_eq!(clause.negate().negate(), clause);
        let assignment = BooleanAssignment::new([3, -1]).unwrap();
        assert_eq!(assignment.negate().as_slice(), &[-3, 1]);
    }

    #[test]
    fn test_clean() {
        let assignment = BooleanAssignment::new([2, 2, -5]).unwrap();
        assert_eq!(assignment.clean().unwrap().as_slice(), &[2, -5]);
        assert!(BooleanAssignment::new([2, -2]).unwrap().clean().is_none());
        let clause = BooleanClause::new([2, 2, -5]).unwrap();
        assert_eq!(clause.clean().unwrap().as_slice(), &[-5, 2]);
        assert!(BooleanClause::new([2, -5, -2]).unwrap().clean().is_none());
        assert!(BooleanClause::default().clean().unwrap().is_empty());
    }

    #[test]
    fn test_adapt() {
        let from = VariableMap::from_names(["a", "b", "c"]);
        let to = VariableMap::from_names(["c", "a"]);
        let clause = BooleanClause::new([-1, 3]).unwrap();
        assert_eq!(clause.adapt(&from, &to).unwrap().as_slice(), &[-2, 1]);
        let problems = BooleanClause::new([-2, 3, 9]).unwrap().adapt(&from, &to).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::UnresolvedName { name: "b".into() },
            Problem::UnresolvedIndex { index: 9 },
        ]);
    }

    #[test]
    fn test_solution() {
        let solution = BooleanSolution::new([-3, 1, 2]).unwrap();
        assert_eq!(solution.as_slice(), &[1, 2, -3]);
        assert_eq!(solution.value_of(3), Some(false));
        assert_eq!(solution.value_of(-2), Some(true));
        assert_eq!(solution.value_of(4), None);
        assert!(solution.contains(-3));
        assert!(!solution.contains(3));
        let map = VariableMap::from_names(["a", "b", "c"]);
        let named = solution.to_value(&map).unwrap();
        assert_eq!(named.get("c"), Some(Value::Bool(false)));
        assert_eq!(named.variable_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_to_value_with_repeated_literals() {
        let map = VariableMap::from_names(["a", "b"]);
        let assignment = BooleanAssignment::new([2, 2, -1]).unwrap();
        assert_eq!(assignment.to_value(&map).unwrap().len(), 2);
        let conflict = BooleanAssignment::new([2, -2]).unwrap();
        assert_eq!(conflict.to_value(&map).unwrap_err().as_slice(), &[Problem::DuplicateName { name: "b".into() }]);
    }
}
