use std::collections::HashSet;

use log::trace;

use crate::handlers::{FactorizationError, FactorizationHandler, NopHandler};
use crate::log::targets::CONVERSION;

use super::problem::collect_all_problems;
use super::{BooleanClause, BooleanRepresentation, Problems, ValueClause, ValueRepresentation, VariableMap};

/// An ordered list of clauses.
///
/// Whether the list is read as a conjunction of clauses (CNF) or as a
/// disjunction of conjunctive terms (DNF) is up to the operation producing
/// or consuming it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClauseList<C> {
    clauses: Vec<C>,
}

/// A list of indexed clauses.
pub type BooleanClauseList = ClauseList<BooleanClause>;

/// A list of named clauses.
pub type ValueClauseList = ClauseList<ValueClause>;

impl<C> Default for ClauseList<C> {
    fn default() -> Self {
        Self { clauses: Vec::new() }
    }
}

impl<C> ClauseList<C> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The clauses in order.
    pub fn clauses(&self) -> &[C] {
        &self.clauses
    }

    /// The number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if there are no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates over the clauses.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.clauses.iter()
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: C) {
        self.clauses.push(clause);
    }

    /// Returns the clauses.
    pub fn into_vec(self) -> Vec<C> {
        self.clauses
    }
}

impl<C> From<Vec<C>> for ClauseList<C> {
    fn from(clauses: Vec<C>) -> Self {
        Self { clauses }
    }
}

impl<C> FromIterator<C> for ClauseList<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self { clauses: iter.into_iter().collect() }
    }
}

impl<C> IntoIterator for ClauseList<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a ClauseList<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl BooleanClauseList {
    /// Creates a list from clauses given as literal slices. Fails with every
    /// `0` of every clause.
    pub fn of<I, C>(clauses: I) -> Result<Self, Problems>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = i32>,
    {
        collect_all_problems(clauses.into_iter().map(BooleanClause::new)).map(Self::from)
    }

    /// Negates a whole list: a CNF becomes the DNF of its negation and vice
    /// versa. Every clause is negated on its own.
    ///
    /// ```
    /// # use clausal::datastructures::{BooleanClauseList, BooleanRepresentation};
    /// let cnf = BooleanClauseList::of([vec![-2, 1, 3], vec![4]]).unwrap();
    /// let dnf = cnf.negate();
    /// assert_eq!(dnf.clauses()[0].as_slice(), &[-3, -1, 2]);
    /// assert_eq!(dnf.clauses()[1].as_slice(), &[-4]);
    /// ```
    #[must_use]
    pub fn negate(&self) -> Self {
        self.clauses.iter().map(BooleanRepresentation::negate).collect()
    }

    /// Converts a CNF into the equivalent DNF and vice versa.
    ///
    /// Every result clause picks one literal of every input clause.
    /// Repeated literals of a result clause are merged, result clauses
    /// with a literal and its complement are dropped, and only the first
    /// of equal result clauses is kept. The output has up to the product of
    /// all clause lengths many clauses.
    ///
    /// ```
    /// # use clausal::datastructures::BooleanClauseList;
    /// let cnf = BooleanClauseList::of([vec![1, 2], vec![-1, 3]]).unwrap();
    /// let expected = BooleanClauseList::of([vec![1, 3], vec![-1, 2], vec![2, 3]]).unwrap();
    /// assert_eq!(cnf.convert(), expected);
    /// ```
    #[must_use]
    pub fn convert(&self) -> Self {
        self.convert_with_handler(&mut NopHandler).expect("Nop Handler never aborts.")
    }

    /// Like [`BooleanClauseList::convert`], but reports every created
    /// clause to `handler`, which can abort the conversion. This bounds the
    /// conversion with a [`LiteralLimitHandler`](crate::handlers::LiteralLimitHandler).
    pub fn convert_with_handler(&self, handler: &mut dyn FactorizationHandler) -> Result<Self, FactorizationError> {
        handler.started();
        if self.clauses.iter().any(BooleanRepresentation::is_empty) {
            return Ok(Self::new());
        }
        let mut selection = vec![0_usize; self.clauses.len()];
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        loop {
            if handler.aborted() {
                return Err(FactorizationError::Canceled);
            }
            let literals = selection.iter().zip(&self.clauses).map(|(&i, clause)| clause.as_slice()[i]).collect();
            if let Some(clause) = BooleanClause::from_literals_unchecked(literals).clean() {
                if seen.insert(clause.clone()) {
                    handler.created_clause(clause.len())?;
                    result.push(clause);
                }
            }
            if !advance(&mut selection, &self.clauses) {
                break;
            }
        }
        trace!(target: CONVERSION, "Converted {} clauses into {} clauses", self.clauses.len(), result.len());
        Ok(result.into())
    }

    /// Rewrites every clause from the numbering of `from` to the numbering of
    /// `to`. Fails with every literal of every clause which can not be
    /// rewritten; there is no partial result.
    pub fn adapt(&self, from: &VariableMap, to: &VariableMap) -> Result<Self, Problems> {
        collect_all_problems(self.clauses.iter().map(|clause| clause.adapt(from, to))).map(Self::from)
    }

    /// Rewrites every clause into a named one.
    pub fn to_value(&self, map: &VariableMap) -> Result<ValueClauseList, Problems> {
        collect_all_problems(self.clauses.iter().map(|clause| clause.to_value(map))).map(ClauseList::from)
    }

    /// The number of distinct variables.
    pub fn variable_count(&self) -> usize {
        self.clauses.iter().flat_map(|c| c.as_slice().iter().map(|l| l.unsigned_abs())).collect::<HashSet<_>>().len()
    }

    /// The number of literals of all clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(BooleanRepresentation::len).sum()
    }

    /// The largest variable index, `0` for a list without literals.
    pub fn max_index(&self) -> i32 {
        self.clauses.iter().flat_map(|c| c.as_slice().iter().map(|l| l.saturating_abs())).max().unwrap_or(0)
    }
}

/// Moves the multi-digit counter `selection` to the next combination, the
/// last position varying fastest. Returns `false` after the last one.
fn advance(selection: &mut [usize], clauses: &[BooleanClause]) -> bool {
    for (position, clause) in selection.iter_mut().zip(clauses).rev() {
        *position += 1;
        if *position < clause.len() {
            return true;
        }
        *position = 0;
    }
    false
}

impl ValueClauseList {
    /// Rewrites every clause into an indexed one. Fails with every failed
    /// lookup of every clause.
    pub fn to_boolean(&self, map: &VariableMap) -> Result<BooleanClauseList, Problems> {
        collect_all_problems(self.clauses.iter().map(|clause| clause.to_boolean(map))).map(ClauseList::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::{BooleanClauseList, BooleanRepresentation, Problem, ValueRepresentation, VariableMap};
    use crate::handlers::{FactorizationError, LiteralLimitHandler};

    fn list(clauses: &[&[i32]]) -> BooleanClauseList {
        BooleanClauseList::of(clauses.iter().map(|c| c.to_vec())).unwrap()
    }

    #[test]
    fn test_convert_drops_contradictions() {
        assert_eq!(list(&[&[1, 2], &[-1, 3]]).convert(), list(&[&[1, 3], &[-1, 2], &[2, 3]]));
    }

    #[test]
    fn test_convert_merges_literals() {
        assert_eq!(list(&[&[1, 2], &[1, 3]]).convert(), list(&[&[1], &[1, 3], &[1, 2], &[2, 3]]));
        assert_eq!(list(&[&[1], &[1]]).convert(), list(&[&[1]]));
    }

    #[test]
    fn test_convert_edge_cases() {
        assert_eq!(list(&[]).convert(), list(&[&[]]));
        assert_eq!(list(&[&[1, 2], &[]]).convert(), list(&[]));
        assert_eq!(list(&[&[1], &[-1]]).convert(), list(&[]));
        assert_eq!(list(&[&[-1, 2, 3]]).convert(), list(&[&[-1], &[2], &[3]]));
    }

    #[test]
    fn test_convert_with_literal_limit() {
        let wide = list(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(wide.convert().len(), 27);
        let mut handler = LiteralLimitHandler::new(80);
        assert_eq!(wide.convert_with_handler(&mut handler), Err(FactorizationError::LiteralLimitReached { limit: 80 }));
        let mut handler = LiteralLimitHandler::new(81);
        assert_eq!(wide.convert_with_handler(&mut handler).unwrap().literal_count(), 81);
    }

    #[test]
    fn test_negate() {
        let cnf = list(&[&[-2, 1, 3], &[]]);
        assert_eq!(cnf.negate(), list(&[&[-3, -1, 2], &[]]));
        assert_eq!(cnf.negate().negate(), cnf);
    }

    #[test]
    fn test_adapt_fails_for_whole_list() {
        let from = VariableMap::from_names(["a", "b", "c"]);
        let to = VariableMap::from_names(["c", "b"]);
        assert_eq!(list(&[&[2, 3], &[-3]]).adapt(&from, &to).unwrap(), list(&[&[1, 2], &[-1]]));
        let problems = list(&[&[1, 2], &[-1, 3], &[4]]).adapt(&from, &to).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::UnresolvedName { name: "a".into() },
            Problem::UnresolvedName { name: "a".into() },
            Problem::UnresolvedIndex { index: 4 },
        ]);
    }

    #[test]
    fn test_counts() {
        let cnf = list(&[&[-2, 1, 3], &[2, 5]]);
        assert_eq!(cnf.variable_count(), 4);
        assert_eq!(cnf.literal_count(), 5);
        assert_eq!(cnf.max_index(), 5);
    }

    #[test]
    fn test_value_round_trip() {
        let map = VariableMap::from_names(["a", "b", "c"]);
        let cnf = list(&[&[-2, 1], &[3]]);
        let named = cnf.to_value(&map).unwrap();
        assert_eq!(named.clauses()[0].len(), 2);
        assert_eq!(named.to_boolean(&map).unwrap(), cnf);
        assert!(cnf.to_value(&VariableMap::from_names(["a"])).is_err());
        assert_eq!(cnf.clauses()[0].as_slice(), &[-2, 1]);
    }
}
