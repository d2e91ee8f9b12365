use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::formulas::Expression;
use crate::log::targets::VARIABLE_MAP;

use super::{BooleanRepresentation, Problem, Problems, ValueRepresentation};

/// A bijection between variable names and positive integer indices.
///
/// Indices start at `1` and are handed out in increasing order. An index
/// freed by [`VariableMap::remove`] is never handed out again by the same
/// map, so the indices of a map are unique but may have gaps.
///
/// All boolean representations derived from the same context must use the
/// same map to be comparable. The map itself has no interior mutability;
/// growing a map shared between threads has to be synchronized by the
/// caller.
///
/// ```
/// # use clausal::datastructures::VariableMap;
/// let mut map = VariableMap::from_names(["a", "b"]);
/// assert_eq!(map.index_of("b"), Some(2));
/// assert_eq!(map.get_or_create_index("c"), 3);
/// map.remove("c");
/// assert_eq!(map.get_or_create_index("d"), 4);
/// assert_eq!(map.name_of(3), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableMap {
    indices: HashMap<String, i32>,
    names: BTreeMap<i32, String>,
    max_index: i32,
}

impl VariableMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map of the boolean variables of `expression`, indexed in the
    /// order of their first occurrence.
    pub fn of(expression: &Expression) -> Self {
        let map = Self::from_names(expression.boolean_variable_names());
        debug!(target: VARIABLE_MAP, "Initialized variable map with {} variables", map.len());
        map
    }

    /// Creates a map which indexes the given names in order. Repeated names
    /// keep their first index.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for name in names {
            map.get_or_create_index(name.as_ref());
        }
        map
    }

    /// Creates a map of all variables of a value representation.
    pub fn of_representation<R: ValueRepresentation>(representation: &R) -> Self {
        Self::from_names(representation.variable_names())
    }

    /// The index of `name`.
    pub fn index_of(&self, name: &str) -> Option<i32> {
        self.indices.get(name).copied()
    }

    /// The name of `index`.
    pub fn name_of(&self, index: i32) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    /// The index of `name`, creating a new one if `name` is unknown.
    ///
    /// # Panics
    ///
    /// Panics if the largest index of the map is already `i32::MAX`.
    pub fn get_or_create_index(&mut self, name: &str) -> i32 {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.max_index.checked_add(1).expect("variable indices exhausted");
        self.max_index = index;
        self.names.insert(index, name.to_owned());
        self.indices.insert(name.to_owned(), index);
        index
    }

    /// Maps `name` to the given `index`, which may leave gaps below it.
    ///
    /// Fails if `index` is not positive, if `name` already has another
    /// index, or if `index` already has another name. Inserting an existing
    /// mapping again succeeds.
    pub fn insert(&mut self, name: &str, index: i32) -> Result<(), Problem> {
        if index <= 0 {
            return Err(Problem::UnresolvedIndex { index });
        }
        match (self.index_of(name), self.name_of(index)) {
            (Some(existing), _) if existing == index => return Ok(()),
            (Some(_), _) => return Err(Problem::DuplicateName { name: name.to_owned() }),
            (None, Some(_)) => return Err(Problem::DuplicateIndex { index }),
            (None, None) => {}
        }
        self.max_index = self.max_index.max(index);
        self.names.insert(index, name.to_owned());
        self.indices.insert(name.to_owned(), index);
        Ok(())
    }

    /// Removes `name` from the map and returns its former index.
    pub fn remove(&mut self, name: &str) -> Option<i32> {
        let index = self.indices.remove(name)?;
        self.names.remove(&index);
        Some(index)
    }

    /// The number of names in the map.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the map has no names.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The largest index ever handed out by this map, `0` if none was.
    pub fn max_index(&self) -> i32 {
        self.max_index
    }

    /// Returns `true` if `name` has an index.
    pub fn contains_name(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns `true` if `index` has a name.
    pub fn contains_index(&self, index: i32) -> bool {
        self.name_of(index).is_some()
    }

    /// All names, ordered by their index.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    /// All indices in increasing order.
    pub fn indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.names.keys().copied()
    }

    /// The literal of `name` with the given sign.
    pub fn literal_of(&self, name: &str, positive: bool) -> Result<i32, Problem> {
        let index = self.index_of(name).ok_or_else(|| Problem::UnresolvedName { name: name.to_owned() })?;
        Ok(if positive { index } else { -index })
    }

    /// The name of the variable of `literal`, regardless of its sign.
    pub fn name_of_literal(&self, literal: i32) -> Option<&str> {
        self.name_of(literal.checked_abs()?)
    }

    /// Rewrites a named representation into an indexed one.
    ///
    /// Fails with every name which has no index and every value which is
    /// not boolean.
    pub fn to_boolean<R: ValueRepresentation>(&self, representation: &R) -> Result<R::Boolean, Problems> {
        representation.to_boolean(self)
    }

    /// Like [`VariableMap::to_boolean`], but creates indices for unknown
    /// names instead of failing.
    pub fn to_boolean_extending<R: ValueRepresentation>(&mut self, representation: &R) -> Result<R::Boolean, Problems> {
        for name in representation.variable_names() {
            self.get_or_create_index(name);
        }
        representation.to_boolean(self)
    }

    /// Rewrites an indexed representation into a named one.
    ///
    /// Fails with every index which has no name.
    pub fn to_value<R: BooleanRepresentation>(&self, representation: &R) -> Result<R::Value, Problems> {
        representation.to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::{BooleanClause, BooleanRepresentation, Problem, ValueClause, ValueRepresentation};
    use crate::formulas::Value;
    use crate::util::test_util::parse;

    use super::VariableMap;

    #[test]
    fn test_of_formula() {
        let map = VariableMap::of(&parse("(c | ~a) & b & (a => c) & x <= 2"));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(map.index_of("c"), Some(1));
        assert_eq!(map.index_of("x"), None);
        assert_eq!(map.name_of(3), Some("b"));
        assert_eq!(map.name_of(0), None);
        assert_eq!(map.name_of(-1), None);
        assert_eq!(map.name_of(4), None);
    }

    #[test]
    fn test_indices_are_never_reused() {
        let mut map = VariableMap::from_names(["a", "b", "c"]);
        assert_eq!(map.remove("b"), Some(2));
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.max_index(), 3);
        assert_eq!(map.get_or_create_index("b"), 4);
        assert_eq!(map.get_or_create_index("a"), 1);
        assert_eq!(map.indices().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert!(!map.contains_index(2));
        assert!(map.contains_name("b"));
    }

    #[test]
    fn test_insert() {
        let mut map = VariableMap::from_names(["a"]);
        assert_eq!(map.insert("c", 3), Ok(()));
        assert_eq!(map.insert("c", 3), Ok(()));
        assert_eq!(map.name_of(2), None);
        assert_eq!(map.max_index(), 3);
        assert_eq!(map.get_or_create_index("d"), 4);
        assert_eq!(map.insert("a", 2), Err(Problem::DuplicateName { name: "a".into() }));
        assert_eq!(map.insert("e", 4), Err(Problem::DuplicateIndex { index: 4 }));
        assert_eq!(map.insert("e", 0), Err(Problem::UnresolvedIndex { index: 0 }));
        assert_eq!(map.insert("b", 2), Ok(()));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_insert_sparse_index() {
        let mut map = VariableMap::new();
        assert_eq!(map.insert("far", i32::MAX), Ok(()));
        assert_eq!(map.insert("near", 2), Ok(()));
        assert_eq!(map.len(), 2);
        assert_eq!(map.max_index(), i32::MAX);
        assert_eq!(map.indices().collect::<Vec<_>>(), vec![2, i32::MAX]);
        assert_eq!(map.name_of(i32::MAX), Some("far"));
        assert_eq!(map.insert("x", i32::MIN), Err(Problem::UnresolvedIndex { index: i32::MIN }));
    }

    #[test]
    fn test_literals() {
        let map = VariableMap::from_names(["a", "b"]);
        assert_eq!(map.literal_of("b", false), Ok(-2));
        assert_eq!(map.literal_of("c", true), Err(Problem::UnresolvedName { name: "c".into() }));
        assert_eq!(map.name_of_literal(-1), Some("a"));
        assert_eq!(map.name_of_literal(i32::MIN), None);
    }

    #[test]
    fn test_conversions() {
        let mut map = VariableMap::from_names(["a"]);
        let clause = ValueClause::from_pairs([("b", Value::Bool(false)), ("a", Value::Bool(true))]).unwrap();
        let problems = map.to_boolean(&clause).unwrap_err();
        assert_eq!(problems.as_slice(), &[Problem::UnresolvedName { name: "b".into() }]);
        let boolean = map.to_boolean_extending(&clause).unwrap();
        assert_eq!(boolean.as_slice(), &[-2, 1]);
        assert_eq!(map.to_value(&boolean).unwrap(), clause);
        assert_eq!(
            map.to_value(&BooleanClause::new([1, 5]).unwrap()).unwrap_err().as_slice(),
            &[Problem::UnresolvedIndex { index: 5 }]
        );
        assert_eq!(VariableMap::of_representation(&clause).names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
