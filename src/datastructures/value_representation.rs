use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

use crate::formulas::Value;

use super::problem::collect_all;
use super::{BooleanAssignment, BooleanClause, BooleanRepresentation, BooleanSolution, Problem, Problems, VariableMap};

/// Names mapped to values, in insertion order, with unique names.
///
/// Equality and hashing do not depend on the insertion order.
#[derive(Clone, Debug, Default)]
pub struct NamedValues {
    entries: Vec<(String, Value)>,
    positions: HashMap<String, usize>,
}

impl NamedValues {
    /// The value of `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.positions.get(name).map(|&p| self.entries[p].1)
    }

    /// Sets the value of `name` and returns the previous one. A replaced
    /// value keeps the position of the name.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) -> Option<Value> {
        let name = name.into();
        if let Some(&p) = self.positions.get(&name) {
            return Some(std::mem::replace(&mut self.entries[p].1, value));
        }
        self.positions.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Adds `name` unless it has a value already. Assigning the same value
    /// again is accepted.
    fn insert_unique(&mut self, name: &str, value: Value) -> Result<(), Problem> {
        match self.get(name) {
            None => {
                self.insert(name, value);
                Ok(())
            }
            Some(old) if old == value => Ok(()),
            Some(_) => Err(Problem::DuplicateName { name: name.to_owned() }),
        }
    }

    /// Removes `name` and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.positions.remove(name)?;
        let (_, value) = self.entries.remove(position);
        for p in self.positions.values_mut() {
            if *p > position {
                *p -= 1;
            }
        }
        Some(value)
    }

    /// The number of names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The names and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl PartialEq for NamedValues {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for NamedValues {}

impl Hash for NamedValues {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for entry in self.entries.iter().sorted() {
            entry.hash(state);
        }
    }
}

/// The shape shared by [`ValueAssignment`], [`ValueClause`] and
/// [`ValueSolution`]: an insertion ordered mapping from unique names to
/// values of any type.
pub trait ValueRepresentation: Sized {
    /// The indexed counterpart of this representation.
    type Boolean: BooleanRepresentation<Value = Self>;

    /// The names and values of this representation.
    fn named(&self) -> &NamedValues;

    /// The names and values of this representation.
    fn named_mut(&mut self) -> &mut NamedValues;

    /// Wraps names and values.
    fn from_named(values: NamedValues) -> Self;

    /// Builds a representation from pairs. Fails with every name which is
    /// assigned two different values.
    fn from_pairs<I, S>(pairs: I) -> Result<Self, Problems>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut values = NamedValues::default();
        let results = pairs.into_iter().map(|(name, value)| values.insert_unique(name.as_ref(), value)).collect_vec();
        collect_all(results)?;
        Ok(Self::from_named(values))
    }

    /// The value of `name`.
    fn get(&self, name: &str) -> Option<Value> {
        self.named().get(name)
    }

    /// Sets the value of `name` and returns the previous one.
    fn insert<S: Into<String>>(&mut self, name: S, value: Value) -> Option<Value> {
        self.named_mut().insert(name, value)
    }

    /// Removes `name` and returns its value.
    fn remove(&mut self, name: &str) -> Option<Value> {
        self.named_mut().remove(name)
    }

    /// The number of variables.
    fn len(&self) -> usize {
        self.named().len()
    }

    /// Returns `true` if there are no variables.
    fn is_empty(&self) -> bool {
        self.named().is_empty()
    }

    /// The names in insertion order.
    fn variable_names(&self) -> Vec<&str> {
        self.named().iter().map(|(name, _)| name).collect()
    }

    /// Rewrites this representation into an indexed one.
    ///
    /// Every boolean value becomes a literal of the name's index, positive if
    /// the value is `true`. Fails with every name missing in `map` and every
    /// value which is not boolean.
    fn to_boolean(&self, map: &VariableMap) -> Result<Self::Boolean, Problems> {
        let literals = collect_all(self.named().iter().map(|(name, value)| match value {
            Value::Bool(positive) => map.literal_of(name, positive),
            Value::Int(_) => Err(Problem::NonBooleanValue { name: name.to_owned(), value }),
        }))?;
        Ok(Self::Boolean::from_literals_unchecked(literals))
    }
}

/// A named partial assignment of values to variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueAssignment(NamedValues);

/// A named clause: each variable occurs with the value it takes in the
/// clause.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueClause(NamedValues);

/// A named solution of a problem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueSolution(NamedValues);

impl ValueRepresentation for ValueAssignment {
    type Boolean = BooleanAssignment;

    fn named(&self) -> &NamedValues {
        &self.0
    }

    fn named_mut(&mut self) -> &mut NamedValues {
        &mut self.0
    }

    fn from_named(values: NamedValues) -> Self {
        Self(values)
    }
}

impl ValueRepresentation for ValueClause {
    type Boolean = BooleanClause;

    fn named(&self) -> &NamedValues {
        &self.0
    }

    fn named_mut(&mut self) -> &mut NamedValues {
        &mut self.0
    }

    fn from_named(values: NamedValues) -> Self {
        Self(values)
    }
}

impl ValueRepresentation for ValueSolution {
    type Boolean = BooleanSolution;

    fn named(&self) -> &NamedValues {
        &self.0
    }

    fn named_mut(&mut self) -> &mut NamedValues {
        &mut self.0
    }

    fn from_named(values: NamedValues) -> Self {
        Self(values)
    }
}

impl ValueAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The values of this assignment as a clause.
    pub fn to_clause(&self) -> ValueClause {
        ValueClause(self.0.clone())
    }
}

impl ValueClause {
    /// Creates an empty clause.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueSolution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses this solution as an assignment, e.g. to evaluate a formula.
    pub fn to_assignment(&self) -> ValueAssignment {
        ValueAssignment(self.0.clone())
    }
}
