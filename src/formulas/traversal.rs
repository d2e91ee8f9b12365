use std::convert::Infallible;

use itertools::Itertools;

use super::{Expression, ExpressionKind, Value, ValueType, Variable};

/// Lazy pre-order iterator over the nodes of an expression tree.
///
/// Every call of [`Expression::pre_order`] starts a new traversal.
pub struct PreOrder<'a> {
    pending: Vec<&'a Expression>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().iter().rev());
        Some(node)
    }
}

impl Expression {
    /// Visits this node and its descendants in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { pending: vec![self] }
    }

    /// Folds the tree bottom-up. `visit` is called for every node after all
    /// of its children were visited, with the children's results in order.
    ///
    /// Stops at the first error.
    pub(crate) fn fold<'a, T, E>(
        &'a self,
        mut visit: impl FnMut(&'a Self, Vec<T>) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut pending = vec![(self, false)];
        let mut results: Vec<T> = Vec::new();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let children = results.split_off(results.len() - node.children().len());
                results.push(visit(node, children)?);
            } else {
                pending.push((node, true));
                pending.extend(node.children().iter().rev().map(|child| (child, false)));
            }
        }
        Ok(results.pop().expect("a fold yields exactly one result"))
    }

    pub(crate) fn reduce<'a, T>(&'a self, mut visit: impl FnMut(&'a Self, Vec<T>) -> T) -> T {
        match self.fold(|node, children| Ok::<T, Infallible>(visit(node, children))) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// The distinct variables of this expression in order of their first
    /// occurrence. Literals contribute boolean variables, integer variables
    /// of terms contribute integer variables.
    pub fn variables(&self) -> Vec<Variable> {
        self.pre_order()
            .filter_map(|node| match node.kind() {
                ExpressionKind::Literal { name, .. } => Some(Variable::new(name.as_str(), ValueType::Bool)),
                ExpressionKind::Variable(name) => Some(Variable::new(name.as_str(), ValueType::Int)),
                _ => None,
            })
            .unique()
            .collect()
    }

    /// The distinct names of all variables in order of their first
    /// occurrence.
    pub fn variable_names(&self) -> Vec<&str> {
        self.pre_order()
            .filter_map(|node| match node.kind() {
                ExpressionKind::Literal { name, .. } | ExpressionKind::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .unique()
            .collect()
    }

    /// The distinct names of the boolean variables in order of their first
    /// occurrence.
    pub fn boolean_variable_names(&self) -> Vec<&str> {
        self.pre_order()
            .filter_map(|node| match node.kind() {
                ExpressionKind::Literal { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .unique()
            .collect()
    }

    /// The distinct constant nodes of this expression in pre-order.
    pub fn constants(&self) -> Vec<&Self> {
        self.pre_order()
            .filter(|node| matches!(node.kind(), ExpressionKind::True | ExpressionKind::False | ExpressionKind::Constant(_)))
            .unique_by(|node| node.kind())
            .collect()
    }

    /// The distinct values of all constants in pre-order.
    pub fn constant_values(&self) -> Vec<Value> {
        self.constants()
            .into_iter()
            .filter_map(|node| match node.kind() {
                ExpressionKind::True => Some(Value::Bool(true)),
                ExpressionKind::False => Some(Value::Bool(false)),
                ExpressionKind::Constant(c) => Some(Value::Int(*c)),
                _ => None,
            })
            .collect()
    }

    /// The number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        self.reduce(|_, children: Vec<usize>| 1 + children.into_iter().max().unwrap_or(0))
    }

    /// The number of nodes of this tree.
    pub fn number_of_nodes(&self) -> usize {
        self.pre_order().count()
    }
}
