use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Comparison, Value, ValueType};

/// The operator of an [`Expression`] node together with its node-specific
/// configuration.
///
/// Formulas evaluate to [`ValueType::Bool`], terms evaluate to
/// [`ValueType::Int`].
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum ExpressionKind {
    /// The constant `true`.
    True,
    /// The constant `false`.
    False,
    /// A boolean variable or its negation.
    Literal {
        /// Name of the variable.
        name: String,
        /// `false` if the variable is negated.
        positive: bool,
    },
    /// Negation of one formula.
    Not,
    /// Conjunction of any number of formulas.
    And,
    /// Disjunction of any number of formulas.
    Or,
    /// Implication between two formulas.
    Implies,
    /// Equivalence of two formulas.
    BiImplies,
    /// A comparison of two integer terms.
    Predicate(Comparison),
    /// An integer variable.
    Variable(String),
    /// An integer constant.
    Constant(i64),
    /// The sum of one or more integer terms.
    Add,
    /// The product of one or more integer terms.
    Multiply,
}

/// The number of children a node accepts.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum Arity {
    /// Exactly this many children.
    Exactly(usize),
    /// At least this many children.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` children are accepted.
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// The kind of expression a node accepts as its children.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum ChildType {
    /// Formulas, i.e. boolean-valued expressions.
    Formula,
    /// Integer-valued terms.
    Term,
}

impl Display for ChildType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Formula => "formula",
            Self::Term => "term",
        })
    }
}

/// Errors raised when an expression node is built from children it does
/// not accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionError {
    /// The node got a number of children it does not accept.
    WrongArity {
        /// Name of the operator.
        operator: &'static str,
        /// Accepted number of children.
        expected: Arity,
        /// Given number of children.
        actual: usize,
    },
    /// A child is of the wrong kind.
    WrongChildType {
        /// Name of the operator.
        operator: &'static str,
        /// Position of the offending child.
        position: usize,
        /// Accepted kind of children.
        expected: ChildType,
    },
}

impl Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::WrongArity { operator, expected, actual } => {
                format!("{operator} expects {expected} children, but got {actual}")
            }
            Self::WrongChildType { operator, position, expected } => {
                format!("{operator} expects a {expected} at position {position}")
            }
        };
        f.write_str(&msg)
    }
}

impl std::error::Error for ExpressionError {}

impl ExpressionKind {
    /// The operator name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Literal { .. } => "Literal",
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::Implies => "Implies",
            Self::BiImplies => "BiImplies",
            Self::Predicate(cmp) => cmp.name(),
            Self::Variable(_) => "Variable",
            Self::Constant(_) => "Constant",
            Self::Add => "Add",
            Self::Multiply => "Multiply",
        }
    }

    /// Returns `true` if nodes of this kind are formulas.
    pub const fn is_formula(&self) -> bool {
        !self.is_term()
    }

    /// Returns `true` if nodes of this kind are terms.
    pub const fn is_term(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Constant(_) | Self::Add | Self::Multiply)
    }

    /// The type nodes of this kind evaluate to.
    pub const fn value_type(&self) -> ValueType {
        if self.is_term() {
            ValueType::Int
        } else {
            ValueType::Bool
        }
    }

    /// The number of children nodes of this kind accept.
    pub const fn arity(&self) -> Arity {
        match self {
            Self::True | Self::False | Self::Literal { .. } | Self::Variable(_) | Self::Constant(_) => {
                Arity::Exactly(0)
            }
            Self::Not => Arity::Exactly(1),
            Self::Implies | Self::BiImplies | Self::Predicate(_) => Arity::Exactly(2),
            Self::And | Self::Or => Arity::AtLeast(0),
            Self::Add | Self::Multiply => Arity::AtLeast(1),
        }
    }

    /// The kind of children nodes of this kind accept, `None` for leaves.
    pub const fn child_type(&self) -> Option<ChildType> {
        match self {
            Self::True | Self::False | Self::Literal { .. } | Self::Variable(_) | Self::Constant(_) => None,
            Self::Not | Self::And | Self::Or | Self::Implies | Self::BiImplies => Some(ChildType::Formula),
            Self::Predicate(_) | Self::Add | Self::Multiply => Some(ChildType::Term),
        }
    }

    /// Checks the children-type constraint of this kind.
    pub fn validate(&self, children: &[Expression]) -> Result<(), ExpressionError> {
        let arity = self.arity();
        if !arity.admits(children.len()) {
            return Err(ExpressionError::WrongArity { operator: self.name(), expected: arity, actual: children.len() });
        }
        if let Some(expected) = self.child_type() {
            let accepted = |child: &Expression| match expected {
                ChildType::Formula => child.is_formula(),
                ChildType::Term => child.is_term(),
            };
            if let Some(position) = children.iter().position(|c| !accepted(c)) {
                return Err(ExpressionError::WrongChildType { operator: self.name(), position, expected });
            }
        }
        Ok(())
    }

    /// Evaluates a node of this kind from the already evaluated values of
    /// its children.
    ///
    /// Returns `None` for variables and literals, which can only be
    /// evaluated against an assignment, and if `values` do not fit this kind.
    pub fn apply(&self, values: &[Value]) -> Option<Value> {
        if !self.arity().admits(values.len()) {
            return None;
        }
        let mut bools = values.iter().map(|v| v.as_bool());
        let mut ints = values.iter().map(|v| v.as_int());
        match self {
            Self::True => Some(Value::Bool(true)),
            Self::False => Some(Value::Bool(false)),
            Self::Constant(c) => Some(Value::Int(*c)),
            Self::Literal { .. } | Self::Variable(_) => None,
            Self::Not => Some(Value::Bool(!bools.next()??)),
            Self::And => bools.try_fold(true, |acc, b| Some(acc & b?)).map(Value::Bool),
            Self::Or => bools.try_fold(false, |acc, b| Some(acc | b?)).map(Value::Bool),
            Self::Implies => {
                let (a, b) = (bools.next()??, bools.next()??);
                Some(Value::Bool(!a || b))
            }
            Self::BiImplies => {
                let (a, b) = (bools.next()??, bools.next()??);
                Some(Value::Bool(a == b))
            }
            Self::Predicate(cmp) => {
                let (a, b) = (ints.next()??, ints.next()??);
                Some(Value::Bool(cmp.compare(a, b)))
            }
            Self::Add => ints.try_fold(0_i64, |acc, i| Some(acc.wrapping_add(i?))).map(Value::Int),
            Self::Multiply => ints.try_fold(1_i64, |acc, i| Some(acc.wrapping_mul(i?))).map(Value::Int),
        }
    }
}

/// A node of an expression tree together with all of its descendants.
///
/// Expressions are built bottom-up by the checked constructors, which reject
/// children violating the constraint of the node's [`ExpressionKind`], so
/// every `Expression` is well-formed. Trees are never changed in place:
/// transformations build new trees.
///
/// All operations on whole trees (cloning, comparing, hashing, printing and
/// dropping) work with explicit stacks, so arbitrarily deep trees are fine.
///
/// ```
/// # use clausal::formulas::Expression;
/// let a = Expression::variable("a");
/// let b = Expression::literal("b", false);
/// let imp = Expression::implies(a.clone(), b).unwrap();
/// assert_eq!(imp.to_string(), "a => ~b");
/// assert_eq!(imp.children()[0], a);
/// assert!(Expression::not(Expression::int(1)).is_err());
/// ```
pub struct Expression {
    kind: ExpressionKind,
    children: Vec<Expression>,
}

impl Expression {
    /// Creates a node of the given kind, checking its children.
    pub fn new(kind: ExpressionKind, children: Vec<Self>) -> Result<Self, ExpressionError> {
        kind.validate(&children)?;
        Ok(Self::new_unchecked(kind, children))
    }

    pub(crate) const fn new_unchecked(kind: ExpressionKind, children: Vec<Self>) -> Self {
        Self { kind, children }
    }

    /// The constant `true`.
    pub const fn verum() -> Self {
        Self::new_unchecked(ExpressionKind::True, Vec::new())
    }

    /// The constant `false`.
    pub const fn falsum() -> Self {
        Self::new_unchecked(ExpressionKind::False, Vec::new())
    }

    /// The boolean constant for `value`.
    pub const fn constant(value: bool) -> Self {
        if value {
            Self::verum()
        } else {
            Self::falsum()
        }
    }

    /// A literal of the boolean variable `name`.
    pub fn literal<S: Into<String>>(name: S, positive: bool) -> Self {
        Self::new_unchecked(ExpressionKind::Literal { name: name.into(), positive }, Vec::new())
    }

    /// The positive literal of the boolean variable `name`.
    pub fn variable<S: Into<String>>(name: S) -> Self {
        Self::literal(name, true)
    }

    /// The integer variable `name`.
    pub fn int_variable<S: Into<String>>(name: S) -> Self {
        Self::new_unchecked(ExpressionKind::Variable(name.into()), Vec::new())
    }

    /// The integer constant `value`.
    pub const fn int(value: i64) -> Self {
        Self::new_unchecked(ExpressionKind::Constant(value), Vec::new())
    }

    /// Negation of a formula.
    pub fn not(operand: Self) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Not, vec![operand])
    }

    /// Conjunction of formulas.
    pub fn and<I: IntoIterator<Item = Self>>(operands: I) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::And, operands.into_iter().collect())
    }

    /// Disjunction of formulas.
    pub fn or<I: IntoIterator<Item = Self>>(operands: I) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Or, operands.into_iter().collect())
    }

    /// Implication `left => right`.
    pub fn implies(left: Self, right: Self) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Implies, vec![left, right])
    }

    /// Equivalence `left <=> right`.
    pub fn bi_implies(left: Self, right: Self) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::BiImplies, vec![left, right])
    }

    /// Comparison of two integer terms.
    pub fn predicate(comparison: Comparison, left: Self, right: Self) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Predicate(comparison), vec![left, right])
    }

    /// Sum of integer terms.
    pub fn add<I: IntoIterator<Item = Self>>(operands: I) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Add, operands.into_iter().collect())
    }

    /// Product of integer terms.
    pub fn multiply<I: IntoIterator<Item = Self>>(operands: I) -> Result<Self, ExpressionError> {
        Self::new(ExpressionKind::Multiply, operands.into_iter().collect())
    }

    /// The operator and configuration of this node.
    pub const fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    /// The operator name of this node.
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The type this node evaluates to.
    pub const fn value_type(&self) -> ValueType {
        self.kind.value_type()
    }

    /// The ordered children of this node.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns `true` if this expression is a formula.
    pub const fn is_formula(&self) -> bool {
        self.kind.is_formula()
    }

    /// Returns `true` if this expression is a term.
    pub const fn is_term(&self) -> bool {
        self.kind.is_term()
    }

    /// Returns `true` if this is a boolean constant.
    pub const fn is_constant(&self) -> bool {
        matches!(self.kind, ExpressionKind::True | ExpressionKind::False)
    }

    /// Returns `true` if this is a literal.
    pub const fn is_literal(&self) -> bool {
        matches!(self.kind, ExpressionKind::Literal { .. })
    }

    /// Returns `true` if this formula has no formula children, i.e. it is a
    /// constant, a literal or a predicate.
    pub const fn is_atom(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::True | ExpressionKind::False | ExpressionKind::Literal { .. } | ExpressionKind::Predicate(_)
        )
    }

    /// Builds a node with the same kind and configuration as this one, but
    /// with the given children.
    pub fn with_children(&self, children: Vec<Self>) -> Result<Self, ExpressionError> {
        Self::new(self.kind.clone(), children)
    }

    /// Consumes this node and returns its children.
    pub fn into_children(mut self) -> Vec<Self> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn into_parts(mut self) -> (ExpressionKind, Vec<Self>) {
        let kind = std::mem::replace(&mut self.kind, ExpressionKind::True);
        (kind, std::mem::take(&mut self.children))
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        self.reduce(|node, children| Self::new_unchecked(node.kind.clone(), children))
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.kind != right.kind || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.pre_order() {
            node.kind.hash(state);
            node.children.len().hash(state);
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::parser::to_infix(self))
    }
}

impl Debug for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expression({self})")
    }
}
