use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// The type an expression evaluates to.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum ValueType {
    /// Truth values. Every formula evaluates to this type.
    Bool,
    /// Signed 64-bit integers. Every term evaluates to this type.
    Int,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Int => "int",
        })
    }
}

/// A value which can be assigned to a variable or be the result of an
/// evaluation.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Value {
    /// A truth value.
    Bool(bool),
    /// An integer value.
    Int(i64),
}

impl Value {
    /// Returns the type of this value.
    pub const fn value_type(self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
        }
    }

    /// Returns the truth value, if this is a boolean value.
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer value, if this is an integer value.
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("$true"),
            Self::Bool(false) => f.write_str("$false"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// A named and typed variable.
///
/// Literals refer to variables of type [`ValueType::Bool`], variables inside
/// of terms are of type [`ValueType::Int`].
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Variable {
    name: String,
    value_type: ValueType,
}

impl Variable {
    /// Creates a new variable.
    pub fn new<S: Into<String>>(name: S, value_type: ValueType) -> Self {
        Self { name: name.into(), value_type }
    }

    /// Returns the name of this variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type of this variable.
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// The relation of a predicate over two integer terms.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Comparison {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
}

impl Comparison {
    /// Returns the comparison which holds exactly when this one does not.
    ///
    /// ```
    /// # use clausal::formulas::Comparison;
    /// assert_eq!(Comparison::LessEqual.invert(), Comparison::GreaterThan);
    /// assert_eq!(Comparison::NotEqual.invert(), Comparison::Equal);
    /// ```
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Equal => Self::NotEqual,
            Self::NotEqual => Self::Equal,
            Self::LessThan => Self::GreaterEqual,
            Self::LessEqual => Self::GreaterThan,
            Self::GreaterThan => Self::LessEqual,
            Self::GreaterEqual => Self::LessThan,
        }
    }

    /// Decides this comparison for two integers.
    pub fn compare(self, left: i64, right: i64) -> bool {
        let ordering = left.cmp(&right);
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::LessThan => ordering == Ordering::Less,
            Self::LessEqual => ordering != Ordering::Greater,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::GreaterEqual => ordering != Ordering::Less,
        }
    }

    /// The infix symbol of this comparison.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqual => ">=",
        }
    }

    /// The operator name of this comparison.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::LessEqual => "LessEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterEqual => "GreaterEqual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Comparison; 6] = [
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::LessThan,
        Comparison::LessEqual,
        Comparison::GreaterThan,
        Comparison::GreaterEqual,
    ];

    #[test]
    fn test_invert_is_complement() {
        for cmp in ALL {
            for (l, r) in [(-1, 0), (0, 0), (3, 2)] {
                assert_ne!(cmp.compare(l, r), cmp.invert().compare(l, r), "{cmp:?} {l} {r}");
            }
            assert_eq!(cmp.invert().invert(), cmp);
        }
    }

    #[test]
    fn test_compare() {
        assert!(Comparison::LessEqual.compare(2, 2));
        assert!(!Comparison::LessThan.compare(2, 2));
        assert!(Comparison::GreaterThan.compare(3, -7));
        assert!(Comparison::NotEqual.compare(1, 2));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(true).as_int(), None);
        assert_eq!(Value::Int(4).as_int(), Some(4));
        assert_eq!(Value::Int(4).value_type(), ValueType::Int);
        assert_eq!(Value::from(false).to_string(), "$false");
        assert_eq!(Value::from(-3).to_string(), "-3");
    }
}
