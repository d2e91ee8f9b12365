use crate::datastructures::{Problem, Problems, ValueAssignment, ValueRepresentation};

use super::{Expression, ExpressionKind, Value};

impl Expression {
    /// Evaluates this expression against a value assignment.
    ///
    /// Children are evaluated bottom-up before their parent, there is no
    /// short-circuiting. Every variable of the expression must be assigned a
    /// value of its type, all unassigned and mistyped variables are reported
    /// together.
    ///
    /// ```
    /// # use clausal::datastructures::{ValueAssignment, ValueRepresentation};
    /// # use clausal::formulas::{Expression, Value};
    /// let formula: Expression = "a => x + 1 <= 3".parse().unwrap();
    /// let assignment = ValueAssignment::from_pairs([("a", Value::Bool(true)), ("x", Value::Int(4))]).unwrap();
    /// assert_eq!(formula.evaluate(&assignment).unwrap(), Value::Bool(false));
    /// ```
    pub fn evaluate(&self, assignment: &ValueAssignment) -> Result<Value, Problems> {
        let mut problems = Vec::new();
        for variable in self.variables() {
            match assignment.get(variable.name()) {
                None => problems.push(Problem::UnassignedVariable { name: variable.name().to_owned() }),
                Some(value) if value.value_type() != variable.value_type() => problems.push(Problem::MistypedVariable {
                    name: variable.name().to_owned(),
                    expected: variable.value_type(),
                    actual: value.value_type(),
                }),
                Some(_) => {}
            }
        }
        if !problems.is_empty() {
            return Err(Problems::new(problems));
        }
        self.fold(|node, values| {
            let value = match node.kind() {
                ExpressionKind::Literal { name, positive } => {
                    assignment.get(name).and_then(Value::as_bool).map(|b| Value::Bool(b == *positive))
                }
                ExpressionKind::Variable(name) => assignment.get(name),
                kind => kind.apply(&values),
            };
            value.ok_or_else(|| Problems::from(Problem::Unevaluable { operator: node.name() }))
        })
    }

    /// Evaluates a formula to its truth value.
    ///
    /// Fails like [`Expression::evaluate`], and reports a term with
    /// [`Problem::Unevaluable`].
    pub fn holds(&self, assignment: &ValueAssignment) -> Result<bool, Problems> {
        self.evaluate(assignment)?.as_bool().ok_or_else(|| Problems::from(Problem::Unevaluable { operator: self.name() }))
    }
}
