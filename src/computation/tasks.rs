use crate::datastructures::{BooleanClauseList, VariableMap};
use crate::formulas::Expression;
use crate::handlers::{ComputationHandler, LimitedHandler};
use crate::operations::transformations::{
    boolean_representation_with_handler, nnf, normal_form_with_handler, NormalForm, NormalFormConfig,
};

use super::{Computation, ComputationError};

/// Computes the NNF of a formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComputeNnf {
    input: Expression,
}

impl ComputeNnf {
    /// Constructs the computation for `input`.
    pub const fn new(input: Expression) -> Self {
        Self { input }
    }
}

impl Computation for ComputeNnf {
    type Input = Expression;
    type Output = Expression;

    fn input(&self) -> &Expression {
        &self.input
    }

    fn with_input(&self, input: Expression) -> Self {
        Self::new(input)
    }

    fn compute(&self, handler: &mut dyn ComputationHandler) -> Result<Expression, ComputationError> {
        handler.started();
        if handler.aborted() {
            return Err(ComputationError::Canceled);
        }
        Ok(nnf(&self.input))
    }
}

/// Computes the clausal normal form of a formula, optionally bounded by a
/// literal limit.
///
/// ```
/// # use clausal::computation::{Computation, ComputeNormalForm};
/// # use clausal::formulas::Expression;
/// # use clausal::handlers::NopHandler;
/// # use clausal::operations::transformations::NormalForm;
/// let formula: Expression = "(a & b) | c".parse().unwrap();
/// let computation = ComputeNormalForm::new(formula, NormalForm::Cnf);
/// let cnf = computation.compute_async(NopHandler).get().unwrap();
/// assert_eq!(cnf.to_string(), "(a | c) & (b | c)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComputeNormalForm {
    input: Expression,
    normal_form: NormalForm,
    config: NormalFormConfig,
}

impl ComputeNormalForm {
    /// Constructs the unbounded computation for `input`.
    pub fn new(input: Expression, normal_form: NormalForm) -> Self {
        Self { input, normal_form, config: NormalFormConfig::default() }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: NormalFormConfig) -> Self {
        self.config = config;
        self
    }

    /// The target normal form.
    pub const fn normal_form(&self) -> NormalForm {
        self.normal_form
    }

    /// The configuration.
    pub const fn config(&self) -> &NormalFormConfig {
        &self.config
    }
}

impl Computation for ComputeNormalForm {
    type Input = Expression;
    type Output = Expression;

    fn input(&self) -> &Expression {
        &self.input
    }

    fn with_input(&self, input: Expression) -> Self {
        Self { input, normal_form: self.normal_form, config: self.config.clone() }
    }

    fn compute(&self, handler: &mut dyn ComputationHandler) -> Result<Expression, ComputationError> {
        let mut limited = LimitedHandler::new(handler, self.config.maximum_literals);
        Ok(normal_form_with_handler(&self.input, self.normal_form, &mut limited)?)
    }
}

/// Computes the clause list of a formula in a normal form together with
/// the variable map of the formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComputeBooleanRepresentation {
    input: Expression,
    normal_form: NormalForm,
    config: NormalFormConfig,
}

impl ComputeBooleanRepresentation {
    /// Constructs the unbounded computation for `input`.
    pub fn new(input: Expression, normal_form: NormalForm) -> Self {
        Self { input, normal_form, config: NormalFormConfig::default() }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: NormalFormConfig) -> Self {
        self.config = config;
        self
    }
}

impl Computation for ComputeBooleanRepresentation {
    type Input = Expression;
    type Output = (BooleanClauseList, VariableMap);

    fn input(&self) -> &Expression {
        &self.input
    }

    fn with_input(&self, input: Expression) -> Self {
        Self { input, normal_form: self.normal_form, config: self.config.clone() }
    }

    fn compute(&self, handler: &mut dyn ComputationHandler) -> Result<Self::Output, ComputationError> {
        let mut limited = LimitedHandler::new(handler, self.config.maximum_literals);
        boolean_representation_with_handler(&self.input, self.normal_form, &mut limited)
    }
}

#[cfg(test)]
mod tests {
    use crate::computation::{Computation, ComputationError};
    use crate::datastructures::BooleanClauseList;
    use crate::handlers::{CancellationHandler, FactorizationError, NopHandler};
    use crate::operations::transformations::{NormalForm, NormalFormConfig};
    use crate::util::test_util::parse;

    use super::{ComputeBooleanRepresentation, ComputeNnf, ComputeNormalForm};

    #[test]
    fn test_compute_nnf() {
        let computation = ComputeNnf::new(parse("~(a & b)"));
        assert_eq!(computation.compute(&mut NopHandler).unwrap(), parse("~a | ~b"));
        let canceled = CancellationHandler::new();
        canceled.cancel();
        assert_eq!(computation.compute(&mut canceled.clone()), Err(ComputationError::Canceled));
    }

    #[test]
    fn test_with_input_keeps_configuration() {
        let bounded = NormalFormConfig::default().maximum_literals(3);
        let computation = ComputeNormalForm::new(parse("a"), NormalForm::Dnf).with_config(bounded.clone());
        let other = computation.with_input(parse("(a | b) & (c | d)"));
        assert_eq!(other.input(), &parse("(a | b) & (c | d)"));
        assert_eq!(other.normal_form(), NormalForm::Dnf);
        assert_eq!(other.config(), &bounded);
        assert_eq!(
            other.compute(&mut NopHandler),
            Err(ComputationError::Factorization(FactorizationError::LiteralLimitReached { limit: 3 }))
        );
        assert_eq!(computation.compute(&mut NopHandler).unwrap().to_string(), "a");
    }

    #[test]
    fn test_compute_boolean_representation_async() {
        let computation = ComputeBooleanRepresentation::new(parse("a => b"), NormalForm::Cnf);
        let (clauses, map) = computation.compute_async(NopHandler).get().unwrap();
        assert_eq!(clauses, BooleanClauseList::of([vec![-1, 2]]).unwrap());
        assert_eq!(map.name_of(2), Some("b"));
    }

    #[test]
    fn test_canceled_async() {
        let handler = CancellationHandler::new();
        handler.cancel();
        let future = ComputeNormalForm::new(parse("(a & b) | (c & d)"), NormalForm::Cnf).compute_async(handler);
        assert_eq!(future.get(), Err(ComputationError::Canceled));
    }
}
