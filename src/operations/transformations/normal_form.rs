use log::debug;

use crate::formulas::{Expression, ExpressionKind};
use crate::handlers::{FactorizationError, FactorizationHandler, LiteralLimitHandler, NopHandler};
use crate::log::targets::NORMAL_FORM;
use crate::operations::predicates::NormalFormTester;

use super::distributive::expand;
use super::nnf;

/// The clausal normal forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NormalForm {
    /// Conjunctive normal form: a conjunction of disjunctions of atoms.
    Cnf,
    /// Disjunctive normal form: a disjunction of conjunctions of atoms.
    Dnf,
}

impl NormalForm {
    /// The connective of the root of the normal form.
    pub const fn outer_kind(self) -> ExpressionKind {
        match self {
            Self::Cnf => ExpressionKind::And,
            Self::Dnf => ExpressionKind::Or,
        }
    }

    /// The connective of the clauses of the normal form.
    pub const fn inner_kind(self) -> ExpressionKind {
        match self {
            Self::Cnf => ExpressionKind::Or,
            Self::Dnf => ExpressionKind::And,
        }
    }

    /// The other normal form.
    #[must_use]
    pub const fn dual(self) -> Self {
        match self {
            Self::Cnf => Self::Dnf,
            Self::Dnf => Self::Cnf,
        }
    }
}

/// The configuration of a normal form transformation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NormalFormConfig {
    /// The maximum number of literals the distributive expansion may create.
    /// `None` means unbounded.
    pub maximum_literals: Option<u64>,
}

impl NormalFormConfig {
    /// Sets the maximum number of literals.
    #[must_use]
    pub const fn maximum_literals(mut self, maximum_literals: u64) -> Self {
        self.maximum_literals = Some(maximum_literals);
        self
    }
}

/// Transforms `formula` into the clausal form of `normal_form`.
///
/// A formula which already is in clausal normal form is returned as an
/// equal copy. All other formulas are brought into NNF and expanded by
/// distribution. The result has the outer connective at its root, the
/// inner connective below it, and atoms below these. Terms are returned
/// unchanged.
///
/// The expansion of a formula can be exponentially larger than the
/// formula; use [`normal_form_with_config`] to bound it.
///
/// ```
/// # use clausal::formulas::Expression;
/// # use clausal::operations::transformations::{normal_form, NormalForm};
/// let formula: Expression = "a & b | ~(c => d)".parse().unwrap();
/// let cnf = normal_form(&formula, NormalForm::Cnf);
/// assert_eq!(cnf.to_string(), "(a | c) & (a | ~d) & (b | c) & (b | ~d)");
/// ```
pub fn normal_form(formula: &Expression, normal_form: NormalForm) -> Expression {
    normal_form_with_handler(formula, normal_form, &mut NopHandler).expect("Nop Handler never aborts.")
}

/// Transforms `formula` into the clausal form of `normal_form`, reporting
/// the progress to `handler`, which can abort the transformation.
pub fn normal_form_with_handler(
    formula: &Expression,
    normal_form: NormalForm,
    handler: &mut dyn FactorizationHandler,
) -> Result<Expression, FactorizationError> {
    handler.started();
    if formula.is_term() {
        return Ok(formula.clone());
    }
    let tester = NormalFormTester::new(formula, normal_form);
    if tester.is_clausal_normal_form() {
        debug!(target: NORMAL_FORM, "Formula already is in clausal {normal_form:?}");
        return Ok(formula.clone());
    }
    if tester.is_normal_form() {
        expand(formula, normal_form, handler)
    } else {
        expand(&nnf(formula), normal_form, handler)
    }
}

/// Transforms `formula` into the clausal form of `normal_form`, aborting if
/// the expansion needs more literals than configured.
pub fn normal_form_with_config(
    formula: &Expression,
    normal_form: NormalForm,
    config: &NormalFormConfig,
) -> Result<Expression, FactorizationError> {
    match config.maximum_literals {
        Some(limit) => normal_form_with_handler(formula, normal_form, &mut LiteralLimitHandler::new(limit)),
        None => normal_form_with_handler(formula, normal_form, &mut NopHandler),
    }
}

/// Transforms `formula` into clausal conjunctive normal form.
pub fn cnf(formula: &Expression) -> Expression {
    normal_form(formula, NormalForm::Cnf)
}

/// Transforms `formula` into clausal disjunctive normal form.
pub fn dnf(formula: &Expression) -> Expression {
    normal_form(formula, NormalForm::Dnf)
}

#[cfg(test)]
mod tests {
    use crate::handlers::{CancellationHandler, FactorizationError};
    use crate::operations::predicates::{is_clausal_cnf, is_clausal_dnf};
    use crate::util::test_util::{parse, F};

    use super::*;

    #[test]
    fn test_clausal_input_is_kept() {
        let f = F::new();
        let clauses = [parse("a | ~b"), Expression::or([f.C.clone()]).unwrap(), parse("d | $true")];
        let formula = Expression::and(clauses).unwrap();
        let result = cnf(&formula);
        assert_eq!(result, formula);
        assert!(is_clausal_cnf(&result));
    }

    #[test]
    fn test_results_are_clausal() {
        let f = F::new();
        for formula in [&f.A, &f.NA, &f.AND1, &f.OR1, &f.IMP1, &f.EQ1, &f.NOT1, &f.TRUE, &f.FALSE] {
            assert!(is_clausal_cnf(&cnf(formula)), "{formula}");
            assert!(is_clausal_dnf(&dnf(formula)), "{formula}");
        }
    }

    #[test]
    fn test_normal_form_is_flattened() {
        assert_eq!(cnf(&parse("a | (b | c)")).to_string(), "a | b | c");
        assert_eq!(cnf(&parse("a & (b & (c | d))")).to_string(), "a & b & (c | d)");
        assert_eq!(dnf(&parse("a | (b & ~c)")).to_string(), "a | b & ~c");
    }

    #[test]
    fn test_equivalence() {
        assert_eq!(dnf(&parse("a <=> b")).to_string(), "~a & ~b | a & b");
        assert_eq!(cnf(&parse("a <=> b")).to_string(), "(~a | b) & (a | ~b)");
    }

    #[test]
    fn test_literal_limit() {
        let formula = parse("(a & b) | (c & d) | (e & f)");
        let bounded = NormalFormConfig::default().maximum_literals(10);
        assert_eq!(
            normal_form_with_config(&formula, NormalForm::Cnf, &bounded),
            Err(FactorizationError::LiteralLimitReached { limit: 10 })
        );
        let result = normal_form_with_config(&formula, NormalForm::Cnf, &NormalFormConfig::default()).unwrap();
        assert_eq!(result.children().len(), 8);
        assert_eq!(normal_form_with_config(&formula, NormalForm::Dnf, &bounded).unwrap(), formula);
    }

    #[test]
    fn test_cancellation() {
        let handler = CancellationHandler::new();
        handler.cancel();
        let result = normal_form_with_handler(&parse("(a & b) | c"), NormalForm::Cnf, &mut handler.clone());
        assert_eq!(result, Err(FactorizationError::Canceled));
    }

    #[test]
    fn test_dual() {
        assert_eq!(NormalForm::Cnf.dual(), NormalForm::Dnf);
        assert_eq!(NormalForm::Dnf.dual().outer_kind(), crate::formulas::ExpressionKind::And);
    }
}
