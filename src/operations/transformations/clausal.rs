use log::debug;

use crate::computation::ComputationError;
use crate::datastructures::problem::collect_all_problems;
use crate::datastructures::{BooleanClause, BooleanClauseList, BooleanRepresentation, Problem, Problems, VariableMap};
use crate::formulas::{Expression, ExpressionKind};
use crate::handlers::{FactorizationHandler, LimitedHandler, NopHandler};
use crate::log::targets::CONVERSION;

use super::{normal_form_with_handler, NormalForm, NormalFormConfig};

/// Flattens a formula in clausal `normal_form` into a list of indexed
/// clauses, one clause per child of the root.
///
/// A root which is not the outer connective of `normal_form` is a single
/// clause, and a constant root is the empty list or the list with the empty
/// clause. Inside a clause, a constant which absorbs the clause (`$true` in
/// a CNF clause, `$false` in a DNF clause) drops the whole clause, the other
/// constant is omitted.
///
/// Every name without an index in `map` and everything which is neither a
/// literal nor a constant is reported; there is no partial result.
///
/// ```
/// # use clausal::datastructures::{BooleanClauseList, VariableMap};
/// # use clausal::formulas::Expression;
/// # use clausal::operations::transformations::{to_boolean_clause_list, NormalForm};
/// let cnf: Expression = "(a | ~b) & (b | $true) & (c | $false)".parse().unwrap();
/// let map = VariableMap::of(&cnf);
/// let clauses = to_boolean_clause_list(&cnf, NormalForm::Cnf, &map).unwrap();
/// assert_eq!(clauses, BooleanClauseList::of([vec![1, -2], vec![3]]).unwrap());
/// ```
pub fn to_boolean_clause_list(
    formula: &Expression,
    normal_form: NormalForm,
    map: &VariableMap,
) -> Result<BooleanClauseList, Problems> {
    let clauses: Vec<&Expression> = match formula.kind() {
        kind if *kind == normal_form.outer_kind() => formula.children().iter().collect(),
        _ => vec![formula],
    };
    let results = clauses.into_iter().map(|clause| to_clause(clause, normal_form, map));
    let clauses = collect_all_problems(results)?;
    Ok(clauses.into_iter().flatten().collect())
}

/// Returns `None` for a clause absorbed by a constant.
fn to_clause(clause: &Expression, normal_form: NormalForm, map: &VariableMap) -> Result<Option<BooleanClause>, Problems> {
    let items = if *clause.kind() == normal_form.inner_kind() { clause.children() } else { std::slice::from_ref(clause) };
    let absorbing = match normal_form {
        NormalForm::Cnf => ExpressionKind::True,
        NormalForm::Dnf => ExpressionKind::False,
    };
    let mut literals = Vec::with_capacity(items.len());
    let mut problems = Vec::new();
    let mut absorbed = false;
    for item in items {
        match item.kind() {
            ExpressionKind::Literal { name, positive } => match map.literal_of(name, *positive) {
                Ok(literal) => literals.push(literal),
                Err(problem) => problems.push(problem),
            },
            kind if *kind == absorbing => absorbed = true,
            ExpressionKind::True | ExpressionKind::False => {}
            _ => problems.push(Problem::NotClausal { operator: item.name() }),
        }
    }
    if !problems.is_empty() {
        return Err(Problems::new(problems));
    }
    Ok((!absorbed).then(|| BooleanClause::from_literals_unchecked(literals)))
}

/// Computes the clause list of `formula` in `normal_form` together with the
/// variable map of its boolean variables.
///
/// The map is built from `formula` itself, so variables which vanish during
/// the transformation keep their index.
///
/// ```
/// # use clausal::datastructures::BooleanClauseList;
/// # use clausal::formulas::Expression;
/// # use clausal::operations::transformations::{boolean_representation, NormalForm, NormalFormConfig};
/// let formula: Expression = "a => b & c".parse().unwrap();
/// let (clauses, map) = boolean_representation(&formula, NormalForm::Cnf, &NormalFormConfig::default()).unwrap();
/// assert_eq!(clauses, BooleanClauseList::of([vec![-1, 2], vec![-1, 3]]).unwrap());
/// assert_eq!(map.index_of("c"), Some(3));
/// ```
pub fn boolean_representation(
    formula: &Expression,
    normal_form: NormalForm,
    config: &NormalFormConfig,
) -> Result<(BooleanClauseList, VariableMap), ComputationError> {
    let mut monitor = NopHandler;
    boolean_representation_with_handler(formula, normal_form, &mut LimitedHandler::new(&mut monitor, config.maximum_literals))
}

/// Like [`boolean_representation`], but the expansion reports to `handler`,
/// which can abort it.
pub fn boolean_representation_with_handler(
    formula: &Expression,
    normal_form: NormalForm,
    handler: &mut dyn FactorizationHandler,
) -> Result<(BooleanClauseList, VariableMap), ComputationError> {
    let normal = normal_form_with_handler(formula, normal_form, handler)?;
    let map = VariableMap::of(formula);
    let clauses = to_boolean_clause_list(&normal, normal_form, &map)?;
    debug!(target: CONVERSION, "Built {} clauses over {} variables", clauses.len(), map.len());
    Ok((clauses, map))
}

#[cfg(test)]
mod tests {
    use crate::computation::ComputationError;
    use crate::datastructures::{BooleanClauseList, Problem, VariableMap};
    use crate::handlers::FactorizationError;
    use crate::operations::transformations::NormalForm::{Cnf, Dnf};
    use crate::operations::transformations::NormalFormConfig;
    use crate::util::test_util::parse;

    use super::{boolean_representation, to_boolean_clause_list};

    fn list(clauses: &[&[i32]]) -> BooleanClauseList {
        BooleanClauseList::of(clauses.iter().map(|c| c.to_vec())).unwrap()
    }

    #[test]
    fn test_single_literal() {
        let map = VariableMap::from_names(["a"]);
        assert_eq!(to_boolean_clause_list(&parse("~a"), Cnf, &map).unwrap(), list(&[&[-1]]));
        assert_eq!(to_boolean_clause_list(&parse("~a"), Dnf, &map).unwrap(), list(&[&[-1]]));
    }

    #[test]
    fn test_constants() {
        let map = VariableMap::new();
        assert_eq!(to_boolean_clause_list(&parse("$true"), Cnf, &map).unwrap(), list(&[]));
        assert_eq!(to_boolean_clause_list(&parse("$false"), Cnf, &map).unwrap(), list(&[&[]]));
        assert_eq!(to_boolean_clause_list(&parse("$true"), Dnf, &map).unwrap(), list(&[&[]]));
        assert_eq!(to_boolean_clause_list(&parse("$false"), Dnf, &map).unwrap(), list(&[]));
    }

    #[test]
    fn test_dnf_terms() {
        let map = VariableMap::from_names(["a", "b"]);
        let dnf = parse("a & ~b | b & $false | ~a & $true");
        assert_eq!(to_boolean_clause_list(&dnf, Dnf, &map).unwrap(), list(&[&[-2, 1], &[-1]]));
    }

    #[test]
    fn test_problems_are_collected() {
        let map = VariableMap::from_names(["a"]);
        let problems = to_boolean_clause_list(&parse("(a | x) & (y | b <= 1) & z"), Cnf, &map).unwrap_err();
        assert_eq!(problems.as_slice(), &[
            Problem::UnresolvedName { name: "x".into() },
            Problem::UnresolvedName { name: "y".into() },
            Problem::NotClausal { operator: "LessEqual" },
            Problem::UnresolvedName { name: "z".into() },
        ]);
    }

    #[test]
    fn test_boolean_representation() {
        let formula = parse("(a | ~a) & b");
        let (clauses, map) = boolean_representation(&formula, Cnf, &NormalFormConfig::default()).unwrap();
        assert_eq!(clauses, list(&[&[2]]));
        assert_eq!(map.len(), 2);

        let (dnf, _) = boolean_representation(&parse("a <=> b"), Dnf, &NormalFormConfig::default()).unwrap();
        assert_eq!(dnf, list(&[&[-2, -1], &[1, 2]]));
    }

    #[test]
    fn test_boolean_representation_failures() {
        let bounded = NormalFormConfig::default().maximum_literals(3);
        assert_eq!(
            boolean_representation(&parse("(a & b) | (c & d)"), Cnf, &bounded),
            Err(ComputationError::Factorization(FactorizationError::LiteralLimitReached { limit: 3 }))
        );
        let result = boolean_representation(&parse("a & x < 2"), Cnf, &NormalFormConfig::default());
        assert!(matches!(result, Err(ComputationError::Conversion(_))));
    }
}
