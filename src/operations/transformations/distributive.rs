use std::collections::{HashMap, HashSet};

use log::trace;

use crate::datastructures::{BooleanClause, BooleanRepresentation};
use crate::formulas::{Comparison, Expression, ExpressionKind};
use crate::handlers::{FactorizationError, FactorizationHandler};
use crate::log::targets::NORMAL_FORM;

use super::nnf::negate_atom;
use super::NormalForm;

/// Expands an NNF formula into the clausal form of `normal_form` by
/// distributing the inner connective over the outer one.
///
/// Atoms are interned into signed ids, so each clause is a
/// [`BooleanClause`] over these ids while the expansion runs. Repeated atoms
/// of a clause are merged, clauses with complementary atoms are dropped, and
/// only the first of equal clauses is kept, after every single distribution
/// as well as in the result. An empty clause absorbs all
/// others. Every clause produced along the way is reported to `handler`.
pub(crate) fn expand(
    formula: &Expression,
    normal_form: NormalForm,
    handler: &mut dyn FactorizationHandler,
) -> Result<Expression, FactorizationError> {
    let mut atoms = AtomTable::default();
    let outer = normal_form.outer_kind();
    let clauses = formula.fold(|node, children: Vec<Vec<BooleanClause>>| {
        if handler.aborted() {
            return Err(FactorizationError::Canceled);
        }
        match node.kind() {
            ExpressionKind::True | ExpressionKind::False => {
                let no_clauses = matches!(node.kind(), ExpressionKind::True) == (normal_form == NormalForm::Cnf);
                Ok(if no_clauses { vec![] } else { vec![BooleanClause::default()] })
            }
            ExpressionKind::Literal { .. } | ExpressionKind::Predicate(_) => {
                handler.created_clause(1)?;
                Ok(vec![BooleanClause::from_literals_unchecked(vec![atoms.intern(node)])])
            }
            kind if kind.is_term() => Ok(Vec::new()),
            kind if *kind == outer => Ok(children.into_iter().flatten().collect()),
            ExpressionKind::And | ExpressionKind::Or => distribute(children, handler),
            _ => unreachable!("expansion starts from NNF"),
        }
    })?;
    if clauses.iter().any(BooleanRepresentation::is_empty) {
        let empty = Expression::new_unchecked(normal_form.inner_kind(), Vec::new());
        return Ok(Expression::new_unchecked(outer, vec![empty]));
    }
    let mut seen = HashSet::new();
    let clauses = clauses.into_iter().filter(|clause| seen.insert(clause.clone())).map(|clause| {
        let mut ids = clause.as_slice().to_vec();
        ids.sort_by_key(|id| id.unsigned_abs());
        let inner = ids.into_iter().map(|id| atoms.resolve(id)).collect();
        Expression::new_unchecked(normal_form.inner_kind(), inner)
    });
    Ok(Expression::new_unchecked(outer, clauses.collect()))
}

/// The cartesian product of the clause lists of the operands of an inner
/// connective.
fn distribute(
    operands: Vec<Vec<BooleanClause>>,
    handler: &mut dyn FactorizationHandler,
) -> Result<Vec<BooleanClause>, FactorizationError> {
    let mut operands = operands.into_iter();
    let mut product = operands.next().unwrap_or_else(|| vec![BooleanClause::default()]);
    for operand in operands {
        handler.performed_distribution()?;
        let mut next = Vec::with_capacity(product.len() * operand.len());
        let mut seen = HashSet::new();
        for left in &product {
            for right in &operand {
                let literals = left.as_slice().iter().chain(right.as_slice()).copied().collect();
                match BooleanClause::from_literals_unchecked(literals).clean() {
                    Some(clause) if seen.insert(clause.clone()) => {
                        handler.created_clause(clause.len())?;
                        next.push(clause);
                    }
                    _ => {}
                }
            }
        }
        trace!(target: NORMAL_FORM, "Distributed {} over {} clauses into {}", product.len(), operand.len(), next.len());
        product = next;
    }
    Ok(product)
}

/// Assigns the ids `1, 2, ...` to the positive forms of atoms. The negative
/// form of an atom gets the negated id.
#[derive(Default)]
struct AtomTable {
    ids: HashMap<Expression, i32>,
    atoms: Vec<Expression>,
}

impl AtomTable {
    fn intern(&mut self, atom: &Expression) -> i32 {
        let positive = is_positive(atom);
        let key = if positive { atom.clone() } else { negate_atom(atom) };
        let next_id = i32::try_from(self.atoms.len() + 1).expect("too many distinct atoms");
        let id = *self.ids.entry(key).or_insert_with_key(|key| {
            self.atoms.push(key.clone());
            next_id
        });
        if positive {
            id
        } else {
            -id
        }
    }

    fn resolve(&self, id: i32) -> Expression {
        let atom = &self.atoms[id.unsigned_abs() as usize - 1];
        if id > 0 {
            atom.clone()
        } else {
            negate_atom(atom)
        }
    }
}

/// For each comparison and its inversion, exactly one of both counts as
/// positive.
fn is_positive(atom: &Expression) -> bool {
    match atom.kind() {
        ExpressionKind::Literal { positive, .. } => *positive,
        ExpressionKind::Predicate(cmp) => {
            matches!(cmp, Comparison::Equal | Comparison::LessThan | Comparison::LessEqual)
        }
        _ => true,
    }
}
