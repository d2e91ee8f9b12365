use crate::formulas::{Expression, ExpressionKind};
use crate::operations::transformations::NormalForm;

/// Decides whether a formula is in a normal form, and whether it is in the
/// clausal shape of that normal form.
///
/// A formula is in normal form if it only consists of atoms and the two
/// connectives of the normal form, and no outer connective occurs below an
/// inner one. Nesting of equal connectives is allowed, so `a & (b & c)` is
/// in CNF. A formula is in clausal normal form if its root is the outer
/// connective, all children of the root are inner connectives, and all
/// their children are atoms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NormalFormTester {
    normal_form: bool,
    clausal_normal_form: bool,
}

impl NormalFormTester {
    /// Tests `formula` for `normal_form`.
    pub fn new(formula: &Expression, normal_form: NormalForm) -> Self {
        let clausal_normal_form = has_clausal_shape(formula, normal_form);
        Self { normal_form: clausal_normal_form || is_normal(formula, normal_form), clausal_normal_form }
    }

    /// Returns `true` if the formula is in normal form.
    pub const fn is_normal_form(&self) -> bool {
        self.normal_form
    }

    /// Returns `true` if the formula is in clausal normal form.
    pub const fn is_clausal_normal_form(&self) -> bool {
        self.clausal_normal_form
    }
}

fn is_normal(formula: &Expression, normal_form: NormalForm) -> bool {
    let outer = normal_form.outer_kind();
    let mut pending = vec![(formula, false)];
    while let Some((node, below_inner)) = pending.pop() {
        if node.is_atom() {
            continue;
        }
        let is_outer = *node.kind() == outer;
        let is_inner = *node.kind() == normal_form.inner_kind();
        if !(is_outer || is_inner) || (is_outer && below_inner) {
            return false;
        }
        pending.extend(node.children().iter().map(|child| (child, below_inner || is_inner)));
    }
    true
}

fn has_clausal_shape(formula: &Expression, normal_form: NormalForm) -> bool {
    let inner = normal_form.inner_kind();
    *formula.kind() == normal_form.outer_kind()
        && formula
            .children()
            .iter()
            .all(|clause| *clause.kind() == inner && clause.children().iter().all(Expression::is_atom))
}

/// Returns `true` if `formula` is in clausal normal form of `normal_form`.
pub fn is_clausal(formula: &Expression, normal_form: NormalForm) -> bool {
    NormalFormTester::new(formula, normal_form).is_clausal_normal_form()
}
