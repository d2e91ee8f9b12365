use bitvec::prelude::*;
use log::{debug, warn};
use num_bigint::BigUint;

use crate::datastructures::{BooleanAssignment, BooleanClause, BooleanClauseList, BooleanRepresentation, BooleanSolution};
use crate::handlers::ComputationHandler;
use crate::log::targets::SOLVER;

use super::{CountResult, SatResult, SatSolver, SolutionCounter};

/// A solver which tries every assignment.
///
/// The variables are all indices from `1` up to the largest index of the
/// clauses and the assumptions, so the search takes up to `2^n` steps for
/// `n` unassumed variables. The handler is asked before every step.
///
/// ```
/// # use clausal::datastructures::{BooleanAssignment, BooleanClauseList};
/// # use clausal::handlers::NopHandler;
/// # use clausal::solver::{BruteForceSolver, SatResult, SatSolver};
/// let mut solver = BruteForceSolver::new();
/// solver.add_clauses(&BooleanClauseList::of([vec![1, 2], vec![-1]]).unwrap());
/// let none = BooleanAssignment::new([]).unwrap();
/// assert_eq!(solver.has_solution(&none, &mut NopHandler), SatResult::Satisfiable);
/// assert_eq!(solver.solution().unwrap().value_of(2), Some(true));
/// let assumptions = BooleanAssignment::new([-2]).unwrap();
/// assert_eq!(solver.has_solution(&assumptions, &mut NopHandler), SatResult::Unsatisfiable);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BruteForceSolver {
    clauses: Vec<BooleanClause>,
    max_index: usize,
    solution: Option<BooleanSolution>,
}

impl BruteForceSolver {
    /// Constructs a solver without clauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of clauses added so far.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    fn search(
        &self,
        assumptions: &BooleanAssignment,
        handler: &mut dyn ComputationHandler,
        mut on_solution: impl FnMut(&BitSlice) -> bool,
    ) -> Result<(), ()> {
        let Some(search) = Search::new(self.max_index, assumptions) else {
            return Ok(());
        };
        let Search { mut values, free } = search;
        loop {
            if handler.aborted() {
                return Err(());
            }
            if self.clauses.iter().all(|clause| satisfies(&values, clause)) && !on_solution(&values) {
                return Ok(());
            }
            if !increment(&mut values, &free) {
                return Ok(());
            }
        }
    }
}

/// The assignment under construction: bit `i` is the value of variable `i`,
/// bit `0` is unused. `free` lists the variables which are not assumed.
struct Search {
    values: BitVec,
    free: Vec<usize>,
}

impl Search {
    /// Returns `None` if the assumptions contradict each other.
    fn new(max_index: usize, assumptions: &BooleanAssignment) -> Option<Self> {
        let assumed_max = assumptions.as_slice().iter().map(|l| l.unsigned_abs() as usize).max().unwrap_or(0);
        let size = max_index.max(assumed_max) + 1;
        let mut values = bitvec![0; size];
        let mut assumed = bitvec![0; size];
        for &literal in assumptions.as_slice() {
            let index = literal.unsigned_abs() as usize;
            if assumed[index] && values[index] != (literal > 0) {
                return None;
            }
            assumed.set(index, true);
            values.set(index, literal > 0);
        }
        let free = (1..size).filter(|&i| !assumed[i]).collect();
        Some(Self { values, free })
    }
}

fn satisfies(values: &BitSlice, clause: &BooleanClause) -> bool {
    clause.as_slice().iter().any(|&literal| values[literal.unsigned_abs() as usize] == (literal > 0))
}

/// Counts the free variables up as a binary number. Returns `false` after
/// the last assignment.
fn increment(values: &mut BitSlice, free: &[usize]) -> bool {
    for &index in free {
        if values[index] {
            values.set(index, false);
        } else {
            values.set(index, true);
            return true;
        }
    }
    false
}

fn to_solution(values: &BitSlice) -> BooleanSolution {
    let literals = (1..values.len()).map(|i| {
        let index = i32::try_from(i).expect("indices are i32");
        if values[i] {
            index
        } else {
            -index
        }
    });
    BooleanSolution::from_literals_unchecked(literals.collect())
}

impl SatSolver for BruteForceSolver {
    fn add_clauses(&mut self, clauses: &BooleanClauseList) {
        self.max_index = self.max_index.max(clauses.max_index().unsigned_abs() as usize);
        self.clauses.extend(clauses.iter().cloned());
        self.solution = None;
    }

    fn has_solution(&mut self, assumptions: &BooleanAssignment, handler: &mut dyn ComputationHandler) -> SatResult {
        handler.started();
        self.solution = None;
        let mut found = None;
        let outcome = self.search(assumptions, handler, |values| {
            found = Some(to_solution(values));
            false
        });
        match (outcome, found) {
            (Err(()), _) => {
                debug!(target: SOLVER, "Search aborted");
                SatResult::TimedOut
            }
            (Ok(()), None) => SatResult::Unsatisfiable,
            (Ok(()), Some(solution)) => {
                self.solution = Some(solution);
                SatResult::Satisfiable
            }
        }
    }

    fn solution(&self) -> Option<&BooleanSolution> {
        self.solution.as_ref()
    }
}

impl SolutionCounter for BruteForceSolver {
    fn count_solutions(&mut self, assumptions: &BooleanAssignment, handler: &mut dyn ComputationHandler) -> CountResult {
        handler.started();
        let mut count = BigUint::default();
        let outcome = self.search(assumptions, handler, |_| {
            count += 1_u32;
            true
        });
        if outcome.is_ok() {
            CountResult::Exact(count)
        } else {
            warn!(target: SOLVER, "Counting aborted, returning the lower bound {count}");
            CountResult::LowerBound(count)
        }
    }
}
