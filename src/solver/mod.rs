mod brute_force;

pub use brute_force::BruteForceSolver;

use num_bigint::BigUint;

use crate::datastructures::{BooleanAssignment, BooleanClauseList, BooleanSolution};
use crate::handlers::ComputationHandler;

/// The outcome of a satisfiability check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SatResult {
    /// There is no solution.
    Unsatisfiable,
    /// The handler aborted the search before it was decided.
    TimedOut,
    /// There is a solution.
    Satisfiable,
}

/// The outcome of counting solutions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CountResult {
    /// The number of solutions.
    Exact(BigUint),
    /// The handler aborted the count; there are at least this many
    /// solutions.
    LowerBound(BigUint),
}

impl CountResult {
    /// The counted number, exact or not.
    pub const fn count(&self) -> &BigUint {
        match self {
            Self::Exact(count) | Self::LowerBound(count) => count,
        }
    }

    /// Returns `true` if the count is exact.
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// A solver for a conjunction of indexed clauses.
pub trait SatSolver {
    /// Adds the clauses of a CNF.
    fn add_clauses(&mut self, clauses: &BooleanClauseList);

    /// Decides whether the clauses together with `assumptions` have a
    /// solution. `handler` can abort the search, which yields
    /// [`SatResult::TimedOut`].
    fn has_solution(&mut self, assumptions: &BooleanAssignment, handler: &mut dyn ComputationHandler) -> SatResult;

    /// The solution found by the last call of [`SatSolver::has_solution`]
    /// which returned [`SatResult::Satisfiable`].
    fn solution(&self) -> Option<&BooleanSolution>;
}

/// A counter of the solutions of a conjunction of indexed clauses.
pub trait SolutionCounter {
    /// Counts the solutions which extend `assumptions`. `handler` can abort
    /// the count, which yields a [`CountResult::LowerBound`].
    fn count_solutions(&mut self, assumptions: &BooleanAssignment, handler: &mut dyn ComputationHandler) -> CountResult;
}
