use std::thread::JoinHandle;

use log::debug;

use crate::handlers::ComputationHandler;
use crate::log::targets::COMPUTATION;

use super::ComputationError;

/// A transformation as a unit of work.
///
/// A computation is a pure function of its declared input and its own
/// configuration. Two equal computations compute equal results, which is
/// what [`ComputationCache`](super::ComputationCache) relies on.
pub trait Computation: Clone + Send + 'static {
    /// The declared dependency of the computation.
    type Input: Clone;
    /// The result of the computation.
    type Output: Send + 'static;

    /// The input this computation works on.
    fn input(&self) -> &Self::Input;

    /// The same computation with the same configuration on another input.
    #[must_use]
    fn with_input(&self, input: Self::Input) -> Self;

    /// Runs the computation on the current thread. `handler` can abort it.
    fn compute(&self, handler: &mut dyn ComputationHandler) -> Result<Self::Output, ComputationError>;

    /// Runs the computation on a new thread.
    ///
    /// Pass a clone of a [`CancellationHandler`](crate::handlers::CancellationHandler)
    /// to be able to cancel the computation while it runs.
    fn compute_async<H>(&self, handler: H) -> FutureResult<Self::Output>
    where
        H: ComputationHandler + Send + 'static,
    {
        let computation = self.clone();
        let mut handler = handler;
        FutureResult::spawn(move || computation.compute(&mut handler))
    }
}

/// The pending result of a computation running on another thread.
#[derive(Debug)]
pub struct FutureResult<T> {
    handle: JoinHandle<Result<T, ComputationError>>,
}

impl<T: Send + 'static> FutureResult<T> {
    pub(crate) fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T, ComputationError> + Send + 'static,
    {
        Self { handle: std::thread::spawn(job) }
    }

    /// Returns `true` if the computation has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the computation and returns its result. A panic of the
    /// computation is [`ComputationError::Panicked`].
    pub fn get(self) -> Result<T, ComputationError> {
        self.handle.join().unwrap_or_else(|_| {
            debug!(target: COMPUTATION, "Computation thread panicked");
            Err(ComputationError::Panicked)
        })
    }
}
