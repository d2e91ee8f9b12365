use std::hash::Hash;

use dashmap::DashMap;
use log::debug;

use crate::handlers::ComputationHandler;
use crate::log::targets::COMPUTATION;

use super::{Computation, ComputationError};

/// Memoizes the results of computations.
///
/// Results are keyed by the computation itself, so equal inputs with equal
/// configurations share one result. Failed computations are not stored.
/// The cache can be shared between threads; two threads asking for the same
/// missing result may both compute it.
#[derive(Debug)]
pub struct ComputationCache<C: Computation + Eq + Hash> {
    results: DashMap<C, C::Output>,
}

impl<C: Computation + Eq + Hash> Default for ComputationCache<C> {
    fn default() -> Self {
        Self { results: DashMap::new() }
    }
}

impl<C> ComputationCache<C>
where
    C: Computation + Eq + Hash,
    C::Output: Clone,
{
    /// Constructs an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored result of `computation`, or computes and stores it.
    ///
    /// ```
    /// # use clausal::computation::{ComputationCache, ComputeNnf};
    /// # use clausal::handlers::NopHandler;
    /// let cache = ComputationCache::new();
    /// let computation = ComputeNnf::new("~(a | b)".parse().unwrap());
    /// let first = cache.get_or_compute(&computation, &mut NopHandler).unwrap();
    /// let second = cache.get_or_compute(&computation.clone(), &mut NopHandler).unwrap();
    /// assert_eq!(first, second);
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn get_or_compute(
        &self,
        computation: &C,
        handler: &mut dyn ComputationHandler,
    ) -> Result<C::Output, ComputationError> {
        if let Some(cached) = self.get(computation) {
            debug!(target: COMPUTATION, "Cache hit");
            return Ok(cached);
        }
        let result = computation.compute(handler)?;
        self.results.insert(computation.clone(), result.clone());
        Ok(result)
    }

    /// The stored result of `computation`.
    pub fn get(&self, computation: &C) -> Option<C::Output> {
        self.results.get(computation).map(|entry| entry.value().clone())
    }

    /// Returns `true` if a result of `computation` is stored.
    pub fn contains(&self, computation: &C) -> bool {
        self.results.contains_key(computation)
    }

    /// The number of stored results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no results are stored.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Removes all results.
    pub fn clear(&self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::computation::{ComputationError, ComputeNormalForm};
    use crate::handlers::{CancellationHandler, NopHandler};
    use crate::operations::transformations::{NormalForm, NormalFormConfig};
    use crate::util::test_util::parse;

    use super::ComputationCache;

    #[test]
    fn test_structural_identity() {
        let cache = ComputationCache::new();
        let computation = ComputeNormalForm::new(parse("(a & b) | c"), NormalForm::Cnf);
        cache.get_or_compute(&computation, &mut NopHandler).unwrap();
        assert!(cache.contains(&ComputeNormalForm::new(parse("(a & b) | c"), NormalForm::Cnf)));
        assert!(!cache.contains(&ComputeNormalForm::new(parse("(a & b) | c"), NormalForm::Dnf)));
        let bounded = computation.clone().with_config(NormalFormConfig::default().maximum_literals(100));
        assert!(!cache.contains(&bounded));
        cache.get_or_compute(&bounded, &mut NopHandler).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = ComputationCache::new();
        let computation = ComputeNormalForm::new(parse("(a & b) | c"), NormalForm::Cnf);
        let handler = CancellationHandler::new();
        handler.cancel();
        assert_eq!(cache.get_or_compute(&computation, &mut handler.clone()), Err(ComputationError::Canceled));
        assert!(cache.is_empty());
        assert!(cache.get_or_compute(&computation, &mut NopHandler).is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(ComputationCache::new());
        let threads: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let computation = ComputeNormalForm::new(parse("(a & b) | (c & d)"), NormalForm::Cnf);
                    cache.get_or_compute(&computation, &mut NopHandler).unwrap().to_string()
                })
            })
            .collect();
        for thread in threads {
            assert_eq!(thread.join().unwrap(), "(a | c) & (a | d) & (b | c) & (b | d)");
        }
        assert_eq!(cache.len(), 1);
    }
}
