use std::fmt::{Display, Formatter};

use log::warn;

use crate::log::targets::NORMAL_FORM;

use super::{CancellationHandler, ComputationHandler, NopHandler};

/// A handler trait for CNF/DNF factorization and clause list conversion.
pub trait FactorizationHandler: ComputationHandler {
    /// Called when a distribution happened.
    fn performed_distribution(&mut self) -> Result<(), FactorizationError> {
        Ok(())
    }

    /// Called when a new clause with `literals` literals was created.
    fn created_clause(&mut self, _literals: usize) -> Result<(), FactorizationError> {
        Ok(())
    }
}

/// Reasons for a factorization to abort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FactorizationError {
    /// The number of allowed literals is exceeded.
    LiteralLimitReached {
        /// The exceeded limit.
        limit: u64,
    },
    /// The number of allowed distributions is exceeded.
    DistributionLimitReached,
    /// The handler was aborted.
    Canceled,
}

impl Display for FactorizationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::LiteralLimitReached { limit } => format!("the expansion needs more than {limit} literals"),
            Self::DistributionLimitReached => "the expansion needs too many distributions".to_owned(),
            Self::Canceled => "the expansion was aborted".to_owned(),
        };
        f.write_str(&msg)
    }
}

impl std::error::Error for FactorizationError {}

impl FactorizationHandler for NopHandler {}

impl FactorizationHandler for CancellationHandler {}

/// A literal limiting handler. This handler aborts if the literals of all
/// created clauses together, or the number of distributions, exceed the
/// specified limits.
///
/// The literals are counted cumulatively over one computation, so the
/// limit bounds the size of the whole result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralLimitHandler {
    /// Indicates whether the handler is aborted.
    pub aborted: bool,
    /// Number of distributions already performed.
    pub distributions: u64,
    /// Number of literals of the clauses created so far.
    pub literals: u64,
    literal_limit: u64,
    distribution_limit: Option<u64>,
}

impl LiteralLimitHandler {
    /// Constructs a new handler which allows at most `literal_limit`
    /// literals.
    pub const fn new(literal_limit: u64) -> Self {
        Self { aborted: false, distributions: 0, literals: 0, literal_limit, distribution_limit: None }
    }

    /// Additionally limits the number of distributions.
    #[must_use]
    pub const fn with_distribution_limit(mut self, limit: u64) -> Self {
        self.distribution_limit = Some(limit);
        self
    }

    /// The maximum number of literals.
    pub const fn literal_limit(&self) -> u64 {
        self.literal_limit
    }
}

impl ComputationHandler for LiteralLimitHandler {
    fn started(&mut self) {
        self.aborted = false;
        self.distributions = 0;
        self.literals = 0;
    }

    fn aborted(&self) -> bool {
        self.aborted
    }
}

impl FactorizationHandler for LiteralLimitHandler {
    fn performed_distribution(&mut self) -> Result<(), FactorizationError> {
        self.distributions += 1;
        self.aborted = self.distribution_limit.is_some_and(|limit| self.distributions > limit);
        if self.aborted {
            Err(FactorizationError::DistributionLimitReached)
        } else {
            Ok(())
        }
    }

    fn created_clause(&mut self, literals: usize) -> Result<(), FactorizationError> {
        self.literals = self.literals.saturating_add(literals as u64);
        self.aborted = self.literals > self.literal_limit;
        if self.aborted {
            warn!(target: NORMAL_FORM, "Aborted after exceeding the limit of {} literals", self.literal_limit);
            Err(FactorizationError::LiteralLimitReached { limit: self.literal_limit })
        } else {
            Ok(())
        }
    }
}

/// Combines a monitoring handler with an optional literal limit.
pub(crate) struct LimitedHandler<'a> {
    monitor: &'a mut dyn ComputationHandler,
    limit: Option<LiteralLimitHandler>,
}

impl<'a> LimitedHandler<'a> {
    pub(crate) fn new(monitor: &'a mut dyn ComputationHandler, maximum_literals: Option<u64>) -> Self {
        Self { monitor, limit: maximum_literals.map(LiteralLimitHandler::new) }
    }
}

impl ComputationHandler for LimitedHandler<'_> {
    fn started(&mut self) {
        self.monitor.started();
        if let Some(limit) = &mut self.limit {
            limit.started();
        }
    }

    fn aborted(&self) -> bool {
        self.monitor.aborted() || self.limit.as_ref().is_some_and(LiteralLimitHandler::aborted)
    }
}

impl FactorizationHandler for LimitedHandler<'_> {
    fn performed_distribution(&mut self) -> Result<(), FactorizationError> {
        self.limit.as_mut().map_or(Ok(()), LiteralLimitHandler::performed_distribution)
    }

    fn created_clause(&mut self, literals: usize) -> Result<(), FactorizationError> {
        self.limit.as_mut().map_or(Ok(()), |limit| limit.created_clause(literals))
    }
}
