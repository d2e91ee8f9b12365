use std::fmt::{Display, Formatter};

use crate::datastructures::Problems;
use crate::handlers::FactorizationError;

/// The ways a computation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// A normal form expansion hit one of its limits.
    Factorization(FactorizationError),
    /// A conversion between named and indexed representations failed.
    Conversion(Problems),
    /// The handler of the computation aborted it.
    Canceled,
    /// The thread running the computation panicked.
    Panicked,
}

impl Display for ComputationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Factorization(error) => format!("factorization failed: {error}"),
            Self::Conversion(problems) => format!("conversion failed: {problems}"),
            Self::Canceled => "the computation was canceled".to_owned(),
            Self::Panicked => "the computation panicked".to_owned(),
        };
        f.write_str(&msg)
    }
}

impl std::error::Error for ComputationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Factorization(error) => Some(error),
            Self::Conversion(problems) => Some(problems),
            Self::Canceled | Self::Panicked => None,
        }
    }
}

impl From<FactorizationError> for ComputationError {
    fn from(error: FactorizationError) -> Self {
        match error {
            FactorizationError::Canceled => Self::Canceled,
            error => Self::Factorization(error),
        }
    }
}

impl From<Problems> for ComputationError {
    fn from(problems: Problems) -> Self {
        Self::Conversion(problems)
    }
}
