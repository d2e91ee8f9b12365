mod cache;
mod error;
mod task;
mod tasks;

pub use cache::ComputationCache;
pub use error::ComputationError;
pub use task::{Computation, FutureResult};
pub use tasks::*;
