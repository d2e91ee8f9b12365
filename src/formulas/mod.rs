mod evaluation;
mod expression;
mod traversal;
mod value;

/// We deviate from the convention of putting unit tests in the source file in this case,
/// s.t. the files don't become too large
#[cfg(test)]
mod tests;

pub use expression::*;
pub use traversal::PreOrder;
pub use value::*;
