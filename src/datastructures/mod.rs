mod boolean_representation;
mod clause_list;
pub(crate) mod problem;
mod value_representation;
mod variable_map;

pub use boolean_representation::*;
pub use clause_list::*;
pub use problem::{Problem, Problems};
pub use value_representation::*;
pub use variable_map::*;
