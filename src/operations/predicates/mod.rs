mod cnf;
mod dnf;
mod nnf;
mod normal_form_tester;

pub use cnf::*;
pub use dnf::*;
pub use nnf::*;
pub use normal_form_tester::*;
