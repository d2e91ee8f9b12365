mod clausal;
mod distributive;
mod nnf;
mod normal_form;

pub use clausal::*;
pub use nnf::nnf;
pub use normal_form::*;
