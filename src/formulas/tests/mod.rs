mod equality;
mod evaluation;
