//! Equations and the line-oriented text format they are read from

mod ast;
mod errors;
mod parse;

pub use ast::Equation;
pub use errors::EquationError;
pub use parse::{parse_equation, parse_equations};

#[cfg(test)]
mod tests;
