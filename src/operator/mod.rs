//! Operators and the sets a search may draw from

mod apply;
mod ast;
mod display;

pub use ast::{Operator, OperatorSet};
pub use display::render_assignment;
