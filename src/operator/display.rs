use std::fmt;

use crate::operator::ast::{Operator, OperatorSet};

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Multiply => "*",
            Operator::Concatenate => "||",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperatorSet::Basic => write!(f, "basic"),
            OperatorSet::Extended => write!(f, "extended"),
        }
    }
}

/// Renders an operand sequence with its operators, e.g. `81 + 40 * 27`.
///
/// Extra operands or operators beyond the shorter of the two are dropped.
pub fn render_assignment<T: fmt::Display>(operands: &[T], assignment: &[Operator]) -> String {
    let mut rendered = String::new();
    let mut operands = operands.iter();

    if let Some(first) = operands.next() {
        rendered.push_str(&first.to_string());
    }

    for (operator, operand) in assignment.iter().zip(operands) {
        rendered.push_str(&format!(" {} {}", operator, operand));
    }

    rendered
}
