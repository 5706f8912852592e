use num_bigint::BigUint;

use crate::operator::ast::Operator;
use crate::utils::concatenate;

impl Operator {
    /// Folds `operand` into `accumulator`.
    pub fn apply(self, accumulator: &BigUint, operand: &BigUint) -> BigUint {
        match self {
            Operator::Add => accumulator + operand,
            Operator::Multiply => accumulator * operand,
            Operator::Concatenate => concatenate(accumulator, operand),
        }
    }
}
