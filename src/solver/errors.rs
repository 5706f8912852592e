use thiserror::Error;

use crate::equation::EquationError;
use crate::operator::{Operator, OperatorSet};

/// Contract violations detected while evaluating or searching
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Assignment has {actual} operators but the equation has {expected} gaps")]
    AssignmentLengthMismatch { expected: usize, actual: usize },
    #[error("Operator '{operator}' is not part of the {set} operator set")]
    OperatorNotInSet {
        operator: Operator,
        set: OperatorSet,
    },
    #[error("Equation error: {0}")]
    EquationError(#[from] EquationError),
}
