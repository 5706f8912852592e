//! Calibrix - A library for balancing calibration equations
//!
//! Each equation is a target and an ordered list of operands. The library
//! searches for operators to place between the operands so that evaluating
//! them strictly left to right yields the target.

pub mod combinations;
pub mod equation;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use combinations::{Assignments, generate_assignments};
pub use equation::{Equation, EquationError, parse_equations};
pub use operator::{Operator, OperatorSet};
pub use solver::{EquationSolver, SearchOutcome, SolverConfig, SolverError, evaluate, search};

/// Sum of the targets in `input` that can be balanced with `set`
///
/// This is a convenience function that parses the input and runs a single
/// sequential search pass.
///
/// # Errors
///
/// This function will return an error if:
/// * A non-blank line is not of the form `TARGET: n1 n2 ...`
/// * A line has no operands
///
/// # Examples
///
/// ```
/// use calibrix::{OperatorSet, total_calibration};
///
/// let input = "190: 10 19\n83: 17 5\n156: 15 6";
/// match total_calibration(input, OperatorSet::Extended) {
///     Ok(total) => assert_eq!(total.to_string(), "346"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn total_calibration(
    input: &str,
    set: OperatorSet,
) -> Result<num_bigint::BigUint, SolverError> {
    let equations = parse_equations(input)?;
    Ok(search(&equations, set)?.accepted_sum())
}
