use log::{debug, info, trace, warn};
use num_bigint::BigUint;
use rayon::prelude::*;

use crate::combinations::{Assignments, assignment_count};
use crate::equation::{Equation, EquationError};
use crate::operator::{Operator, OperatorSet, render_assignment};
use crate::solver::errors::SolverError;
use crate::solver::outcome::SearchOutcome;

/// Folds the operands left to right with `assignment` and compares the
/// result against the equation's target.
///
/// # Errors
///
/// Returns [`SolverError::AssignmentLengthMismatch`] if the assignment does not
/// have exactly one operator per gap, and [`SolverError::OperatorNotInSet`] if it
/// uses an operator outside `set`.
pub fn evaluate(
    equation: &Equation,
    assignment: &[Operator],
    set: OperatorSet,
) -> Result<bool, SolverError> {
    let expected = equation.gap_count();
    if assignment.len() != expected {
        warn!(
            "Assignment length {} does not match {} gaps",
            assignment.len(),
            expected
        );
        return Err(SolverError::AssignmentLengthMismatch {
            expected,
            actual: assignment.len(),
        });
    }

    if let Some(&operator) = assignment.iter().find(|&&op| !set.contains(op)) {
        warn!("Operator {} used outside the {} set", operator, set);
        return Err(SolverError::OperatorNotInSet { operator, set });
    }

    let (first, rest) = equation
        .operands()
        .split_first()
        .ok_or(EquationError::MalformedEquation)?;

    let value: BigUint = assignment
        .iter()
        .zip(rest)
        .fold(first.clone(), |acc, (operator, operand)| {
            operator.apply(&acc, operand)
        });

    trace!(
        "{} = {} (target {})",
        render_assignment(equation.operands(), assignment),
        value,
        equation.target()
    );

    Ok(&value == equation.target())
}

/// Configuration for the search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Spread equations across the rayon thread pool
    pub parallel: bool,
}

/// Brute-force search over operator assignments
pub struct EquationSolver {
    config: SolverConfig,
}

impl EquationSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// First assignment, in enumeration order, that balances the equation.
    ///
    /// # Errors
    ///
    /// Propagates contract errors from [`evaluate`].
    pub fn find_assignment(
        &self,
        equation: &Equation,
        set: OperatorSet,
    ) -> Result<Option<Vec<Operator>>, SolverError> {
        let gap_count = equation.gap_count();
        debug!(
            "Trying {} assignments for target {}",
            assignment_count(gap_count, set)
                .map_or_else(|| "too many to count".to_string(), |n| n.to_string()),
            equation.target()
        );

        for assignment in Assignments::new(gap_count, set) {
            if evaluate(equation, &assignment, set)? {
                debug!(
                    "Balanced {}: {}",
                    equation.target(),
                    render_assignment(equation.operands(), &assignment)
                );
                return Ok(Some(assignment));
            }
        }

        debug!("No assignment balances target {}", equation.target());
        Ok(None)
    }

    /// Splits `equations` into accepted and not accepted under `set`.
    ///
    /// # Errors
    ///
    /// Propagates contract errors from [`evaluate`].
    pub fn search(
        &self,
        equations: &[Equation],
        set: OperatorSet,
    ) -> Result<SearchOutcome, SolverError> {
        info!(
            "Searching {} equations with the {} operator set",
            equations.len(),
            set
        );

        let verdicts: Vec<bool> = if self.config.parallel {
            equations
                .par_iter()
                .map(|equation| {
                    self.find_assignment(equation, set)
                        .map(|found| found.is_some())
                })
                .collect::<Result<Vec<bool>, SolverError>>()?
        } else {
            equations
                .iter()
                .map(|equation| {
                    self.find_assignment(equation, set)
                        .map(|found| found.is_some())
                })
                .collect::<Result<Vec<bool>, SolverError>>()?
        };

        let mut outcome = SearchOutcome::default();
        for (index, (equation, accepted)) in equations.iter().zip(verdicts).enumerate() {
            if accepted {
                outcome.accept(index, equation);
            } else {
                outcome.reject(index, equation);
            }
        }

        info!(
            "Accepted {} of {} equations ({} rejected)",
            outcome.accepted.len(),
            equations.len(),
            outcome.not_accepted.len()
        );
        Ok(outcome)
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Runs [`EquationSolver::search`] with the default, sequential configuration.
///
/// # Errors
///
/// Propagates contract errors from [`evaluate`].
pub fn search(equations: &[Equation], set: OperatorSet) -> Result<SearchOutcome, SolverError> {
    EquationSolver::default().search(equations, set)
}
