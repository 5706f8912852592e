use log::{debug, warn};
use num_bigint::BigUint;

use crate::equation::ast::Equation;
use crate::equation::errors::EquationError;

fn parse_number(token: &str) -> Result<BigUint, EquationError> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        warn!("Rejecting non-decimal token: '{}'", token);
        return Err(EquationError::InvalidNumber(token.to_string()));
    }

    token
        .parse::<BigUint>()
        .map_err(|_| EquationError::InvalidNumber(token.to_string()))
}

/// Parses a single `TARGET: n1 n2 ...` line.
///
/// # Errors
///
/// Returns an error if the line has no `:`, if any number is not a
/// non-negative decimal integer, or if there are no operands.
pub fn parse_equation(line: &str) -> Result<Equation, EquationError> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| EquationError::MissingSeparator(line.trim().to_string()))?;

    let target = parse_number(target.trim())?;
    let operands = operands
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;

    Equation::new(target, operands)
}

/// Parses a whole puzzle input, one equation per non-blank line.
///
/// # Errors
///
/// Returns the first failing line wrapped in [`EquationError::AtLine`],
/// numbered from 1.
pub fn parse_equations(input: &str) -> Result<Vec<Equation>, EquationError> {
    let equations = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_equation(line).map_err(|source| EquationError::AtLine {
                line: idx + 1,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} equations", equations.len());
    Ok(equations)
}
