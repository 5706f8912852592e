use num_bigint::BigUint;

use crate::equation::errors::EquationError;

/// A target together with the operands that must be combined to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: BigUint,
    operands: Vec<BigUint>,
}

impl Equation {
    /// # Errors
    ///
    /// Returns [`EquationError::MalformedEquation`] if `operands` is empty.
    pub fn new(target: BigUint, operands: Vec<BigUint>) -> Result<Self, EquationError> {
        if operands.is_empty() {
            return Err(EquationError::MalformedEquation);
        }
        Ok(Self { target, operands })
    }

    /// Convenience constructor for machine-sized values.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::MalformedEquation`] if `operands` is empty.
    pub fn from_u64(target: u64, operands: &[u64]) -> Result<Self, EquationError> {
        Self::new(
            BigUint::from(target),
            operands.iter().copied().map(BigUint::from).collect(),
        )
    }

    pub fn target(&self) -> &BigUint {
        &self.target
    }

    pub fn operands(&self) -> &[BigUint] {
        &self.operands
    }

    /// Number of operator slots between operands
    pub fn gap_count(&self) -> usize {
        self.operands.len().saturating_sub(1)
    }
}
