use num_bigint::BigUint;

use crate::equation::Equation;

/// How a batch of equations split into accepted and rejected, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Targets of the equations that could be balanced
    pub accepted: Vec<BigUint>,
    /// Equations no assignment could balance
    pub not_accepted: Vec<Equation>,
    /// Input positions of the accepted equations
    pub accepted_indices: Vec<usize>,
    /// Input positions of `not_accepted`, parallel to it
    pub rejected_indices: Vec<usize>,
}

impl SearchOutcome {
    pub(crate) fn accept(&mut self, index: usize, equation: &Equation) {
        self.accepted.push(equation.target().clone());
        self.accepted_indices.push(index);
    }

    pub(crate) fn reject(&mut self, index: usize, equation: &Equation) {
        self.not_accepted.push(equation.clone());
        self.rejected_indices.push(index);
    }

    pub fn accepted_sum(&self) -> BigUint {
        self.accepted.iter().sum()
    }

    /// Maps `accepted_indices` of a pass run over `earlier.not_accepted`
    /// back to positions in the input `earlier` was run over.
    pub fn accepted_indices_in(&self, earlier: &SearchOutcome) -> Vec<usize> {
        self.accepted_indices
            .iter()
            .filter_map(|&idx| earlier.rejected_indices.get(idx).copied())
            .collect()
    }
}
