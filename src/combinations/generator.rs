use crate::operator::{Operator, OperatorSet};

use super::core::Assignments;

/// Every operator assignment of length `gap_count` drawn from `set`.
///
/// Yields `2^gap_count` assignments for [`OperatorSet::Basic`] and
/// `3^gap_count` for [`OperatorSet::Extended`]. A gap count of zero yields a
/// single empty assignment.
pub fn generate_assignments(gap_count: usize, set: OperatorSet) -> Vec<Vec<Operator>> {
    Assignments::new(gap_count, set).collect()
}

/// Number of assignments [`generate_assignments`] would produce, if it fits in a `usize`.
pub fn assignment_count(gap_count: usize, set: OperatorSet) -> Option<usize> {
    let exponent = u32::try_from(gap_count).ok()?;
    set.operators().len().checked_pow(exponent)
}
