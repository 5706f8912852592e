use log::debug;

use crate::operator::{Operator, OperatorSet};

use super::state::CounterState;

/// Lazily yields every operator assignment for a fixed gap count.
///
/// Each item is a freshly allocated vector, so callers may keep any of them.
#[derive(Debug, Clone)]
pub struct Assignments {
    operators: &'static [Operator],
    state: CounterState,
}

impl Assignments {
    pub fn new(gap_count: usize, set: OperatorSet) -> Self {
        let operators = set.operators();
        debug!(
            "Enumerating {} operator assignments for {} gaps",
            set, gap_count
        );

        Self {
            operators,
            state: CounterState::new(gap_count, operators.len()),
        }
    }

    fn current(&self) -> Vec<Operator> {
        self.state
            .digits
            .iter()
            .filter_map(|&digit| self.operators.get(digit).copied())
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }

        let assignment = self.current();
        self.state.advance();
        Some(assignment)
    }
}

impl std::iter::FusedIterator for Assignments {}
