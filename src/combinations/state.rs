/// Mixed-radix counter over operator indices, one digit per gap.
///
/// Digit 0 is the most significant, so the first gap changes slowest.
#[derive(Debug, Clone)]
pub struct CounterState {
    pub(crate) digits: Vec<usize>,
    pub(crate) radix: usize,
    pub(crate) exhausted: bool,
}

impl CounterState {
    pub fn new(gap_count: usize, radix: usize) -> Self {
        Self {
            digits: vec![0; gap_count],
            radix,
            exhausted: false,
        }
    }

    /// Moves to the next combination, marking the counter exhausted on wrap-around.
    pub fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return;
            }
            *digit = 0;
        }
        self.mark_exhausted();
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
