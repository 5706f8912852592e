/// An operator placed in the gap between two adjacent operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Multiply,
    Concatenate,
}

const BASIC: [Operator; 2] = [Operator::Add, Operator::Multiply];
const EXTENDED: [Operator; 3] = [Operator::Add, Operator::Multiply, Operator::Concatenate];

/// Which operators a search may place between operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorSet {
    /// Addition and multiplication
    #[default]
    Basic,
    /// Addition, multiplication and concatenation
    Extended,
}

impl OperatorSet {
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            OperatorSet::Extended
        } else {
            OperatorSet::Basic
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, OperatorSet::Extended)
    }

    /// Operators in enumeration order
    pub fn operators(self) -> &'static [Operator] {
        match self {
            OperatorSet::Basic => &BASIC,
            OperatorSet::Extended => &EXTENDED,
        }
    }

    pub fn contains(self, operator: Operator) -> bool {
        self.operators().contains(&operator)
    }
}
