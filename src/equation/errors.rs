use thiserror::Error;

/// Errors raised while building or parsing equations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Equation must have at least one operand")]
    MalformedEquation,
    #[error("Missing ':' between target and operands: '{0}'")]
    MissingSeparator(String),
    #[error("Not a non-negative decimal integer: '{0}'")]
    InvalidNumber(String),
    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<EquationError>,
    },
}
