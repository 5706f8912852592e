mod core;
mod errors;
mod outcome;

pub use self::core::{EquationSolver, SolverConfig, evaluate, search};
pub use errors::SolverError;
pub use outcome::SearchOutcome;
