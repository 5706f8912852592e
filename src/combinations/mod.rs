pub mod core;
pub mod generator;
pub mod state;

pub use self::core::Assignments;
pub use generator::{assignment_count, generate_assignments};

#[cfg(test)]
mod tests;
