use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PenaltyError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("population is empty")]
    EmptyPopulation,

    #[error("population mismatch: {objectives} objective values, {violations} violation rows")]
    PopulationMismatch { objectives: usize, violations: usize },

    #[error("violation row {row} has {actual} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("violation vector has {actual} entries, expected {expected}")]
    ViolationLength { expected: usize, actual: usize },

    #[error("fitness output has {actual} slots, expected {expected}")]
    OutputLength { expected: usize, actual: usize },

    #[error("penalty coefficients have not been computed yet")]
    NotReady,
}
