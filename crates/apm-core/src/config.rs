use crate::error::PenaltyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of constraints every candidate reports a violation for.
    /// Fixed for the lifetime of an engine.
    pub number_of_constraints: usize,
}

impl EngineConfig {
    pub const fn new(number_of_constraints: usize) -> Self {
        Self {
            number_of_constraints,
        }
    }

    pub fn validate(&self) -> Result<(), PenaltyError> {
        if self.number_of_constraints == 0 {
            return Err(PenaltyError::Config(
                "number_of_constraints must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
