use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::error::PenaltyError;
use crate::penalty::{
    accumulate_violations, denominator, fill_coefficients, fitness_kernel, is_feasible,
    objective_magnitude,
};
use crate::types::{GenerationReport, GenerationStats, Population};

/// Adaptive penalty engine for one evolutionary loop.
///
/// Call [`PenaltyEngine::update_coefficients`] once per generation, then score
/// candidates with [`PenaltyEngine::fitness_of`] or
/// [`PenaltyEngine::fitness_batch`]. Every update fully replaces the previous
/// generation's statistics.
#[derive(Debug, Clone)]
pub struct PenaltyEngine {
    number_of_constraints: usize,
    generation: Option<GenerationStats>,
}

impl PenaltyEngine {
    pub fn new(config: EngineConfig) -> Result<Self, PenaltyError> {
        config.validate()?;
        Ok(Self {
            number_of_constraints: config.number_of_constraints,
            generation: None,
        })
    }

    pub fn with_constraints(number_of_constraints: usize) -> Result<Self, PenaltyError> {
        Self::new(EngineConfig::new(number_of_constraints))
    }

    pub const fn number_of_constraints(&self) -> usize {
        self.number_of_constraints
    }

    pub const fn is_ready(&self) -> bool {
        self.generation.is_some()
    }

    pub const fn stats(&self) -> Option<&GenerationStats> {
        self.generation.as_ref()
    }

    pub fn coefficients(&self) -> Option<&[f64]> {
        self.generation.as_ref().map(|g| g.coefficients.as_slice())
    }

    pub fn sum_violation(&self) -> Option<&[f64]> {
        self.generation.as_ref().map(|g| g.sum_violation.as_slice())
    }

    pub fn average_objective_value(&self) -> Option<f64> {
        self.generation.as_ref().map(|g| g.average_objective_value)
    }

    /// Recomputes the penalty coefficients from one generation.
    ///
    /// Inputs are validated before any state changes, so a rejected call
    /// leaves the previous generation in place.
    pub fn update_coefficients<R: AsRef<[f64]>>(
        &mut self,
        objective_values: &[f64],
        violations: &[R],
    ) -> Result<&[f64], PenaltyError> {
        if objective_values.is_empty() {
            return Err(PenaltyError::EmptyPopulation);
        }
        self.check_batch(objective_values, violations)?;

        let population_size = objective_values.len();
        let magnitude = objective_magnitude(objective_values);
        #[allow(clippy::cast_precision_loss)]
        let average = magnitude / population_size as f64;

        let number_of_constraints = self.number_of_constraints;
        let generation = self
            .generation
            .get_or_insert_with(|| GenerationStats::empty(number_of_constraints));

        accumulate_violations(violations, &mut generation.sum_violation);
        generation.denominator = denominator(&generation.sum_violation);
        fill_coefficients(
            &generation.sum_violation,
            magnitude,
            generation.denominator,
            &mut generation.coefficients,
        );
        generation.population_size = population_size;
        generation.objective_magnitude = magnitude;
        generation.average_objective_value = average;

        debug!(
            population = population_size,
            average,
            denominator = generation.denominator,
            all_feasible = generation.all_feasible(),
            "updated penalty coefficients"
        );

        Ok(&generation.coefficients)
    }

    pub fn update_from(&mut self, population: &Population) -> Result<&[f64], PenaltyError> {
        self.update_coefficients(&population.objective_values, &population.violations)
    }

    /// Penalized fitness of a single candidate. Lower is better.
    pub fn fitness_of(
        &self,
        objective_value: f64,
        violations: &[f64],
    ) -> Result<f64, PenaltyError> {
        let generation = self.ready()?;
        if violations.len() != self.number_of_constraints {
            return Err(PenaltyError::ViolationLength {
                expected: self.number_of_constraints,
                actual: violations.len(),
            });
        }
        Ok(fitness_kernel(
            objective_value,
            violations,
            &generation.coefficients,
            generation.average_objective_value,
        ))
    }

    /// Scores every row into `out`. Nothing is written if any length is off.
    pub fn fitness_batch<R: AsRef<[f64]>>(
        &self,
        objective_values: &[f64],
        violations: &[R],
        out: &mut [f64],
    ) -> Result<(), PenaltyError> {
        let generation = self.ready()?;
        self.check_batch(objective_values, violations)?;
        if out.len() != objective_values.len() {
            return Err(PenaltyError::OutputLength {
                expected: objective_values.len(),
                actual: out.len(),
            });
        }

        for ((slot, &objective_value), row) in out.iter_mut().zip(objective_values).zip(violations)
        {
            *slot = fitness_kernel(
                objective_value,
                row.as_ref(),
                &generation.coefficients,
                generation.average_objective_value,
            );
        }

        trace!(batch = out.len(), "scored candidates");
        Ok(())
    }

    pub fn fitness_all<R: AsRef<[f64]>>(
        &self,
        objective_values: &[f64],
        violations: &[R],
    ) -> Result<Vec<f64>, PenaltyError> {
        let mut out = vec![0.0; objective_values.len()];
        self.fitness_batch(objective_values, violations, &mut out)?;
        Ok(out)
    }

    /// Updates the coefficients from `population` and scores all of it.
    pub fn evaluate_generation(
        &mut self,
        population: &Population,
    ) -> Result<GenerationReport, PenaltyError> {
        self.update_from(population)?;
        let fitness = self.fitness_all(&population.objective_values, &population.violations)?;
        let feasible_count = population
            .violations
            .iter()
            .filter(|row| is_feasible(row))
            .count();
        let stats = self.ready()?.clone();

        debug!(
            population = population.len(),
            feasible = feasible_count,
            "evaluated generation"
        );

        Ok(GenerationReport {
            stats,
            fitness,
            feasible_count,
        })
    }

    fn ready(&self) -> Result<&GenerationStats, PenaltyError> {
        self.generation.as_ref().ok_or(PenaltyError::NotReady)
    }

    fn check_batch<R: AsRef<[f64]>>(
        &self,
        objective_values: &[f64],
        violations: &[R],
    ) -> Result<(), PenaltyError> {
        if objective_values.len() != violations.len() {
            return Err(PenaltyError::PopulationMismatch {
                objectives: objective_values.len(),
                violations: violations.len(),
            });
        }
        for (row, values) in violations.iter().enumerate() {
            let actual = values.as_ref().len();
            if actual != self.number_of_constraints {
                return Err(PenaltyError::RowLength {
                    row,
                    expected: self.number_of_constraints,
                    actual,
                });
            }
        }
        Ok(())
    }
}
