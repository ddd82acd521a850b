use serde::{Deserialize, Serialize};

/// One generation of evaluated candidates.
///
/// Row `i` of `violations` belongs to `objective_values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub objective_values: Vec<f64>,
    pub violations: Vec<Vec<f64>>,
}

impl Population {
    pub fn new(objective_values: Vec<f64>, violations: Vec<Vec<f64>>) -> Self {
        Self {
            objective_values,
            violations,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objective_values: Vec::with_capacity(capacity),
            violations: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, objective_value: f64, violations: impl Into<Vec<f64>>) {
        self.objective_values.push(objective_value);
        self.violations.push(violations.into());
    }

    pub fn len(&self) -> usize {
        self.objective_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objective_values.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.objective_values
            .iter()
            .copied()
            .zip(self.violations.iter().map(Vec::as_slice))
    }
}

impl FromIterator<(f64, Vec<f64>)> for Population {
    fn from_iter<I: IntoIterator<Item = (f64, Vec<f64>)>>(iter: I) -> Self {
        let (objective_values, violations) = iter.into_iter().unzip();
        Self {
            objective_values,
            violations,
        }
    }
}

/// Population statistics from the latest coefficient update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub population_size: usize,
    /// `|Σ f(x)|` over the population.
    pub objective_magnitude: f64,
    pub average_objective_value: f64,
    /// Per-constraint sum of positive violations.
    pub sum_violation: Vec<f64>,
    pub denominator: f64,
    pub coefficients: Vec<f64>,
}

impl GenerationStats {
    pub(crate) fn empty(number_of_constraints: usize) -> Self {
        Self {
            population_size: 0,
            objective_magnitude: 0.0,
            average_objective_value: 0.0,
            sum_violation: vec![0.0; number_of_constraints],
            denominator: 0.0,
            coefficients: vec![0.0; number_of_constraints],
        }
    }

    /// No candidate in the generation violated any constraint.
    pub fn all_feasible(&self) -> bool {
        self.denominator == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub stats: GenerationStats,
    /// Penalized fitness, one per candidate, in population order.
    pub fitness: Vec<f64>,
    pub feasible_count: usize,
}
