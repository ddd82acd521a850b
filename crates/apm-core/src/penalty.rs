//! Numeric kernels of the adaptive penalty method.
//!
//! ```text
//! k_j = |Σ f(x)| / Σ_l <v_l>²  ·  <v_j>
//! F(x) = f(x)                         if x is feasible
//!      = max(f(x), <f>) + Σ_j k_j v_j  over violated j otherwise
//! ```
//!
//! where `<v_j>` sums only the positive violations of constraint `j` over the
//! population and `<f>` is `|Σ f(x)| / P`.

use crate::error::PenaltyError;

/// Positive part of a violation. NaN is kept so it reaches the coefficients.
fn violated_amount(violation: f64) -> f64 {
    if violation <= 0.0 {
        0.0
    } else {
        violation
    }
}

pub fn is_feasible(violations: &[f64]) -> bool {
    !violations.iter().any(|&v| v > 0.0)
}

/// `|Σ f(x)|`: the population's objective sum, taken absolute after summing.
pub fn objective_magnitude(objective_values: &[f64]) -> f64 {
    objective_values.iter().sum::<f64>().abs()
}

pub(crate) fn accumulate_violations<R: AsRef<[f64]>>(rows: &[R], sum_violation: &mut [f64]) {
    sum_violation.fill(0.0);
    for row in rows {
        for (total, &v) in sum_violation.iter_mut().zip(row.as_ref()) {
            *total += violated_amount(v);
        }
    }
}

pub fn denominator(sum_violation: &[f64]) -> f64 {
    sum_violation.iter().map(|v| v * v).sum()
}

pub(crate) fn fill_coefficients(
    sum_violation: &[f64],
    objective_magnitude: f64,
    denominator: f64,
    out: &mut [f64],
) {
    for (coefficient, &total) in out.iter_mut().zip(sum_violation) {
        *coefficient = if denominator == 0.0 {
            0.0
        } else {
            (objective_magnitude / denominator) * total
        };
    }
}

/// Penalty coefficients for per-constraint violation totals.
///
/// A zero denominator means no constraint was violated anywhere in the
/// population and every coefficient is zero.
pub fn coefficients(sum_violation: &[f64], objective_magnitude: f64) -> Vec<f64> {
    let mut out = vec![0.0; sum_violation.len()];
    fill_coefficients(
        sum_violation,
        objective_magnitude,
        denominator(sum_violation),
        &mut out,
    );
    out
}

pub(crate) fn fitness_kernel(
    objective_value: f64,
    violations: &[f64],
    coefficients: &[f64],
    average_objective_value: f64,
) -> f64 {
    let mut infeasible = false;
    let mut penalty = 0.0;
    for (&coefficient, &violation) in coefficients.iter().zip(violations) {
        if violation > 0.0 {
            infeasible = true;
            penalty += coefficient * violation;
        }
    }

    if infeasible {
        objective_value.max(average_objective_value) + penalty
    } else {
        objective_value
    }
}

/// Fitness of one candidate under externally held coefficients.
///
/// Feasible candidates keep their objective value. Infeasible ones are
/// lifted to at least the population average before the penalty is added.
pub fn penalized_fitness(
    objective_value: f64,
    violations: &[f64],
    coefficients: &[f64],
    average_objective_value: f64,
) -> Result<f64, PenaltyError> {
    if violations.len() != coefficients.len() {
        return Err(PenaltyError::ViolationLength {
            expected: coefficients.len(),
            actual: violations.len(),
        });
    }
    Ok(fitness_kernel(
        objective_value,
        violations,
        coefficients,
        average_objective_value,
    ))
}
