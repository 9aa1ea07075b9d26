//! Sweep execution and RMSE scoring.

use crate::aco::{AcoEngine, Constraints, ObjectiveMinFunction};
use crate::error::{AcoError, Result};
use rand::Rng;
use tracing::{debug, warn};

/// Tunable varied by a [`Sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepParameter {
    EvaporationRate,
    Alpha,
    Beta,
    /// Rounded to the nearest integer.
    AntCount,
    /// Rounded to the nearest integer.
    MaxIterations,
}

impl SweepParameter {
    fn apply<T, C, O, R>(self, engine: &mut AcoEngine<T, C, O, R>, value: f64)
    where
        C: Constraints<T>,
        O: ObjectiveMinFunction<T>,
        R: Rng,
    {
        match self {
            SweepParameter::EvaporationRate => engine.set_evaporation_rate(value),
            SweepParameter::Alpha => engine.set_alpha(value),
            SweepParameter::Beta => engine.set_beta(value),
            SweepParameter::AntCount => engine.set_ant_count(value.round().max(0.0) as usize),
            SweepParameter::MaxIterations => {
                engine.set_max_iterations(value.round().max(0.0) as usize)
            }
        }
    }
}

/// Outcome of all runs at one parameter value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub value: f64,
    pub mean_grade: f64,
    pub best_grade: f64,
    /// RMSE of the run grades against the known optimum. NaN when no run
    /// selected anything.
    pub rmse: f64,
}

/// Root-mean-square error of `values` against `reference`.
///
/// Returns NaN for an empty slice, so a value that never produced a
/// solution cannot rank as the best point of a sweep.
pub fn rmse(values: &[f64], reference: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let sq: f64 = values.iter().map(|v| (v - reference).powi(2)).sum();
    (sq / values.len() as f64).sqrt()
}

/// Varies one parameter while holding the rest of the engine fixed.
///
/// # Examples
///
/// ```ignore
/// let sweep = Sweep::new(SweepParameter::EvaporationRate, vec![0.05, 0.1, 0.2])
///     .with_repeats(10);
/// let points = sweep.run(&mut engine, optimal_grade)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub parameter: SweepParameter,
    pub values: Vec<f64>,
    /// Runs per value.
    pub repeats: usize,
}

impl Sweep {
    pub fn new(parameter: SweepParameter, values: Vec<f64>) -> Self {
        Self {
            parameter,
            values,
            repeats: 5,
        }
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Runs the sweep, leaving the engine at the last swept value.
    ///
    /// Runs that select nothing are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if `repeats` is zero; otherwise the first
    /// error returned by the engine (for example a swept value that fails
    /// validation).
    pub fn run<T, C, O, R>(
        &self,
        engine: &mut AcoEngine<T, C, O, R>,
        optimal_grade: f64,
    ) -> Result<Vec<SweepPoint>>
    where
        T: Clone + Send + Sync,
        C: Constraints<T>,
        O: ObjectiveMinFunction<T>,
        R: Rng,
    {
        if self.repeats == 0 {
            return Err(AcoError::config("repeats", "must be positive"));
        }

        let mut points = Vec::with_capacity(self.values.len());
        for &value in &self.values {
            self.parameter.apply(engine, value);

            let mut grades = Vec::with_capacity(self.repeats);
            for run in 0..self.repeats {
                let result = engine.execute()?;
                if result.is_empty() {
                    warn!(parameter = ?self.parameter, value, run, "run selected nothing");
                    continue;
                }
                grades.push(result.best_grade);
            }

            let point = SweepPoint {
                value,
                mean_grade: mean(&grades),
                best_grade: grades.iter().cloned().fold(f64::INFINITY, f64::min),
                rmse: rmse(&grades, optimal_grade),
            };
            debug!(
                parameter = ?self.parameter,
                value,
                mean = point.mean_grade,
                rmse = point.rmse,
                "sweep point"
            );
            points.push(point);
        }
        Ok(points)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        f64::NAN
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
