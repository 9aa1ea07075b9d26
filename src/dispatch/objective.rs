//! Weighted cost / emissions / target-distance objective.

use super::types::{DispatchWeights, Plant};
use crate::aco::{ObjectiveMinFunction, Subset};
use crate::error::{AcoError, Result};

/// Scores plants and dispatch plans. Lower is better.
///
/// Cost and emissions are normalized by the largest value in the fleet,
/// computed once at construction, so both criteria live in `[0, 1]`.
///
/// - item grade: `w_c * cost/max_cost + w_e * co2/max_co2 + floor`
/// - solution grade: `w_c * mean(cost/max_cost) + w_e * mean(co2/max_co2)
///   + w_d * |target - total| / target + floor`
///
/// `floor` keeps both grades strictly positive.
#[derive(Debug, Clone)]
pub struct DispatchObjective {
    weights: DispatchWeights,
    target_kw: f64,
    floor: f64,
    max_cost: f64,
    max_co2: f64,
}

impl DispatchObjective {
    /// Default positive floor added to every grade.
    pub const DEFAULT_FLOOR: f64 = 1e-3;

    /// Builds the objective for `fleet`, aiming at `target_kw` total output.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] for a non-positive target or invalid weights.
    pub fn new(fleet: &[Plant], target_kw: f64, weights: DispatchWeights) -> Result<Self> {
        weights.validate()?;
        if !target_kw.is_finite() || target_kw <= 0.0 {
            return Err(AcoError::config(
                "target_kw",
                format!("must be finite and positive, got {target_kw}"),
            ));
        }
        let max_cost = fleet.iter().map(|p| p.cost_per_kwh).fold(0.0, f64::max);
        let max_co2 = fleet.iter().map(|p| p.co2_per_kwh).fold(0.0, f64::max);
        Ok(Self {
            weights,
            target_kw,
            floor: Self::DEFAULT_FLOOR,
            max_cost,
            max_co2,
        })
    }

    /// Overrides the positive floor.
    pub fn with_floor(mut self, floor: f64) -> Result<Self> {
        if !floor.is_finite() || floor <= 0.0 {
            return Err(AcoError::config(
                "floor",
                format!("must be finite and positive, got {floor}"),
            ));
        }
        self.floor = floor;
        Ok(self)
    }

    pub fn target_kw(&self) -> f64 {
        self.target_kw
    }

    pub fn weights(&self) -> DispatchWeights {
        self.weights
    }

    fn norm_cost(&self, plant: &Plant) -> f64 {
        normalize(plant.cost_per_kwh, self.max_cost)
    }

    fn norm_co2(&self, plant: &Plant) -> f64 {
        normalize(plant.co2_per_kwh, self.max_co2)
    }
}

fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max).max(0.0)
    } else {
        0.0
    }
}

impl ObjectiveMinFunction<Plant> for DispatchObjective {
    fn grade_item(&self, plant: &Plant) -> f64 {
        self.weights.cost * self.norm_cost(plant)
            + self.weights.emissions * self.norm_co2(plant)
            + self.floor
    }

    fn grade_solution(&self, solution: &Subset<'_, Plant>) -> f64 {
        let n = solution.len();
        let (cost, co2, total_kw) = solution.iter().fold((0.0, 0.0, 0.0), |(c, e, kw), p| {
            (c + self.norm_cost(p), e + self.norm_co2(p), kw + p.output_kw)
        });
        let (mean_cost, mean_co2) = if n > 0 {
            (cost / n as f64, co2 / n as f64)
        } else {
            (0.0, 0.0)
        };
        let distance = (self.target_kw - total_kw).abs() / self.target_kw;

        self.weights.cost * mean_cost
            + self.weights.emissions * mean_co2
            + self.weights.target_distance * distance
            + self.floor
    }
}
