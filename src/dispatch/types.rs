//! Plant descriptions consumed by the dispatch collaborators.

/// Generation technology of a plant.
///
/// Only used for reporting; the optimizer sees output, cost and emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlantKind {
    Hydro,
    Wind,
    Solar,
    Steam,
}

/// A power-producing plant with its forecast for the dispatch interval.
///
/// `output_kw` is the instantaneous output expected from the plant if it
/// is switched on, as produced by whatever simulator feeds the dispatcher.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plant {
    pub name: String,
    pub kind: PlantKind,
    /// Forecast instantaneous output (kW).
    pub output_kw: f64,
    /// Production cost per kWh.
    pub cost_per_kwh: f64,
    /// CO₂ emitted per kWh (kg).
    pub co2_per_kwh: f64,
}

impl Plant {
    pub fn new(
        name: impl Into<String>,
        kind: PlantKind,
        output_kw: f64,
        cost_per_kwh: f64,
        co2_per_kwh: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            output_kw,
            cost_per_kwh,
            co2_per_kwh,
        }
    }
}

/// Relative importance of the three dispatch criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchWeights {
    pub cost: f64,
    pub emissions: f64,
    /// Weight of the relative distance between total and target output.
    pub target_distance: f64,
}

impl Default for DispatchWeights {
    fn default() -> Self {
        Self {
            cost: 1.0,
            emissions: 1.0,
            target_distance: 1.0,
        }
    }
}

impl DispatchWeights {
    pub fn new(cost: f64, emissions: f64, target_distance: f64) -> Self {
        Self {
            cost,
            emissions,
            target_distance,
        }
    }

    /// Validates that every weight is finite and non-negative and that at
    /// least one is positive.
    pub fn validate(&self) -> crate::Result<()> {
        let all = [
            ("cost weight", self.cost),
            ("emissions weight", self.emissions),
            ("target_distance weight", self.target_distance),
        ];
        for (field, w) in all {
            if !w.is_finite() || w < 0.0 {
                return Err(crate::AcoError::config(
                    field,
                    format!("must be finite and non-negative, got {w}"),
                ));
            }
        }
        if all.iter().all(|&(_, w)| w == 0.0) {
            return Err(crate::AcoError::config("weights", "must not all be zero"));
        }
        Ok(())
    }
}
