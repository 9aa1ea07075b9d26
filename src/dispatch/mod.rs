//! Plant dispatch: which plants to switch on for the next interval.
//!
//! Realizes the two ACO collaborators for a fleet of [`Plant`]s:
//!
//! - [`EnergyThreshold`]: cumulative forecast output must stay at or below
//!   a limit (relaxation of meeting demand exactly)
//! - [`DispatchObjective`]: weighted blend of normalized cost, normalized
//!   emissions and relative distance from a target output
//!
//! Plant physics (hydro head, wind power curves, irradiance, steam
//! ramping) is out of scope; callers pass the forecast output directly.

mod objective;
mod threshold;
mod types;

pub use objective::DispatchObjective;
pub use threshold::EnergyThreshold;
pub use types::{DispatchWeights, Plant, PlantKind};

use crate::aco::{AcoConfig, AcoEngine, AcoResult};
use crate::error::Result;
use tracing::info;

/// Engine type used for plant dispatch.
pub type DispatchEngine = AcoEngine<Plant, EnergyThreshold, DispatchObjective>;

/// Builds a dispatch engine over `fleet`.
///
/// The threshold limit doubles as the objective's target output.
pub fn dispatch_engine(
    fleet: Vec<Plant>,
    limit_kw: f64,
    weights: DispatchWeights,
    config: AcoConfig,
) -> Result<DispatchEngine> {
    let objective = DispatchObjective::new(&fleet, limit_kw, weights)?;
    AcoEngine::new(fleet, EnergyThreshold::new(limit_kw), objective, config)
}

/// One-shot dispatch plan for `fleet` under `limit_kw`.
pub fn plan_dispatch(
    fleet: Vec<Plant>,
    limit_kw: f64,
    weights: DispatchWeights,
    config: AcoConfig,
) -> Result<AcoResult<Plant>> {
    let mut engine = dispatch_engine(fleet, limit_kw, weights, config)?;
    let plan = engine.execute()?;
    info!(
        plants = plan.best.len(),
        output_kw = plan.best.iter().map(|p| p.output_kw).sum::<f64>(),
        limit_kw,
        grade = plan.best_grade,
        "dispatch planned"
    );
    Ok(plan)
}

/// Synthetic 80-plant fleet in four tiers of 20 identical 100 kW plants.
///
/// Tier `t` (0-based) costs `t + 1` per kWh and emits `t + 1` kg CO₂ per kWh.
/// With a 2000 kW limit the optimal plan is the 20 tier-0 plants.
#[cfg(test)]
pub(crate) fn tiered_fleet() -> Vec<Plant> {
    let kinds = [PlantKind::Hydro, PlantKind::Wind, PlantKind::Solar, PlantKind::Steam];
    (0..80)
        .map(|i| {
            let tier = i / 20;
            let level = (tier + 1) as f64;
            Plant::new(format!("t{tier}-{i}"), kinds[tier], 100.0, level, level)
        })
        .collect()
}
