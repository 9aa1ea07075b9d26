//! Energy-threshold feasibility relaxation.

use super::types::Plant;
use crate::aco::{Constraints, Subset};

/// Limits the cumulative forecast output of the selected plants.
///
/// A plant stays a candidate while it is not selected and its output fits
/// in the remaining headroom `limit_kw - sum(selected outputs)`. This is a
/// relaxation of "meet the demand exactly": every prefix of a solution
/// stays within the limit, so an ant stopped early still holds a valid
/// dispatch.
///
/// The seeded plant is admitted unconditionally, even when its output
/// alone exceeds the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyThreshold {
    limit_kw: f64,
}

impl EnergyThreshold {
    pub fn new(limit_kw: f64) -> Self {
        Self { limit_kw }
    }

    pub fn limit_kw(&self) -> f64 {
        self.limit_kw
    }

    fn headroom(&self, solution: &Subset<'_, Plant>) -> f64 {
        self.limit_kw - solution.iter().map(|p| p.output_kw).sum::<f64>()
    }
}

impl Constraints<Plant> for EnergyThreshold {
    fn initialize_candidates(&self, solution: &Subset<'_, Plant>) -> Vec<usize> {
        let headroom = self.headroom(solution);
        solution
            .universe()
            .iter()
            .enumerate()
            .filter(|&(i, p)| !solution.contains(i) && p.output_kw <= headroom)
            .map(|(i, _)| i)
            .collect()
    }

    fn update_candidates(&self, solution: &Subset<'_, Plant>, mut candidates: Vec<usize>) -> Vec<usize> {
        let headroom = self.headroom(solution);
        let plants = solution.universe();
        let chosen = solution.last();
        candidates.retain(|&i| Some(i) != chosen && plants[i].output_kw <= headroom);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::PlantKind;

    fn plants() -> Vec<Plant> {
        [300.0, 500.0, 200.0, 800.0]
            .iter()
            .enumerate()
            .map(|(i, &kw)| Plant::new(format!("p{i}"), PlantKind::Steam, kw, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn test_initialize_excludes_seed_and_oversized() {
        let plants = plants();
        let threshold = EnergyThreshold::new(1000.0);
        let seeded = [1];
        let candidates = threshold.initialize_candidates(&Subset::new(&plants, &seeded));
        // Headroom 500: p0 and p2 fit, p3 does not, p1 is the seed.
        assert_eq!(candidates, vec![0, 2]);
    }

    #[test]
    fn test_update_drops_chosen_and_infeasible() {
        let plants = plants();
        let threshold = EnergyThreshold::new(1000.0);
        let path = [1, 0];
        let candidates = threshold.update_candidates(&Subset::new(&plants, &path), vec![0, 2]);
        // Headroom 200 after p1 + p0: only p2 fits.
        assert_eq!(candidates, vec![2]);

        let path = [1, 0, 2];
        let candidates = threshold.update_candidates(&Subset::new(&plants, &path), candidates);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_oversized_seed_has_no_candidates() {
        let plants = plants();
        let threshold = EnergyThreshold::new(600.0);
        let seeded = [3];
        let candidates = threshold.initialize_candidates(&Subset::new(&plants, &seeded));
        assert!(candidates.is_empty());
    }
}
