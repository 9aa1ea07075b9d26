//! MIN-MAX bounded pheromone table.

use crate::error::{AcoError, Result};

/// Per-item pheromone trail, indexed like the working set.
///
/// Values are kept within `[tau_min, tau_max]` at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTable {
    values: Vec<f64>,
    tau_min: f64,
    tau_max: f64,
}

impl PheromoneTable {
    /// Creates a table of `len` trails, all at `tau_max`.
    pub fn new(len: usize, tau_min: f64, tau_max: f64) -> Self {
        Self {
            values: vec![tau_max; len],
            tau_min,
            tau_max,
        }
    }

    /// Resizes to `len` trails and resets every trail to `tau_max`.
    pub fn reset(&mut self, len: usize, tau_min: f64, tau_max: f64) {
        self.tau_min = tau_min;
        self.tau_max = tau_max;
        self.values.clear();
        self.values.resize(len, tau_max);
    }

    /// Pheromone of working-set item `index`.
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.tau_min, self.tau_max)
    }

    /// Evaporates every trail and deposits `1 / best_grade` on the items of
    /// `best`, then clamps to the bounds.
    ///
    /// `tau <- clamp(tau * (1 - evaporation_rate) + deposit, tau_min, tau_max)`
    ///
    /// Runs in O(len) plus O(|best|) regardless of the ant count.
    ///
    /// # Errors
    ///
    /// [`AcoError::CandidateOutOfRange`] if `best` holds an index outside
    /// the table; the trails are left untouched.
    pub fn reinforce(&mut self, best: &[usize], best_grade: f64, evaporation_rate: f64) -> Result<()> {
        let len = self.values.len();
        let mut in_best = vec![false; len];
        for &i in best {
            if i >= len {
                return Err(AcoError::CandidateOutOfRange { index: i, len });
            }
            in_best[i] = true;
        }
        let deposit = 1.0 / best_grade;
        let keep = 1.0 - evaporation_rate;

        for (tau, &hit) in self.values.iter_mut().zip(&in_best) {
            let added = if hit { deposit } else { 0.0 };
            *tau = (*tau * keep + added).clamp(self.tau_min, self.tau_max);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initialized_at_tau_max() {
        let table = PheromoneTable::new(4, 0.1, 10.0);
        assert!(table.values().iter().all(|&t| (t - 10.0).abs() < 1e-12));
    }

    #[test]
    fn test_reinforce_literal_example() {
        // {A, B, C, D}, best = {A, B}, grade 4.0, evaporation 0.1.
        let mut table = PheromoneTable::new(4, 0.1, 10.0);
        table.reinforce(&[0, 1], 4.0, 0.1).unwrap();

        assert!((table.get(0) - 9.25).abs() < 1e-4);
        assert!((table.get(1) - 9.25).abs() < 1e-4);
        assert!((table.get(2) - 9.0).abs() < 1e-4);
        assert!((table.get(3) - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_reinforce_clamps_to_max() {
        let mut table = PheromoneTable::new(2, 0.1, 10.0);
        table.reinforce(&[0], 0.01, 0.1).unwrap();
        assert!((table.get(0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_reinforce_clamps_to_min() {
        let mut table = PheromoneTable::new(2, 0.1, 0.2);
        for _ in 0..100 {
            table.reinforce(&[0], 1e6, 0.5).unwrap();
        }
        assert!((table.get(1) - 0.1).abs() < 1e-12);
        assert!(table.get(0) >= 0.1);
    }

    #[test]
    fn test_reinforce_rejects_out_of_range() {
        let mut table = PheromoneTable::new(3, 0.1, 10.0);
        assert_eq!(
            table.reinforce(&[0, 3], 2.0, 0.1),
            Err(AcoError::CandidateOutOfRange { index: 3, len: 3 })
        );
        assert!(table.values().iter().all(|&t| (t - 10.0).abs() < 1e-12));
    }

    #[test]
    fn test_reset_restores_tau_max() {
        let mut table = PheromoneTable::new(3, 0.1, 10.0);
        table.reinforce(&[1], 2.0, 0.3).unwrap();
        table.reset(5, 0.5, 2.0);
        assert_eq!(table.len(), 5);
        assert_eq!(table.bounds(), (0.5, 2.0));
        assert!(table.values().iter().all(|&t| (t - 2.0).abs() < 1e-12));
    }

    proptest! {
        #[test]
        fn prop_reinforce_stays_within_bounds(
            initial in proptest::collection::vec(0.1f64..10.0, 1..40),
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
            grade in 1e-6f64..1e6,
            evaporation in 0.001f64..0.999,
        ) {
            let len = initial.len();
            let mut table = PheromoneTable { values: initial, tau_min: 0.1, tau_max: 10.0 };
            let best: Vec<usize> = picks.iter().map(|ix| ix.index(len)).collect();
            table.reinforce(&best, grade, evaporation).unwrap();
            for &tau in table.values() {
                prop_assert!((0.1..=10.0).contains(&tau));
            }
        }

        #[test]
        fn prop_evaporation_arithmetic(
            p0 in 0.1f64..10.0,
            evaporation in 0.001f64..0.999,
            grade in 0.01f64..100.0,
        ) {
            let mut table = PheromoneTable { values: vec![p0, p0], tau_min: 0.1, tau_max: 10.0 };
            table.reinforce(&[0], grade, evaporation).unwrap();
            let hit = (p0 * (1.0 - evaporation) + 1.0 / grade).clamp(0.1, 10.0);
            let miss = (p0 * (1.0 - evaporation)).clamp(0.1, 10.0);
            prop_assert!((table.get(0) - hit).abs() < 1e-4);
            prop_assert!((table.get(1) - miss).abs() < 1e-4);
        }
    }
}
