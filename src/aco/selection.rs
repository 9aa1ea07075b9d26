//! Transition probabilities and roulette-wheel pick.
//!
//! The wheel is a prefix-sum array searched with a binary search, so the
//! chosen index does not depend on the order of repeated subtractions.

use crate::error::{AcoError, Result};

/// Classic Ant System transition factor:
/// `tau^alpha * (1 / grade)^beta`.
#[inline]
pub fn factor(tau: f64, grade: f64, alpha: f64, beta: f64) -> f64 {
    tau.powf(alpha) * (1.0 / grade).powf(beta)
}

/// Normalizes `factors` into a probability vector summing to 1.
///
/// # Errors
///
/// [`AcoError::DegenerateProbabilities`] if the factors sum to zero or to
/// a non-finite value.
pub fn probabilities(factors: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = factors.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(AcoError::DegenerateProbabilities { total });
    }
    Ok(factors.iter().map(|&f| f / total).collect())
}

/// Running sums of `probabilities`.
pub fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// Picks the first index whose cumulative probability exceeds `u`.
///
/// `u` is expected in `[0, 1)`. When rounding leaves the last cumulative
/// value at or below `u`, the last index is returned.
///
/// # Panics
///
/// Panics if `cumulative` is empty.
pub fn pick(cumulative: &[f64], u: f64) -> usize {
    assert!(!cumulative.is_empty(), "cannot pick from empty wheel");
    cumulative
        .partition_point(|&c| c <= u)
        .min(cumulative.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_factor() {
        assert!((factor(2.0, 4.0, 1.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((factor(2.0, 0.5, 2.0, 3.0) - 32.0).abs() < 1e-12);
        // Zero exponents neutralize both terms.
        assert!((factor(7.0, 3.0, 0.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_normalize() {
        let p = probabilities(&[1.0, 3.0]).unwrap();
        assert!((p[0] - 0.25).abs() < 1e-12);
        assert!((p[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_degenerate() {
        assert!(matches!(
            probabilities(&[0.0, 0.0]),
            Err(AcoError::DegenerateProbabilities { .. })
        ));
        assert!(probabilities(&[f64::INFINITY, 1.0]).is_err());
        assert!(probabilities(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_pick_boundaries() {
        let wheel = cumulative(&[0.25, 0.25, 0.5]);
        assert_eq!(pick(&wheel, 0.0), 0);
        assert_eq!(pick(&wheel, 0.2499), 0);
        assert_eq!(pick(&wheel, 0.25), 1);
        assert_eq!(pick(&wheel, 0.6), 2);
        assert_eq!(pick(&wheel, 0.999_999), 2);
    }

    #[test]
    fn test_pick_skips_zero_share() {
        let wheel = cumulative(&[0.0, 1.0]);
        assert_eq!(pick(&wheel, 0.0), 1);
    }

    #[test]
    fn test_pick_clamps_on_rounding() {
        let wheel = [0.3, 0.6, 0.999_999_9];
        assert_eq!(pick(&wheel, 0.999_999_95), 2);
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(
            factors in proptest::collection::vec(1e-6f64..1e6, 1..50),
        ) {
            let p = probabilities(&factors).unwrap();
            let sum: f64 = p.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-6);
            for &x in &p {
                prop_assert!((0.0..=1.0).contains(&x));
            }
        }

        #[test]
        fn prop_pick_in_range(
            factors in proptest::collection::vec(1e-3f64..1e3, 1..30),
            u in 0.0f64..1.0,
        ) {
            let wheel = cumulative(&probabilities(&factors).unwrap());
            let i = pick(&wheel, u);
            prop_assert!(i < factors.len());
            if i > 0 {
                prop_assert!(wheel[i - 1] <= u);
            }
        }
    }
}
