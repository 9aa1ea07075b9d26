//! Collaborator contracts consumed by the ACO engine.
//!
//! The engine is generic over the item type `T` and talks to the problem
//! only through [`Constraints`] and [`ObjectiveMinFunction`]. Items are
//! addressed by their index in the working set; [`Subset`] pairs those
//! indices with the working set so collaborators can read the items.

/// Borrowed view of a partial or complete solution.
///
/// Holds the working set and the ordered indices of the chosen items.
#[derive(Debug)]
pub struct Subset<'a, T> {
    items: &'a [T],
    indices: &'a [usize],
}

impl<T> Clone for Subset<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Subset<'_, T> {}

impl<'a, T> Subset<'a, T> {
    /// Creates a view over `indices` into `items`.
    ///
    /// Every index must be in range; [`Subset::iter`] panics otherwise.
    pub fn new(items: &'a [T], indices: &'a [usize]) -> Self {
        Self { items, indices }
    }

    /// The full working set.
    pub fn universe(&self) -> &'a [T] {
        self.items
    }

    /// Chosen indices, in pick order.
    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }

    /// Number of chosen items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether working-set index `index` is part of the solution.
    ///
    /// Linear scan; solutions are short relative to the working set.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Iterates the chosen items in pick order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let items = self.items;
        let indices = self.indices;
        indices.iter().map(move |&i| &items[i])
    }

    /// The most recently chosen index.
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

/// Scores items and solutions. Lower is better.
///
/// Both grades must be finite and strictly positive: the engine uses
/// `1 / grade` as heuristic desirability and as pheromone deposit, and
/// rejects anything else with a typed error.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{ObjectiveMinFunction, Subset};
///
/// struct Weight;
///
/// impl ObjectiveMinFunction<f64> for Weight {
///     fn grade_item(&self, item: &f64) -> f64 {
///         *item
///     }
///
///     fn grade_solution(&self, solution: &Subset<'_, f64>) -> f64 {
///         1.0 + solution.iter().sum::<f64>()
///     }
/// }
/// ```
pub trait ObjectiveMinFunction<T>: Send + Sync {
    /// Local unfitness of a single item, independent of any partial solution.
    fn grade_item(&self, item: &T) -> f64;

    /// Aggregate unfitness of a solution.
    fn grade_solution(&self, solution: &Subset<'_, T>) -> f64;
}

/// Produces and narrows the candidate pool while an ant builds a solution.
///
/// Implementations enforce a feasibility *relaxation* (for example
/// `sum <= limit` rather than `sum == limit`) so that an incomplete search
/// still yields a usable solution.
///
/// # Termination
///
/// Construction ends only when the candidate list is empty. An
/// implementation that never empties it makes the engine loop forever.
/// The chosen item must be removed by [`update_candidates`]; re-offering
/// it is reported as [`AcoError::DuplicateItem`](crate::AcoError::DuplicateItem).
///
/// [`update_candidates`]: Constraints::update_candidates
pub trait Constraints<T>: Send + Sync {
    /// Initial pool for an ant whose solution holds exactly one seeded item.
    ///
    /// The seed is not excluded automatically.
    fn initialize_candidates(&self, solution: &Subset<'_, T>) -> Vec<usize>;

    /// Narrows `candidates` after `solution.last()` was appended.
    ///
    /// Must drop the chosen item and every item that became infeasible.
    fn update_candidates(&self, solution: &Subset<'_, T>, candidates: Vec<usize>) -> Vec<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_view() {
        let items = ['a', 'b', 'c', 'd'];
        let picked = [2, 0];
        let subset = Subset::new(&items, &picked);

        assert_eq!(subset.len(), 2);
        assert!(subset.contains(0));
        assert!(!subset.contains(1));
        assert_eq!(subset.last(), Some(0));
        assert_eq!(subset.iter().collect::<String>(), "ca");
        assert_eq!(subset.universe().len(), 4);
    }

    #[test]
    fn test_subset_empty() {
        let items: [u8; 0] = [];
        let subset = Subset::new(&items, &[]);
        assert!(subset.is_empty());
        assert_eq!(subset.last(), None);
    }
}
