//! ACO execution loop.
//!
//! [`AcoEngine`] owns the working set, both collaborators, the pheromone
//! table and the random generator. Each iteration builds `ant_count`
//! solutions against a frozen pheromone table, then reinforces the table
//! with the iteration-best solution only.

use super::config::AcoConfig;
use super::pheromone::PheromoneTable;
use super::selection::{cumulative, factor, pick, probabilities};
use super::types::{Constraints, ObjectiveMinFunction, Subset};
use crate::error::{AcoError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, trace};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult<T> {
    /// Items of the returned solution, in pick order.
    pub best: Vec<T>,

    /// Working-set indices of the returned solution, in pick order.
    pub best_indices: Vec<usize>,

    /// Grade of the returned solution. `f64::INFINITY` when empty.
    pub best_grade: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Iteration-best grade at the end of each iteration.
    pub grade_history: Vec<f64>,
}

impl<T> AcoResult<T> {
    fn empty() -> Self {
        Self {
            best: Vec::new(),
            best_indices: Vec::new(),
            best_grade: f64::INFINITY,
            iterations: 0,
            grade_history: Vec::new(),
        }
    }

    /// Whether no item was selected.
    pub fn is_empty(&self) -> bool {
        self.best_indices.is_empty()
    }
}

/// One ant's constructed solution and its grade.
#[derive(Debug, Clone)]
struct Ant {
    path: Vec<usize>,
    grade: f64,
}

/// MIN-MAX Ant System for subset selection.
///
/// # Usage
///
/// ```ignore
/// let mut engine = AcoEngine::new(plants, EnergyThreshold::new(5_000.0), objective,
///     AcoConfig::default().with_seed(42))?;
/// let result = engine.execute()?;
/// println!("selected {} plants, grade {}", result.best.len(), result.best_grade);
/// ```
///
/// A single engine may run [`execute`](AcoEngine::execute) repeatedly. Each
/// run resets the pheromone table; parameters changed through the setters
/// are kept and are validated again at the start of the next run.
pub struct AcoEngine<T, C, O, R = StdRng> {
    working_set: Vec<T>,
    constraints: C,
    objective: O,
    config: AcoConfig,
    pheromones: PheromoneTable,
    rng: R,
}

impl<T, C, O> AcoEngine<T, C, O, StdRng>
where
    C: Constraints<T>,
    O: ObjectiveMinFunction<T>,
{
    /// Creates an engine seeded from `config.seed`, or from entropy when unset.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] if `config` does not validate.
    pub fn new(working_set: Vec<T>, constraints: C, objective: O, config: AcoConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(working_set, constraints, objective, config, rng)
    }

    /// Reseeds the internal generator.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = create_rng(seed);
    }
}

impl<T, C, O, R> AcoEngine<T, C, O, R>
where
    C: Constraints<T>,
    O: ObjectiveMinFunction<T>,
    R: Rng,
{
    /// Creates an engine driven by an injected generator.
    ///
    /// `config.seed` is ignored; the caller controls `rng`.
    pub fn with_rng(
        working_set: Vec<T>,
        constraints: C,
        objective: O,
        config: AcoConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let pheromones = PheromoneTable::new(working_set.len(), config.tau_min, config.tau_max);
        Ok(Self {
            working_set,
            constraints,
            objective,
            config,
            pheromones,
            rng,
        })
    }

    // ---- accessors ----

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn working_set(&self) -> &[T] {
        &self.working_set
    }

    pub fn constraints(&self) -> &C {
        &self.constraints
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Current pheromone trails, parallel to the working set.
    pub fn pheromones(&self) -> &PheromoneTable {
        &self.pheromones
    }

    // ---- mutators ----

    pub fn set_alpha(&mut self, alpha: f64) {
        self.config.alpha = alpha;
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.config.beta = beta;
    }

    pub fn set_evaporation_rate(&mut self, rate: f64) {
        self.config.evaporation_rate = rate;
    }

    pub fn set_ant_count(&mut self, n: usize) {
        self.config.ant_count = n;
    }

    pub fn set_tau_bounds(&mut self, tau_min: f64, tau_max: f64) {
        self.config.tau_min = tau_min;
        self.config.tau_max = tau_max;
    }

    pub fn set_max_iterations(&mut self, n: usize) {
        self.config.max_iterations = n;
    }

    pub fn set_keep_global_best(&mut self, keep: bool) {
        self.config.keep_global_best = keep;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Replaces every tunable at once. The generator is left untouched.
    pub fn set_config(&mut self, config: AcoConfig) {
        self.config = config;
    }

    /// Replaces the working set and resets the pheromone table to match.
    pub fn set_working_set(&mut self, working_set: Vec<T>) {
        self.working_set = working_set;
        self.initialize_pheromones();
    }

    pub fn set_constraints(&mut self, constraints: C) {
        self.constraints = constraints;
    }

    pub fn set_objective(&mut self, objective: O) {
        self.objective = objective;
    }

    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    // ---- algorithm ----

    /// Resets every trail to `tau_max`.
    pub fn initialize_pheromones(&mut self) {
        self.pheromones.reset(
            self.working_set.len(),
            self.config.tau_min,
            self.config.tau_max,
        );
    }

    /// Builds one ant's solution against the current pheromone table.
    ///
    /// Returns working-set indices in pick order; empty when the working
    /// set is empty.
    pub fn construct_solution(&mut self) -> Result<Vec<usize>> {
        if self.working_set.is_empty() {
            return Ok(Vec::new());
        }
        let heuristic = item_grades(&self.working_set, &self.objective)?;
        construct_ant(
            &self.working_set,
            &self.constraints,
            self.pheromones.values(),
            &heuristic,
            &self.config,
            &mut self.rng,
        )
    }

    /// Evaporates all trails and reinforces the items of `best` by
    /// `1 / grade_solution(best)`. Returns that grade.
    ///
    /// # Errors
    ///
    /// [`AcoError::CandidateOutOfRange`] for an index outside the working
    /// set, [`AcoError::InvalidSolutionGrade`] for a non-positive grade.
    pub fn update_pheromones(&mut self, best: &[usize]) -> Result<f64> {
        let len = self.working_set.len();
        if let Some(&index) = best.iter().find(|&&i| i >= len) {
            return Err(AcoError::CandidateOutOfRange { index, len });
        }
        let grade = grade_solution(&self.working_set, &self.objective, best)?;
        self.pheromones
            .reinforce(best, grade, self.config.evaporation_rate)?;
        Ok(grade)
    }

    /// Runs the full optimization.
    ///
    /// Returns the best solution of the final iteration, or of the whole
    /// run when `keep_global_best` is set. An empty working set or zero
    /// iterations yields an empty result.
    ///
    /// # Errors
    ///
    /// Configuration errors, and any collaborator contract violation
    /// detected during construction or grading.
    pub fn execute(&mut self) -> Result<AcoResult<T>>
    where
        T: Clone + Send + Sync,
    {
        self.config.validate()?;
        self.initialize_pheromones();

        if self.working_set.is_empty() || self.config.max_iterations == 0 {
            debug!(
                items = self.working_set.len(),
                max_iterations = self.config.max_iterations,
                "nothing to optimize"
            );
            return Ok(AcoResult::empty());
        }

        let heuristic = item_grades(&self.working_set, &self.objective)?;

        let mut returned: Option<Ant> = None;
        let mut grade_history = Vec::with_capacity(self.config.max_iterations);

        for iteration in 0..self.config.max_iterations {
            let ants = self.construct_ants(&heuristic)?;
            let best = iteration_best(ants);

            self.pheromones
                .reinforce(&best.path, best.grade, self.config.evaporation_rate)?;

            debug!(
                iteration,
                grade = best.grade,
                size = best.path.len(),
                "iteration best"
            );
            grade_history.push(best.grade);

            returned = match returned {
                Some(prev) if self.config.keep_global_best && prev.grade <= best.grade => Some(prev),
                _ => Some(best),
            };
        }

        let Some(best) = returned else {
            return Ok(AcoResult::empty());
        };

        info!(
            iterations = self.config.max_iterations,
            grade = best.grade,
            size = best.path.len(),
            global_best = self.config.keep_global_best,
            "aco run finished"
        );

        Ok(AcoResult {
            best: best
                .path
                .iter()
                .map(|&i| self.working_set[i].clone())
                .collect(),
            best_indices: best.path,
            best_grade: best.grade,
            iterations: self.config.max_iterations,
            grade_history,
        })
    }

    /// Builds and grades every ant of one iteration.
    ///
    /// The pheromone table is only read here.
    fn construct_ants(&mut self, heuristic: &[f64]) -> Result<Vec<Ant>>
    where
        T: Send + Sync,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            // Independent stream per ant, drawn before any ant starts.
            let seeds: Vec<u64> = (0..self.config.ant_count)
                .map(|_| self.rng.random())
                .collect();
            let items = &self.working_set;
            let constraints = &self.constraints;
            let objective = &self.objective;
            let tau = self.pheromones.values();
            let config = &self.config;
            return seeds
                .into_par_iter()
                .enumerate()
                .map(|(ant, seed)| -> Result<Ant> {
                    let mut rng = create_rng(seed);
                    let path = construct_ant(items, constraints, tau, heuristic, config, &mut rng)?;
                    let grade = grade_solution(items, objective, &path)?;
                    trace!(ant, grade, size = path.len(), "ant built");
                    Ok(Ant { path, grade })
                })
                .collect();
        }

        let mut ants = Vec::with_capacity(self.config.ant_count);
        for ant in 0..self.config.ant_count {
            let path = construct_ant(
                &self.working_set,
                &self.constraints,
                self.pheromones.values(),
                heuristic,
                &self.config,
                &mut self.rng,
            )?;
            let grade = grade_solution(&self.working_set, &self.objective, &path)?;
            trace!(ant, grade, size = path.len(), "ant built");
            ants.push(Ant { path, grade });
        }
        Ok(ants)
    }
}

/// Creates a seeded standard generator.
pub(crate) fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Lowest-grade ant; the first one wins ties.
fn iteration_best(ants: Vec<Ant>) -> Ant {
    ants.into_iter()
        .reduce(|best, ant| if ant.grade < best.grade { ant } else { best })
        .unwrap_or(Ant {
            path: Vec::new(),
            grade: f64::INFINITY,
        })
}

/// Grades every working-set item once.
fn item_grades<T, O: ObjectiveMinFunction<T>>(items: &[T], objective: &O) -> Result<Vec<f64>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let grade = objective.grade_item(item);
            if grade.is_finite() && grade > 0.0 {
                Ok(grade)
            } else {
                Err(AcoError::InvalidItemGrade { index, grade })
            }
        })
        .collect()
}

fn grade_solution<T, O: ObjectiveMinFunction<T>>(
    items: &[T],
    objective: &O,
    path: &[usize],
) -> Result<f64> {
    let grade = objective.grade_solution(&Subset::new(items, path));
    if grade.is_finite() && grade > 0.0 {
        Ok(grade)
    } else {
        Err(AcoError::InvalidSolutionGrade { grade })
    }
}

/// One ant: random seed item, then roulette picks until the constraints
/// run out of candidates.
fn construct_ant<T, C, R>(
    items: &[T],
    constraints: &C,
    tau: &[f64],
    heuristic: &[f64],
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Vec<usize>>
where
    C: Constraints<T>,
    R: Rng,
{
    let len = items.len();
    let mut chosen = vec![false; len];

    let seed = rng.random_range(0..len);
    chosen[seed] = true;
    let mut path = vec![seed];

    let mut candidates = constraints.initialize_candidates(&Subset::new(items, &path));
    let mut factors = Vec::with_capacity(candidates.len());

    while !candidates.is_empty() {
        factors.clear();
        for &c in &candidates {
            if c >= len {
                return Err(AcoError::CandidateOutOfRange { index: c, len });
            }
            if chosen[c] {
                return Err(AcoError::DuplicateItem { index: c });
            }
            factors.push(factor(tau[c], heuristic[c], config.alpha, config.beta));
        }

        let wheel = cumulative(&probabilities(&factors)?);
        let u: f64 = rng.random();
        let picked = candidates[pick(&wheel, u)];

        chosen[picked] = true;
        path.push(picked);
        candidates = constraints.update_candidates(&Subset::new(items, &path), candidates);
    }

    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
