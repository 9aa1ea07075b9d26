//! Ant Colony Optimization for subset selection (ACO-SS).
//!
//! A MIN-MAX Ant System variant over a generic working set. The user
//! supplies two collaborators:
//!
//! - [`Constraints`]: produces and narrows the candidate pool, enforcing
//!   a feasibility relaxation
//! - [`ObjectiveMinFunction`]: grades single items (heuristic) and whole
//!   solutions (ranking and pheromone deposit)
//!
//! [`AcoEngine`] runs `max_iterations` rounds of `ant_count` independent
//! constructions and reinforces the pheromone table with the best ant of
//! each round. Trails stay within `[tau_min, tau_max]`.
//!
//! # Submodules
//!
//! - [`selection`]: transition factors, probability vector, prefix-sum roulette
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"
//! - Leguizamón & Michalewicz (1999), "A New Version of Ant System for
//!   Subset Problems"

mod config;
mod pheromone;
mod runner;
pub mod selection;
mod types;

pub use config::AcoConfig;
pub use pheromone::PheromoneTable;
pub use runner::{AcoEngine, AcoResult};
pub use types::{Constraints, ObjectiveMinFunction, Subset};
