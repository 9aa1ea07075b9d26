//! Ant colony subset selection.
//!
//! Provides a generic MIN-MAX Ant System for choosing a near-optimal subset
//! of interchangeable items under a feasibility relaxation:
//!
//! - **ACO engine** ([`aco`]): iterated probabilistic construction by a
//!   colony of ants, with iteration-best pheromone reinforcement bounded
//!   to `[tau_min, tau_max]`. Users plug in a `Constraints` and an
//!   `ObjectiveMinFunction`.
//! - **Plant dispatch** ([`dispatch`]): collaborators for choosing which
//!   power plants to run so that combined output stays under an energy
//!   threshold while cost, emissions and distance from a target output
//!   are minimized.
//! - **Calibration** ([`calibration`]): parameter sweeps over a single
//!   engine instance, scored by RMSE against a known-optimal grade.
//!
//! # Architecture
//!
//! The engine contains no domain concepts; items are addressed by index
//! into the working set and only the two collaborator traits see the
//! items themselves. Runs are reproducible through an explicit seed or an
//! injected generator. With the `parallel` feature, the ants of one
//! iteration can be built on the rayon pool.

pub mod aco;
pub mod calibration;
pub mod dispatch;
mod error;

pub use error::{AcoError, Result};
