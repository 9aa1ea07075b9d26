//! Parameter sweeps over a single engine instance.
//!
//! Calibration runs mutate one [`AcoEngine`] through its setters, execute
//! it several times per parameter value, and measure how far the returned
//! grades land from a known-optimal grade (root-mean-square error).

mod sweep;

pub use sweep::{rmse, Sweep, SweepParameter, SweepPoint};
