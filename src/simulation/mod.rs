//! Module for the Monte-Carlo simulation, see the trait [`Model`] and the
//! driver [`MonteCarlo`].
//!
//! This work by taking a model and progressively changing its configuration,
//! one randomly proposed trial move at a time, accepting or rejecting each
//! move with the Metropolis criterion.

pub mod model;
pub mod molecular_dynamics;
pub mod monte_carlo;

pub use model::*;
pub use molecular_dynamics::*;
pub use monte_carlo::*;
