//! reexport for easy use,
//! `use metropolis_rs::prelude::*`
//!

pub use super::{
    error::{ChainInitializationError, EvolvePhase, SimulationError},
    simulation::{Model, MolecularDynamics, MonteCarlo},
    statistics::Observable,
    Real,
};
