//! defines different error types.

use core::fmt::{Debug, Display};
use std::error::Error;

/// The phase of the evolution loop an error occurred in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EvolvePhase {
    /// The burn-in iterations done before any statistics are collected.
    WarmUp,
    /// The iterations that record the observable.
    Sampling,
}

impl Display for EvolvePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WarmUp => write!(f, "warm up"),
            Self::Sampling => write!(f, "sampling"),
        }
    }
}

/// Error returned by the Monte Carlo driver, wrapping the model error
/// with the context of where the evolution failed.
///
/// Every model failure is surfaced together with the phase and the zero-based
/// step index it happened at, nothing is silently ignored.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SimulationError<Error> {
    /// The model could not establish its starting configuration.
    /// The driver must not evolve in that case.
    InitializationFailure(Error),
    /// A trial move could not be proposed at the given phase and step.
    TrialStepFailure(EvolvePhase, usize, Error),
    /// An accepted trial could not be committed at the given phase and step.
    CommitFailure(EvolvePhase, usize, Error),
}

impl<Error: Display> Display for SimulationError<Error> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InitializationFailure(error) => {
                write!(f, "model initialization failure: {}", error)
            }
            Self::TrialStepFailure(phase, step, error) => {
                write!(f, "trial step failure during {} step {}: {}", phase, step, error)
            }
            Self::CommitFailure(phase, step, error) => {
                write!(f, "commit failure during {} step {}: {}", phase, step, error)
            }
        }
    }
}

impl<E: Display + Debug + Error + 'static> Error for SimulationError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InitializationFailure(error) => Some(error),
            Self::TrialStepFailure(_, _, error) => Some(error),
            Self::CommitFailure(_, _, error) => Some(error),
        }
    }
}

/// Error while initialising a [`crate::chain::CyclicChain`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChainInitializationError {
    /// the number of sites must be stricly greater than 0.
    EmptySites,
}

impl Display for ChainInitializationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptySites => write!(
                f,
                "chain initialization error : the number of sites must be stricly greater than 0"
            ),
        }
    }
}

impl Error for ChainInitializationError {}

/// Error returned by the [`crate::simulation::MolecularDynamics`] model.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MolecularDynamicsError {
    /// an operation that needs a cached trial was called before any
    /// trial step was proposed.
    NoTrialState,
}

impl Display for MolecularDynamicsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoTrialState => write!(f, "no trial state: no trial step was proposed"),
        }
    }
}

impl Error for MolecularDynamicsError {}
