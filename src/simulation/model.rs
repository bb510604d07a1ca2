//! Defines the contract between the Monte Carlo driver and the system it
//! evolves, see the trait [`Model`].

use std::error::Error;

use crate::statistics::Observable;
use crate::Real;

/// Capability interface a simulated system must implement to be driven by
/// [`super::MonteCarlo`].
///
/// A model owns whatever internal configuration it needs (particle positions,
/// temperature, step size parameters) together with exactly one [`Observable`],
/// bound at construction and never reassigned. Between [`Model::trial_step`]
/// and [`Model::update`] / [`Model::update_observable`] the model owns the
/// cached trial state (candidate configuration and the energy terms needed to
/// evaluate acceptance).
///
/// Failures of [`Model::init`] and [`Model::update`] are surfaced as
/// [`Result`] and inspected by the driver, see
/// [`crate::error::SimulationError`].
///
/// # Example
/// see [`super::MolecularDynamics`].
pub trait Model {
    /// Error returned when an operation on the model fails.
    type Error: Error;

    /// Get the name of the model.
    fn name(&self) -> &str;

    /// Establish the model starting configuration.
    ///
    /// # Errors
    /// Returns an error if the model could not be initialized. The driver
    /// must not evolve the model in that case.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Propose a single candidate move from the current configuration and
    /// cache the energy terms needed to evaluate acceptance.
    ///
    /// Must be callable repeatedly, each call overwrites any previously
    /// cached trial.
    ///
    /// # Errors
    /// Returns an error if no trial move could be proposed.
    fn trial_step<R>(&mut self, rng: &mut R) -> Result<(), Self::Error>
    where
        R: rand::Rng + ?Sized;

    /// Probability for the last proposed trial to replace the current
    /// configuration.
    ///
    /// The Metropolis rule: `min(1, exp(-(E_trial - E_current)) * weight)`
    /// clamped to `[0, 1]`, where `weight` is a model specific scalar that
    /// each implementation must document.
    fn probability_of_replacement(&self) -> Real;

    /// Decide acceptance of the last proposed trial using one uniform draw
    /// in `[0, 1)` against [`Model::probability_of_replacement`].
    ///
    /// When `E_trial <= E_current` and the weighting factor is at least 1 the
    /// probability is exactly 1 and every draw accepts.
    fn accept<R>(&self, rng: &mut R) -> bool
    where
        R: rand::Rng + ?Sized,
    {
        rng.gen::<Real>() < self.probability_of_replacement()
    }

    /// Commit the last accepted trial into the persistent configuration.
    /// Only called after [`Model::accept`] returned true.
    ///
    /// # Errors
    /// Returns an error if the commit failed. The driver surfaces it, it is
    /// never silently ignored.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Fold the current trial quantity into the owned observable.
    ///
    /// Called unconditionally once per sampling step, whether the step was
    /// accepted or rejected.
    fn update_observable(&mut self);

    /// Expose the owned observable for inspection.
    fn observable(&self) -> &Observable;
}
