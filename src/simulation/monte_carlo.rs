//! The Monte-Carlo driver, see [`MonteCarlo`].

use super::Model;
use crate::error::{EvolvePhase, SimulationError};

/// Number of requested steps per warm up iteration, i.e. a run of `n` steps
/// does `n / 100` burn-in iterations first.
const WARM_UP_DIVISOR: usize = 100;

/// The Metropolis-Hastings algorithm in its minimal version.
///
/// The driver borrows exactly one model and one random number generator and
/// holds no accumulated state of its own, all accumulated state lives in the
/// model's [`crate::statistics::Observable`]. Construction immediately
/// initializes the model and fails if the model does.
///
/// # Example
/// ```
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use metropolis_rs::rng;
/// use metropolis_rs::simulation::{Model, MolecularDynamics, MonteCarlo};
///
/// let mut rng = rng::rand_from_seed(0); // change with your seed
/// let mut model = MolecularDynamics::new("MolecularDynamics", 10, 1_f64)?;
///
/// let mut mc = MonteCarlo::new(&mut model, &mut rng)?;
/// mc.evolve(1_000)?;
///
/// assert_eq!(model.observable().steps(), 1_000);
/// #     Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MonteCarlo<'a, M, R>
where
    M: Model,
    R: rand::Rng + ?Sized,
{
    model: &'a mut M,
    rng: &'a mut R,
}

impl<'a, M, R> MonteCarlo<'a, M, R>
where
    M: Model,
    R: rand::Rng + ?Sized,
{
    /// Bind a model and a random number generator and initialize the model.
    ///
    /// # Errors
    /// Returns [`SimulationError::InitializationFailure`] if the model's
    /// [`Model::init`] fails; an unusable model is never evolved.
    pub fn new(model: &'a mut M, rng: &'a mut R) -> Result<Self, SimulationError<M::Error>> {
        model
            .init()
            .map_err(SimulationError::InitializationFailure)?;
        Ok(Self { model, rng })
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        self.model
    }

    /// Get a mutable reference to the rng.
    pub fn rng_mut(&mut self) -> &mut R {
        self.rng
    }

    /// One accept-reject iteration: propose a trial, decide acceptance with
    /// one uniform draw, commit when accepted.
    fn accept_reject(
        &mut self,
        phase: EvolvePhase,
        step: usize,
    ) -> Result<(), SimulationError<M::Error>> {
        self.model
            .trial_step(self.rng)
            .map_err(|error| SimulationError::TrialStepFailure(phase, step, error))?;
        if self.model.accept(self.rng) {
            self.model
                .update()
                .map_err(|error| SimulationError::CommitFailure(phase, step, error))?;
        }
        Ok(())
    }

    /// Evolve the Markov chain for `number_of_steps` recorded steps.
    ///
    /// First a warm up phase of `number_of_steps / 100` iterations lets the
    /// chain approach its stationary distribution without recording any
    /// statistics (zero iterations when `number_of_steps < 100`). Then the
    /// sampling phase does exactly `number_of_steps` iterations, folding the
    /// sampled quantity into the observable after every iteration whether
    /// the trial was accepted or not.
    ///
    /// Rejected trials are normal control flow, not errors, and no failed
    /// operation is retried.
    ///
    /// # Errors
    /// Surfaces the first model failure together with the phase and step it
    /// occurred at, see [`SimulationError`].
    pub fn evolve(&mut self, number_of_steps: usize) -> Result<(), SimulationError<M::Error>> {
        // do a few cycles just to warm up!
        for step in 0..number_of_steps / WARM_UP_DIVISOR {
            self.accept_reject(EvolvePhase::WarmUp, step)?;
        }

        // real cycle
        for step in 0..number_of_steps {
            self.accept_reject(EvolvePhase::Sampling, step)?;
            self.model.update_observable();
        }
        Ok(())
    }
}

impl<'a, M, R> AsRef<M> for MonteCarlo<'a, M, R>
where
    M: Model,
    R: rand::Rng + ?Sized,
{
    fn as_ref(&self) -> &M {
        self.model()
    }
}

impl<'a, M, R> AsMut<R> for MonteCarlo<'a, M, R>
where
    M: Model,
    R: rand::Rng + ?Sized,
{
    fn as_mut(&mut self) -> &mut R {
        self.rng_mut()
    }
}
