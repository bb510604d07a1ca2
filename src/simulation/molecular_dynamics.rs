//! Sample client of the [`Model`] contract: a one dimensional chain of
//! particles with periodic boundary, see [`MolecularDynamics`].

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use super::Model;
use crate::chain::CyclicChain;
use crate::error::{ChainInitializationError, MolecularDynamicsError};
use crate::statistics::Observable;
use crate::Real;

/// Default displacement of a trial move.
const DEFAULT_DELTA: Real = 0.5_f64;

/// A particle of the chain, position and velocity (one dimensional).
///
/// The velocity is carried by the configuration but no move of this model
/// changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Particle {
    position: Real,
    velocity: Real,
}

impl Particle {
    getter_copy!(
        const,
        /// Get the position.
        position,
        Real
    );

    getter_copy!(
        const,
        /// Get the velocity.
        velocity,
        Real
    );
}

/// Cached trial state between a proposal and its commit or rejection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct Trial {
    /// Site of the displaced particle.
    site: usize,
    /// Candidate position of the displaced particle.
    position: Real,
    /// Energy of the current configuration around the site.
    energy_current: Real,
    /// Energy of the candidate configuration around the site.
    energy_trial: Real,
}

/// Imaginary system of a chain of one dimensional particles.
///
/// A trial move picks a particle uniformly and displaces it by the `delta`
/// parameter. The energy around a site is the sum of the squared distances to
/// its two neighbours, with periodic boundary through [`CyclicChain`].
///
/// The observable records the trial energy of every sampling step, accepted
/// or not.
///
/// # Weighting factor
/// The Metropolis exponential is multiplied by `beta`:
/// `min(1, exp(-(E_trial - E_current)) * beta)`. For `beta >= 1` a trial that
/// does not increase the energy is always accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MolecularDynamics {
    name: String,
    chain: CyclicChain,
    particles: Vec<Particle>,
    delta: Real,
    beta: Real,
    trial: Option<Trial>,
    observable: Observable,
}

impl MolecularDynamics {
    /// Create a chain of `number_of_particles` particles at inverse
    /// temperature scale `beta`, with a zero initialized observable bound
    /// for the lifetime of the model.
    ///
    /// The trial displacement starts at `0.5`, see
    /// [`MolecularDynamics::set_delta`].
    ///
    /// # Errors
    /// Returns [`ChainInitializationError::EmptySites`] if
    /// `number_of_particles` is 0.
    pub fn new(
        name: &str,
        number_of_particles: usize,
        beta: Real,
    ) -> Result<Self, ChainInitializationError> {
        let chain = CyclicChain::new(number_of_particles)?;
        Ok(Self {
            name: name.to_owned(),
            chain,
            particles: vec![Particle::default(); number_of_particles],
            delta: DEFAULT_DELTA,
            beta,
            trial: None,
            observable: Observable::new(),
        })
    }

    getter!(
        const,
        /// Get the chain topology.
        chain,
        CyclicChain
    );

    getter!(
        /// Get the particle configuration.
        particles,
        Vec<Particle>
    );

    getter_copy!(
        const,
        /// Get the trial displacement.
        delta,
        Real
    );

    getter_copy!(
        const,
        /// Get the weighting factor of the acceptance rule.
        beta,
        Real
    );

    /// Set the trial displacement.
    pub fn set_delta(&mut self, delta: Real) {
        self.delta = delta;
    }

    /// Energy around `site` when the particle there sits at `position`,
    /// the neighbours staying at their current positions.
    fn energy_around(&self, site: usize, position: Real) -> Real {
        let up = self.particles[self.chain.up(site)].position;
        let down = self.particles[self.chain.down(site)].position;
        (position - up) * (position - up) + (down - position) * (down - position)
    }
}

impl Model for MolecularDynamics {
    type Error = MolecularDynamicsError;

    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        // all particles equidistant, at rest
        for (index, particle) in self.particles.iter_mut().enumerate() {
            *particle = Particle {
                position: index as Real,
                velocity: 0_f64,
            };
        }
        self.trial = None;
        Ok(())
    }

    fn trial_step<R>(&mut self, rng: &mut R) -> Result<(), Self::Error>
    where
        R: rand::Rng + ?Sized,
    {
        // pick a site with a full range integer draw reduced by the chain,
        // then displace the particle there
        let site = self.chain.site(rng.gen::<usize>());
        let position = self.particles[site].position + self.delta;
        self.trial = Some(Trial {
            site,
            position,
            energy_current: self.energy_around(site, self.particles[site].position),
            energy_trial: self.energy_around(site, position),
        });
        Ok(())
    }

    fn probability_of_replacement(&self) -> Real {
        match self.trial {
            Some(trial) => ((trial.energy_current - trial.energy_trial).exp() * self.beta)
                .min(1_f64)
                .max(0_f64),
            None => 0_f64,
        }
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        let trial = self.trial.ok_or(MolecularDynamicsError::NoTrialState)?;
        self.particles[trial.site].position = trial.position;
        Ok(())
    }

    fn update_observable(&mut self) {
        // the trial energy plays the role of the sampled pressure, recorded
        // whether the move was committed or not
        if let Some(trial) = self.trial {
            self.observable.record(trial.energy_trial);
        }
    }

    fn observable(&self) -> &Observable {
        &self.observable
    }
}
