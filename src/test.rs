//! Module for testes

use std::error::Error;
use std::fmt::{self, Display};

use super::{
    error::{EvolvePhase, SimulationError},
    rng,
    simulation::{Model, MolecularDynamics, MonteCarlo},
    statistics::Observable,
    Real,
};

const SEED_RNG: u64 = 0x45_78_93_f4_4a_b0_67_f0;

/// Error of [`CountingModel`], tagging which operation was made to fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
struct TestFailure(&'static str);

impl Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test failure in {}", self.0)
    }
}

impl Error for TestFailure {}

/// Model counting how often the driver calls each operation, with a fixed
/// acceptance probability and switchable failures.
#[derive(Clone, Debug, Default)]
struct CountingModel {
    proba: Real,
    fail_init: bool,
    fail_update: bool,
    trial_steps: usize,
    updates: usize,
    observable: Observable,
}

impl CountingModel {
    fn new(proba: Real) -> Self {
        Self {
            proba,
            ..Self::default()
        }
    }
}

impl Model for CountingModel {
    type Error = TestFailure;

    fn name(&self) -> &str {
        "counting"
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.fail_init {
            return Err(TestFailure("init"));
        }
        Ok(())
    }

    fn trial_step<R>(&mut self, _rng: &mut R) -> Result<(), Self::Error>
    where
        R: rand::Rng + ?Sized,
    {
        self.trial_steps += 1;
        Ok(())
    }

    fn probability_of_replacement(&self) -> Real {
        self.proba
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        if self.fail_update {
            return Err(TestFailure("update"));
        }
        self.updates += 1;
        Ok(())
    }

    fn update_observable(&mut self) {
        self.observable.record(1_f64);
    }

    fn observable(&self) -> &Observable {
        &self.observable
    }
}

#[test]
fn evolve_zero_steps_is_idempotent() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    let mut model = CountingModel::new(1_f64);
    let mut mc = MonteCarlo::new(&mut model, &mut rng).unwrap();
    mc.evolve(0).unwrap();
    assert_eq!(model.trial_steps, 0);
    assert_eq!(model.updates, 0);
    assert_eq!(*model.observable(), Observable::new());
}

#[test]
fn warm_up_boundary() {
    let mut rng = rng::rand_from_seed(SEED_RNG);

    // below one hundred steps there is no warm up at all
    let mut model = CountingModel::new(1_f64);
    MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(99)
        .unwrap();
    assert_eq!(model.trial_steps, 99);
    assert_eq!(model.observable().steps(), 99);

    // 250 steps get 2 warm up iterations on top of the 250 recorded ones
    let mut model = CountingModel::new(1_f64);
    MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(250)
        .unwrap();
    assert_eq!(model.trial_steps, 252);
    assert_eq!(model.observable().steps(), 250);
}

#[test]
fn rejected_steps_are_still_recorded() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    let mut model = CountingModel::new(0_f64);
    MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(250)
        .unwrap();
    assert_eq!(model.trial_steps, 252);
    assert_eq!(model.updates, 0);
    assert_eq!(model.observable().steps(), 250);
}

#[test]
fn acceptance_probability_one_always_accepts() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    let mut model = CountingModel::new(1_f64);
    MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(500)
        .unwrap();
    // every uniform draw in [0, 1) is below a probability of exactly 1
    assert_eq!(model.updates, model.trial_steps);
}

#[test]
fn acceptance_is_one_when_trial_energy_not_higher() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    let mut model = MolecularDynamics::new("md", 10, 1_f64).unwrap();
    model.init().unwrap();
    // a zero displacement leaves the energy unchanged, the Metropolis
    // probability is then exactly min(1, exp(0) * beta) = 1
    model.set_delta(0_f64);
    model.trial_step(&mut rng).unwrap();
    assert_eq!(model.probability_of_replacement(), 1_f64);
    for _ in 0_u32..32_u32 {
        assert!(model.accept(&mut rng));
    }
}

#[test]
fn initialization_failure_aborts_construction() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    let mut model = CountingModel::new(1_f64);
    model.fail_init = true;
    let result = MonteCarlo::new(&mut model, &mut rng);
    assert_eq!(
        result.err(),
        Some(SimulationError::InitializationFailure(TestFailure("init")))
    );
}

#[test]
fn commit_failure_is_surfaced_with_phase_and_step() {
    let mut rng = rng::rand_from_seed(SEED_RNG);

    let mut model = CountingModel::new(1_f64);
    model.fail_update = true;
    let error = MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(10)
        .unwrap_err();
    assert_eq!(
        error,
        SimulationError::CommitFailure(EvolvePhase::Sampling, 0, TestFailure("update"))
    );

    // with at least one warm up iteration the failure is reported there
    let mut model = CountingModel::new(1_f64);
    model.fail_update = true;
    let error = MonteCarlo::new(&mut model, &mut rng)
        .unwrap()
        .evolve(100)
        .unwrap_err();
    assert_eq!(
        error,
        SimulationError::CommitFailure(EvolvePhase::WarmUp, 0, TestFailure("update"))
    );
    assert_eq!(
        format!("{}", error),
        "commit failure during warm up step 0: test failure in update"
    );
}

#[test]
fn determinism_under_fixed_seed() {
    let run = |seed: u64, steps: usize| -> Observable {
        let mut rng = rng::rand_from_seed(seed);
        let mut model = MolecularDynamics::new("md", 20, 1_f64).unwrap();
        MonteCarlo::new(&mut model, &mut rng)
            .unwrap()
            .evolve(steps)
            .unwrap();
        *model.observable()
    };
    let first = run(42, 500);
    let second = run(42, 500);
    assert_eq!(first.steps(), second.steps());
    assert_eq!(first.w().to_bits(), second.w().to_bits());
    assert_eq!(first.w2().to_bits(), second.w2().to_bits());
    assert_eq!(first.value().to_bits(), second.value().to_bits());
    assert_eq!(first.value_err().to_bits(), second.value_err().to_bits());

    let other_seed = run(43, 500);
    assert_ne!(first.w().to_bits(), other_seed.w().to_bits());
}

#[test]
fn single_particle_scenario() {
    let mut rng = rng::rand_from_seed(SEED_RNG);
    // one particle at position 0 whose both neighbours are itself. The only
    // possible trial sits at delta = 0.5 with energy 2 * 0.5^2 = 0.5,
    // recorded whatever the accept draw gives.
    let mut model = MolecularDynamics::new("toy", 1, 1_f64).unwrap();
    let mut mc = MonteCarlo::new(&mut model, &mut rng).unwrap();
    // 1 step: no warm up iteration, one sampling iteration
    mc.evolve(1).unwrap();

    let obs = model.observable();
    let expected_energy = 2_f64 * 0.5_f64 * 0.5_f64;
    assert_eq!(obs.steps(), 1);
    assert_eq!(obs.w(), expected_energy);
    assert_eq!(obs.w2(), expected_energy * expected_energy);
    assert_eq!(obs.value(), expected_energy);
    // per the error formula, not an assumed zero: w2 / steps - value is
    // negative here so the estimate is NaN
    let expected_err = ((obs.w2() / 1_f64 - obs.value()) / 1_f64).sqrt();
    assert!(expected_err.is_nan());
    assert!(obs.value_err().is_nan());
}
