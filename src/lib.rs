//! # metropolis-rs
//!
//! Minimal Metropolis-Hastings Monte Carlo simulation harness.
//!
//! This library provides a generic accept-reject evolution loop over a pluggable
//! physical model. The model is anything implementing the [`simulation::Model`]
//! trait: it proposes trial moves, evaluates the Metropolis acceptance
//! probability, commits accepted moves and folds the sampled quantity into an
//! [`statistics::Observable`]. The driver [`simulation::MonteCarlo`] owns the
//! step-count policy: a warm up (burn-in) phase of a hundredth of the requested
//! steps followed by the sampling phase proper.
//!
//! **Features**:
//! - Generic model contract, the driver is written once;
//! - Typed errors surfacing which step of the evolution failed;
//! - Reproducible runs under a fixed seed;
//! - Serde support;
//! - Native rust;
//!
//! ## Usage
//!
//! ```
//! use metropolis_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = metropolis_rs::rng::rand_from_seed(0);
//! let mut model = MolecularDynamics::new("MolecularDynamics", 100, 1_f64)?;
//!
//! let mut mc = MonteCarlo::new(&mut model, &mut rng)?;
//! mc.evolve(10_000)?;
//!
//! let pressure = model.observable();
//! println!("{}", pressure);
//! assert_eq!(pressure.steps(), 10_000);
//! #     Ok(())
//! # }
//! ```
//!
//! ## Discussion about Random Number Generators (RNGs)
//!
//! This library use the trait [`rand::RngCore`] any time a random number
//! generator is needed. The choice of RNG is up to the user of the library.
//! The model contract only requires a uniform `f64` draw in `[0, 1)` and a
//! full-range integer draw, both provided by [`rand::Rng`].
//!
//! Some of the possible choice :
//! - **Recomanded** [`rand_xoshiro::Xoshiro256PlusPlus`]
//! Non-cryptographic. It has good performance and statistical quality,
//! reproducible, and has useful `jump` function. See [`rng`].
//! - [`rand::rngs::ThreadRng`] a CSPRNG. The data is not reproducible and it is
//! reseeded often. It is however slow.
//! - [`rand::rngs::StdRng`] cryptographic secure, can be seeded.
//! It is determinist but not reproducible between platform. It is however slow.
//!
//! Note that the determinism guarantee (same seed, same model configuration,
//! same number of steps, bit identical final observable) only holds for
//! reproducible generators like the xoshiro family.

#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_possible_wrap)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::cognitive_complexity)]
#![warn(clippy::float_cmp_const)]
#![warn(clippy::implicit_saturating_sub)]
#![warn(clippy::imprecise_flops)]
#![warn(clippy::large_types_passed_by_value)]
#![warn(clippy::macro_use_imports)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::todo)]
#![warn(clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::unseparated_literal_suffix)]
#![warn(clippy::unused_self)]
#![warn(clippy::missing_errors_doc)]
#![warn(missing_docs)]

extern crate rand;
extern crate rand_distr;
extern crate rand_xoshiro;
#[cfg(feature = "serde-serialize")]
extern crate serde;

pub use rand::{Rng, SeedableRng};
pub use rand_distr::Distribution;

#[macro_use]
mod macro_def;
pub mod chain;
pub mod error;
pub mod prelude;
pub mod rng;
pub mod simulation;
pub mod statistics;

#[cfg(test)]
mod test;

/// alias for [`f64`]
pub type Real = f64;
