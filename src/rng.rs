//! Helpers to create the recommended random number generator.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Create a [`Xoshiro256PlusPlus`] seeded from entropy. Not reproducible.
#[must_use]
pub fn rand_from_entropy() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::from_entropy()
}

/// Create a [`Xoshiro256PlusPlus`] from a seed, for reproducible simulations.
#[must_use]
pub fn rand_from_seed(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
