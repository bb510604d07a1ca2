//! One dimensional periodic topology used by models whose configuration is a
//! bounded collection with neighbour lookups.
//!
//! Indexing a neighbour of the first or last element of a collection with raw
//! `index ± 1` arithmetic is out of range at the boundaries. [`CyclicChain`]
//! makes the wrap-around policy explicit: the chain is periodic, the neighbour
//! above the last site is the first site and the neighbour below the first
//! site is the last one.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::ChainInitializationError;

/// A cyclic chain of sites. Does not store the sites but is used to index them.
///
/// More precisely if the chain has N sites we can move alongside the chain
/// going though site 0, 1, ... N-1. The next step in the same direction goes
/// back to the site at 0.
///
/// This contain very few data and can be cloned at almost no cost.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CyclicChain {
    /// The number of sites.
    len: usize,
}

impl CyclicChain {
    /// Create a chain with `len` sites.
    ///
    /// # Errors
    /// Returns [`ChainInitializationError::EmptySites`] if `len` is 0,
    /// an empty chain has no valid index.
    ///
    /// # Example
    /// ```
    /// # use metropolis_rs::chain::CyclicChain;
    /// # use metropolis_rs::error::ChainInitializationError;
    /// assert!(CyclicChain::new(4).is_ok());
    /// assert_eq!(CyclicChain::new(0), Err(ChainInitializationError::EmptySites));
    /// ```
    pub const fn new(len: usize) -> Result<Self, ChainInitializationError> {
        if len == 0 {
            return Err(ChainInitializationError::EmptySites);
        }
        Ok(Self { len })
    }

    getter_copy!(
        const,
        /// Get the number of sites.
        len,
        usize
    );

    /// Reduce an arbitrary index to a valid site index.
    #[must_use]
    #[inline]
    pub const fn site(&self, index: usize) -> usize {
        index % self.len
    }

    /// The site above `index`, wrapping back to 0 after the last site.
    ///
    /// # Example
    /// ```
    /// # use metropolis_rs::chain::CyclicChain;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let chain = CyclicChain::new(3)?;
    /// assert_eq!(chain.up(0), 1);
    /// assert_eq!(chain.up(2), 0);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    #[inline]
    pub const fn up(&self, index: usize) -> usize {
        (index + 1) % self.len
    }

    /// The site below `index`, wrapping to the last site below 0.
    ///
    /// # Example
    /// ```
    /// # use metropolis_rs::chain::CyclicChain;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let chain = CyclicChain::new(3)?;
    /// assert_eq!(chain.down(0), 2);
    /// assert_eq!(chain.down(2), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    #[inline]
    pub const fn down(&self, index: usize) -> usize {
        (index + self.len - 1) % self.len
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ChainInitializationError;

    #[test]
    fn chain_creation() {
        assert_eq!(CyclicChain::new(0), Err(ChainInitializationError::EmptySites));
        let chain = CyclicChain::new(1).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn chain_wrap_around() {
        let chain = CyclicChain::new(5).unwrap();
        for i in 0_usize..5_usize {
            assert_eq!(chain.up(chain.down(i)), i);
            assert_eq!(chain.down(chain.up(i)), i);
        }
        assert_eq!(chain.up(4), 0);
        assert_eq!(chain.down(0), 4);
        assert_eq!(chain.site(7), 2);
    }

    #[test]
    fn chain_single_site() {
        // a chain of one site is its own neighbour in both directions
        let chain = CyclicChain::new(1).unwrap();
        assert_eq!(chain.up(0), 0);
        assert_eq!(chain.down(0), 0);
    }
}
