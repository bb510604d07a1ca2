//! provide statistical tools, see [`Observable`].

use std::fmt::{self, Display};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Real;

/// Running statistical record of a sampled quantity.
///
/// The accumulator keeps the number of samples, the running sum of the
/// sampled quantity and of its square, and derives from them the mean
/// estimate and a standard error estimate after every sample:
/// ```text
/// steps += 1
/// w  += x
/// w2 += x * x
/// value     = w / steps
/// value_err = sqrt((w2 / steps - value) / steps)
/// ```
/// `value` and `value_err` are always derived from `w`, `w2` and `steps`,
/// they are never set independently.
///
/// # Known limitation
/// The error estimator is the biased "mean of squares minus mean" form
/// without numerical stability correction: in particular `value_err` is NaN
/// whenever `w2 / steps < value`. A Welford style accumulation would be
/// preferable but changes the numeric output, so the formula above is kept
/// bit for bit.
///
/// # Example
/// ```
/// use metropolis_rs::statistics::Observable;
///
/// let mut obs = Observable::new();
/// obs.record(1_f64);
/// obs.record(3_f64);
/// assert_eq!(obs.steps(), 2);
/// assert_eq!(obs.w(), 4_f64);
/// assert_eq!(obs.w2(), 10_f64);
/// assert_eq!(obs.value(), 2_f64);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Observable {
    /// Number of recorded samples.
    steps: usize,
    /// Running sum of the sampled quantity.
    w: Real,
    /// Running sum of the squares of the sampled quantity.
    w2: Real,
    /// Current mean estimate, `w / steps`.
    value: Real,
    /// Current standard error estimate.
    value_err: Real,
}

impl Observable {
    /// Create a zero initialized accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            steps: 0,
            w: 0_f64,
            w2: 0_f64,
            value: 0_f64,
            value_err: 0_f64,
        }
    }

    getter_copy!(
        const,
        /// Get the number of recorded samples.
        steps,
        usize
    );

    getter_copy!(
        const,
        /// Get the running sum of the sampled quantity.
        w,
        Real
    );

    getter_copy!(
        const,
        /// Get the running sum of squares of the sampled quantity.
        w2,
        Real
    );

    getter_copy!(
        const,
        /// Get the current mean estimate.
        value,
        Real
    );

    getter_copy!(
        const,
        /// Get the current standard error estimate.
        value_err,
        Real
    );

    /// Fold the sampled quantity `x` into the running statistics and
    /// recompute the derived mean and error estimates.
    #[allow(clippy::suboptimal_flops)] // x * x + w2 as mul_add changes the bit pattern
    pub fn record(&mut self, x: Real) {
        self.steps += 1;
        self.w += x;
        self.w2 += x * x;
        let steps = self.steps as Real;
        self.value = self.w / steps;
        self.value_err = ((self.w2 / steps - self.value) / steps).sqrt();
    }
}

impl Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{00B1} {}", self.value, self.value_err)
    }
}
