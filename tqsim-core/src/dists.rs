//! Exponential variate generation via inverse transform sampling.
//!
//! Inter-arrival and service times in an M/M/1 system are exponentially
//! distributed. Sampling is done by inverting the CDF: for a uniform draw
//! `u` in `[0, 1)`, the variate is `-ln(1 - u) / rate`. Each sample
//! consumes exactly one draw from the injected [`UniformSource`], so a run
//! is fully determined by the source's seed.

use crate::error::DomainError;
use crate::randomness::UniformSource;
use std::time::Duration;

/// Exponential distribution with rate parameter `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create a distribution with the given rate (events per time unit).
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive. Rates derive from validated
    /// configuration, so a bad rate here is a programmer error.
    pub fn new(rate: f64) -> Self {
        assert!(rate > 0.0, "rate must be positive, got {rate}");
        Self { rate }
    }

    /// Create a distribution from its mean (time units per event).
    ///
    /// # Panics
    ///
    /// Panics if `mean` is not positive.
    pub fn from_mean(mean: f64) -> Self {
        assert!(mean > 0.0, "mean must be positive, got {mean}");
        Self::new(1.0 / mean)
    }

    /// The rate parameter.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The mean of the distribution, `1 / rate`.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Sample one variate, consuming exactly one uniform draw.
    ///
    /// A draw outside `[0, 1)` (including exactly 1, which would hit the
    /// logarithm singularity) is a [`DomainError`]: the source is broken.
    pub fn sample(&self, source: &mut dyn UniformSource) -> Result<f64, DomainError> {
        let u = source.next_uniform();
        if !(0.0..1.0).contains(&u) {
            return Err(DomainError::UniformOutOfRange { draw: u });
        }
        Ok(-(1.0 - u).ln() / self.rate)
    }

    /// Sample one variate as a [`Duration`] interval.
    pub fn sample_interval(&self, source: &mut dyn UniformSource) -> Result<Duration, DomainError> {
        Ok(Duration::from_secs_f64(self.sample(source)?))
    }
}
