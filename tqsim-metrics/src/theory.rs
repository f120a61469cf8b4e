//! Closed-form M/M/1 model for comparison with empirical runs

use crate::error::InstabilityWarning;
use serde::{Deserialize, Serialize};
use tqsim_core::SimulationConfig;
use tracing::warn;

/// Steady-state M/M/1 metrics in the stable regime (`rho < 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mm1Metrics {
    /// Offered load `lambda / mu`.
    pub rho: f64,
    /// Mean number of customers in the system.
    pub l: f64,
    /// Mean time a customer spends in the system.
    pub w: f64,
    /// Mean time a customer waits in the queue.
    pub wq: f64,
}

/// Closed-form M/M/1 model with arrival rate `lambda` and service rate
/// `mu`.
///
/// Evaluation is pure: the same model always produces the same numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mm1Model {
    lambda: f64,
    mu: f64,
}

impl Mm1Model {
    /// Create a model from explicit rates.
    ///
    /// # Panics
    ///
    /// Panics if either rate is not positive; rates come from validated
    /// configuration.
    pub fn new(lambda: f64, mu: f64) -> Self {
        assert!(lambda > 0.0, "arrival rate must be positive, got {lambda}");
        assert!(mu > 0.0, "service rate must be positive, got {mu}");
        Self { lambda, mu }
    }

    /// Create a model from a run configuration: `lambda` is the
    /// arithmetic mean of the per-slot arrival rates, `mu` is
    /// `1 / mean_service_time`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.mean_arrival_rate(), config.service_rate())
    }

    /// Mean arrival rate `lambda`.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Service rate `mu`.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Offered load `rho = lambda / mu`.
    pub fn rho(&self) -> f64 {
        self.lambda / self.mu
    }

    /// Steady-state metrics, or an [`InstabilityWarning`] when
    /// `rho >= 1`.
    ///
    /// Instability is an expected, displayable outcome: no L/W/Wq exist,
    /// but empirical results from a finite run remain valid.
    pub fn metrics(&self) -> Result<Mm1Metrics, InstabilityWarning> {
        let rho = self.rho();
        if rho >= 1.0 {
            warn!(rho, "queue has no steady state");
            return Err(InstabilityWarning { rho });
        }

        let l = rho / (1.0 - rho);
        let w = l / self.lambda;
        let wq = rho * w;
        Ok(Mm1Metrics { rho, l, w, wq })
    }
}
