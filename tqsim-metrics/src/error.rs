//! Warning types for the theoretical model

use thiserror::Error;

/// The offered load is at or above capacity, so the closed-form M/M/1
/// formulas do not converge.
///
/// This is a displayable outcome, not a defect: empirical results from a
/// finite run stay valid and are reported alongside it.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("system is unstable: rho = {rho:.4} >= 1, no steady state exists")]
pub struct InstabilityWarning {
    /// The offered load `lambda / mu`.
    pub rho: f64,
}
