//! Empirical statistics derived from a recorded run
//!
//! The engine records a piecewise-constant occupancy trajectory (one
//! [`HistorySample`] per processed event plus the initial sample). The
//! statistics here are exact integrals of that step function, not
//! midpoint or trapezoidal approximations: over each interval between
//! consecutive samples the occupancy that held is the one recorded at the
//! interval's start.

use serde::{Deserialize, Serialize};
use tqsim_core::{HistorySample, RunReport, SimTime};
use tracing::debug;

/// Final derived statistics for one run. Computed once; immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Timestamp of the last processed event.
    pub total_time: SimTime,
    /// Fraction of elapsed time the server was busy, in `[0, 1]`.
    pub server_utilization: f64,
    /// Time-averaged number of customers in the system.
    pub avg_customers_in_system: f64,
    pub final_customers_in_system: usize,
    pub final_queue_length: usize,
    pub server_busy: bool,
}

impl SimulationResult {
    /// Derive the full result from a run's report and history.
    ///
    /// A zero-length run (no events processed) yields zero utilization
    /// and zero average occupancy by definition.
    pub fn compute(report: &RunReport, history: &[HistorySample]) -> Self {
        let total_units = report.total_time.as_units();

        let server_utilization = if total_units > 0.0 {
            report.server_busy_time.as_secs_f64() / total_units
        } else {
            0.0
        };

        let avg_customers_in_system = if total_units > 0.0 {
            occupancy_area(history, report.total_time) / total_units
        } else {
            0.0
        };

        debug!(
            total_time = %report.total_time,
            server_utilization,
            avg_customers_in_system,
            "computed run statistics"
        );

        Self {
            total_time: report.total_time,
            server_utilization,
            avg_customers_in_system,
            final_customers_in_system: report.final_customers_in_system,
            final_queue_length: report.final_queue_length,
            server_busy: report.server_busy,
        }
    }
}

/// Exact area under the occupancy step function up to `total_time`.
///
/// Sums occupancy-at-interval-start times interval length for each pair
/// of consecutive samples, then adds a trailing term covering
/// `[last_sample, total_time]` at the final occupancy. Today the run ends
/// exactly at the last sample so the trailing term is zero-width, but the
/// calculation supports a fixed horizon extending past the last event.
pub fn occupancy_area(history: &[HistorySample], total_time: SimTime) -> f64 {
    let mut area = 0.0;
    for pair in history.windows(2) {
        let width = pair[1].time.duration_since(pair[0].time).as_secs_f64();
        area += pair[0].customers_in_system as f64 * width;
    }
    if let Some(last) = history.last() {
        let tail = total_time.duration_since(last.time).as_secs_f64();
        area += last.customers_in_system as f64 * tail;
    }
    area
}
