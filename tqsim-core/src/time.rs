//! Simulation time management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

/// A point in simulation time with nanosecond precision.
///
/// `SimTime` counts nanoseconds since the run started. The engine is
/// unit-agnostic: one simulated second corresponds to one "time unit" of
/// whatever the caller's parameters are expressed in (the ticket-counter
/// presentation treats a unit as a minute). Using a fixed-point backing
/// keeps the event queue totally ordered with no NaN corner cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// The start of the simulation.
    pub const ZERO: SimTime = SimTime(0);

    /// Create a `SimTime` from raw nanoseconds.
    pub const fn from_nanos(nanos: u64) -> Self {
        SimTime(nanos)
    }

    /// Create a `SimTime` from whole time units.
    pub const fn from_secs(secs: u64) -> Self {
        SimTime(secs * 1_000_000_000)
    }

    /// Create a `SimTime` from a fractional number of time units.
    ///
    /// # Panics
    ///
    /// Panics if `units` is negative, non-finite, or too large to represent.
    pub fn from_units(units: f64) -> Self {
        if !units.is_finite() {
            panic!("SimTime cannot be created from non-finite value: {units}");
        }
        if units < 0.0 {
            panic!("SimTime cannot be negative: {units}");
        }
        SimTime::from_duration(Duration::from_secs_f64(units))
    }

    /// Create a `SimTime` from a `Duration` offset from the start.
    pub fn from_duration(duration: Duration) -> Self {
        SimTime(duration.as_nanos() as u64)
    }

    /// The offset from the simulation start as a `Duration`.
    pub fn as_duration(self) -> Duration {
        Duration::from_nanos(self.0)
    }

    /// Raw nanosecond value.
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// The time expressed in fractional time units.
    pub fn as_units(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Elapsed interval since `earlier` (zero if `earlier` is later).
    pub fn duration_since(self, earlier: SimTime) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: Duration) -> Self::Output {
        SimTime(self.0.saturating_add(rhs.as_nanos() as u64))
    }
}

impl Sub<SimTime> for SimTime {
    type Output = Duration;

    fn sub(self, rhs: SimTime) -> Self::Output {
        self.duration_since(rhs)
    }
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime::ZERO
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.as_units())
    }
}
